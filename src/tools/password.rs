use rand::Rng;
use serde::Serialize;

use crate::error::AppError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub(crate) const MIN_LENGTH: usize = 4;
pub(crate) const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PasswordOptions {
    pub(crate) length: usize,
    pub(crate) uppercase: bool,
    pub(crate) lowercase: bool,
    pub(crate) numbers: bool,
    pub(crate) symbols: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeneratedPasswords {
    pub(crate) passwords: Vec<String>,
    pub(crate) length: usize,
    pub(crate) charset_size: usize,
    pub(crate) entropy_bits: f64,
}

impl PasswordOptions {
    /// Selected character classes, concatenated in a fixed order
    pub(crate) fn charset(&self) -> String {
        let mut charset = String::new();
        for (enabled, class) in [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ] {
            if enabled {
                charset.push_str(class);
            }
        }
        charset
    }

    fn validate(&self) -> Result<Vec<u8>, AppError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(AppError::InvalidLength {
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        let charset = self.charset().into_bytes();
        if charset.is_empty() {
            return Err(AppError::NoCharset);
        }
        Ok(charset)
    }
}

fn draw<R: Rng + ?Sized>(charset: &[u8], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())] as char)
        .collect()
}

pub(crate) fn generate_many<R: Rng + ?Sized>(
    opts: &PasswordOptions,
    count: usize,
    rng: &mut R,
) -> Result<GeneratedPasswords, AppError> {
    let charset = opts.validate()?;
    let passwords = (0..count.max(1))
        .map(|_| draw(&charset, opts.length, rng))
        .collect();
    Ok(GeneratedPasswords {
        passwords,
        length: opts.length,
        charset_size: charset.len(),
        entropy_bits: entropy_bits(opts.length, charset.len()),
    })
}

/// Bits of entropy for a uniformly drawn password
pub(crate) fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate_one(opts: &PasswordOptions, rng: &mut StdRng) -> Result<String, AppError> {
        generate_many(opts, 1, rng).map(|g| g.passwords.concat())
    }

    fn opts(length: usize) -> PasswordOptions {
        PasswordOptions {
            length,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    #[test]
    fn charset_follows_selection_order() {
        let o = PasswordOptions {
            uppercase: false,
            symbols: false,
            ..opts(8)
        };
        assert_eq!(o.charset(), format!("{LOWERCASE}{NUMBERS}"));
        assert_eq!(opts(8).charset().len(), 26 + 26 + 10 + SYMBOLS.len());
    }

    #[test]
    fn generated_password_uses_only_selected_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let o = PasswordOptions {
            uppercase: false,
            lowercase: false,
            symbols: false,
            ..opts(64)
        };
        let pw = generate_one(&o, &mut rng).unwrap();
        assert_eq!(pw.len(), 64);
        assert!(pw.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn no_charset_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let o = PasswordOptions {
            length: 12,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        let err = generate_one(&o, &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one character type");
    }

    #[test]
    fn length_out_of_range_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_one(&opts(3), &mut rng),
            Err(AppError::InvalidLength { .. })
        ));
        assert!(generate_one(&opts(MAX_LENGTH + 1), &mut rng).is_err());
        assert!(generate_one(&opts(MIN_LENGTH), &mut rng).is_ok());
    }

    #[test]
    fn generate_many_reports_entropy() {
        let mut rng = StdRng::seed_from_u64(42);
        let o = PasswordOptions {
            uppercase: false,
            numbers: false,
            symbols: false,
            ..opts(10)
        };
        let result = generate_many(&o, 3, &mut rng).unwrap();
        assert_eq!(result.passwords.len(), 3);
        assert_eq!(result.charset_size, 26);
        assert!((result.entropy_bits - 10.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_empty_charset_is_zero() {
        assert_eq!(entropy_bits(16, 0), 0.0);
        assert_eq!(entropy_bits(8, 2), 8.0);
    }
}
