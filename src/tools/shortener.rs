//! URL shortener simulation
//!
//! Codes are generated locally and only recorded in history; no request is
//! ever made, so the short links do not resolve anywhere.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use url::Url;

use crate::error::AppError;
use crate::store::UrlRecord;

const CODE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 6;

#[derive(Debug, Serialize)]
pub(crate) struct ShortenedUrl {
    pub(crate) long_url: String,
    pub(crate) short_url: String,
    pub(crate) code: String,
    pub(crate) original_length: usize,
    pub(crate) short_length: usize,
    pub(crate) saved_chars: i64,
}

impl ShortenedUrl {
    pub(crate) fn to_record(&self, date: DateTime<Utc>) -> UrlRecord {
        UrlRecord {
            long_url: self.long_url.clone(),
            short_url: self.short_url.clone(),
            date,
        }
    }
}

/// Trimmed URL, required to be absolute
pub(crate) fn validate_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput {
            what: "a URL to shorten",
        });
    }
    Url::parse(trimmed).map_err(|_| AppError::InvalidUrl)?;
    Ok(trimmed.to_string())
}

fn validate_alias(alias: &str) -> Result<String, AppError> {
    let ok = alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(alias.to_string())
    } else {
        Err(AppError::InvalidAlias {
            input: alias.to_string(),
        })
    }
}

pub(crate) fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARS[rng.gen_range(0..CODE_CHARS.len())] as char)
        .collect()
}

pub(crate) fn shorten<R: Rng + ?Sized>(
    url: &str,
    alias: Option<&str>,
    base_url: &str,
    rng: &mut R,
) -> Result<ShortenedUrl, AppError> {
    let long_url = validate_url(url)?;
    let code = match alias.map(str::trim).filter(|a| !a.is_empty()) {
        Some(alias) => validate_alias(alias)?,
        None => generate_code(rng),
    };
    let short_url = format!("{base_url}{code}");
    let original_length = long_url.chars().count();
    let short_length = short_url.chars().count();
    Ok(ShortenedUrl {
        saved_chars: original_length as i64 - short_length as i64,
        long_url,
        short_url,
        code,
        original_length,
        short_length,
    })
}
