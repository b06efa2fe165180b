use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Please enter {what}")]
    EmptyInput { what: &'static str },

    #[error("Invalid {field} \"{input}\" (expected a number)")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Maximum must be greater than minimum")]
    InvalidRange,

    #[error("Password length must be between {min} and {max}")]
    InvalidLength { min: usize, max: usize },

    #[error("Please select at least one character type")]
    NoCharset,

    #[error("Please enter valid height and weight")]
    InvalidBody,

    #[error("Birth date cannot be in the future")]
    FutureBirthDate,

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Please enter a valid URL")]
    InvalidUrl,

    #[error("Invalid alias \"{input}\" (use letters, digits, '-' or '_')")]
    InvalidAlias { input: String },

    #[error("Invalid color \"{input}\" (expected #RRGGBB or rgb(r, g, b))")]
    InvalidColor { input: String },

    #[error("Unknown unit \"{input}\" (expected one of: {expected})")]
    UnknownUnit { input: String, expected: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid Base64 string")]
    InvalidBase64,

    #[error("Error generating QR code: {0}")]
    Qr(String),

    #[error("Failed to process image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to resize {failed} of {total} images")]
    ResizeFailed { failed: usize, total: usize },

    #[error("No images matched {pattern}")]
    NoImages { pattern: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Failed to encode stored value: {0}")]
    StoredValue(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_empty_input() {
        let e = AppError::EmptyInput {
            what: "text or URL",
        };
        assert_eq!(e.to_string(), "Please enter text or URL");
    }

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_unit() {
        let e = AppError::UnknownUnit {
            input: "mi".to_string(),
            expected: "m, cm".to_string(),
        };
        assert_eq!(e.to_string(), r#"Unknown unit "mi" (expected one of: m, cm)"#);
    }

    #[test]
    fn app_error_display_json_carries_parser_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = AppError::InvalidJson(err.to_string());
        assert!(e.to_string().starts_with("Invalid JSON: "));
        assert!(e.to_string().contains("line 1"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "missing.png");
    }
}
