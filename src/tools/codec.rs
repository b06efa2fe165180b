//! Base64 text encoding
//!
//! Text is encoded as UTF-8 with the standard padded alphabet. Decoding is
//! lenient the way browsers' `atob` is: ASCII whitespace is ignored and
//! padding may be omitted, but the decoded bytes must be valid UTF-8.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Serialize;

use crate::error::AppError;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Direction {
    Encode,
    Decode,
}

#[derive(Debug, Serialize)]
pub(crate) struct CodecResult {
    pub(crate) direction: Direction,
    pub(crate) output: String,
    pub(crate) input_length: usize,
    pub(crate) output_length: usize,
}

pub(crate) fn encode(text: &str) -> Result<String, AppError> {
    if text.is_empty() {
        return Err(AppError::EmptyInput {
            what: "text to encode",
        });
    }
    Ok(STANDARD.encode(text.as_bytes()))
}

pub(crate) fn decode(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyInput {
            what: "Base64 string to decode",
        });
    }
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = LENIENT
        .decode(compact.as_bytes())
        .map_err(|_| AppError::InvalidBase64)?;
    String::from_utf8(bytes).map_err(|_| AppError::InvalidBase64)
}

pub(crate) fn run(direction: Direction, input: &str) -> Result<CodecResult, AppError> {
    let output = match direction {
        Direction::Encode => encode(input)?,
        Direction::Decode => decode(input)?,
    };
    Ok(CodecResult {
        direction,
        input_length: input.chars().count(),
        output_length: output.chars().count(),
        output,
    })
}
