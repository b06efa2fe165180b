//! Length unit conversion through meters

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LengthUnit {
    M,
    Cm,
    Km,
    Ft,
    In,
    Yd,
}

impl LengthUnit {
    pub(crate) const ALL: [LengthUnit; 6] = [
        LengthUnit::M,
        LengthUnit::Cm,
        LengthUnit::Km,
        LengthUnit::Ft,
        LengthUnit::In,
        LengthUnit::Yd,
    ];

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            LengthUnit::M => "m",
            LengthUnit::Cm => "cm",
            LengthUnit::Km => "km",
            LengthUnit::Ft => "ft",
            LengthUnit::In => "in",
            LengthUnit::Yd => "yd",
        }
    }

    pub(crate) fn to_meters(self) -> f64 {
        match self {
            LengthUnit::M => 1.0,
            LengthUnit::Cm => 0.01,
            LengthUnit::Km => 1000.0,
            LengthUnit::Ft => 0.3048,
            LengthUnit::In => 0.0254,
            LengthUnit::Yd => 0.9144,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LengthUnit::ALL
            .into_iter()
            .find(|u| u.symbol() == normalized)
            .ok_or_else(|| AppError::UnknownUnit {
                input: s.to_string(),
                expected: LengthUnit::ALL
                    .iter()
                    .map(|u| u.symbol())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Conversion {
    pub(crate) value: f64,
    pub(crate) from: LengthUnit,
    pub(crate) to: LengthUnit,
    pub(crate) result: f64,
    pub(crate) display: String,
}

pub(crate) fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.to_meters() / to.to_meters()
}

/// Six fixed decimals with trailing zeros and a dangling point removed
pub(crate) fn format_result(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn parse_value(input: &str) -> Result<f64, AppError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            field: "value",
            input: input.to_string(),
        })
}

pub(crate) fn run(value: &str, from: &str, to: &str) -> Result<Conversion, AppError> {
    let value = parse_value(value)?;
    let from: LengthUnit = from.parse()?;
    let to: LengthUnit = to.parse()?;
    let result = convert(value, from, to);
    Ok(Conversion {
        value,
        from,
        to,
        result,
        display: format_result(result),
    })
}
