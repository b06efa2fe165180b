use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub(crate) const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub(crate) fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub(crate) fn range(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "below 18.5",
            BmiCategory::Normal => "18.5 - 24.9",
            BmiCategory::Overweight => "25 - 29.9",
            BmiCategory::Obese => "30 and above",
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BmiResult {
    pub(crate) height_cm: f64,
    pub(crate) weight_kg: f64,
    pub(crate) bmi: f64,
    pub(crate) display: String,
    pub(crate) category: BmiCategory,
}

/// Parse a height or weight field; anything non-numeric is an invalid body
pub(crate) fn parse_measure(input: &str) -> Result<f64, AppError> {
    input.trim().parse::<f64>().map_err(|_| AppError::InvalidBody)
}

/// Height in centimeters, weight in kilograms
pub(crate) fn calculate(height_cm: f64, weight_kg: f64) -> Result<BmiResult, AppError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(height_cm) || !valid(weight_kg) {
        return Err(AppError::InvalidBody);
    }
    let meters = height_cm / 100.0;
    let bmi = weight_kg / (meters * meters);
    Ok(BmiResult {
        height_cm,
        weight_kg,
        bmi,
        display: format!("{bmi:.1}"),
        category: BmiCategory::classify(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.99), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn calculate_normal_weight() {
        let r = calculate(180.0, 75.0).unwrap();
        assert_eq!(r.display, "23.1");
        assert_eq!(r.category, BmiCategory::Normal);
        assert_eq!(r.category.label(), "Normal Weight");
    }

    #[test]
    fn calculate_obese() {
        let r = calculate(160.0, 90.0).unwrap();
        assert_eq!(r.display, "35.2");
        assert_eq!(r.category, BmiCategory::Obese);
    }

    #[test]
    fn parse_measure_rejects_text() {
        assert_eq!(parse_measure(" 172.5 ").unwrap(), 172.5);
        assert!(matches!(parse_measure("tall"), Err(AppError::InvalidBody)));
    }

    #[test]
    fn rejects_non_positive_or_nan() {
        let cases = [
            (0.0, 70.0),
            (170.0, 0.0),
            (-170.0, 70.0),
            (f64::NAN, 70.0),
            (170.0, f64::INFINITY),
        ];
        for (h, w) in cases {
            let err = calculate(h, w).unwrap_err();
            assert_eq!(err.to_string(), "Please enter valid height and weight");
        }
    }
}
