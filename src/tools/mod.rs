//! Individual utility tools
//!
//! Each tool is a set of pure functions returning a serializable result;
//! printing, notices and usage tracking live in `app` and `output`.

pub(crate) mod age;
pub(crate) mod bmi;
pub(crate) mod codec;
pub(crate) mod color;
pub(crate) mod json;
pub(crate) mod password;
pub(crate) mod qr;
pub(crate) mod random;
pub(crate) mod resize;
pub(crate) mod shortener;
pub(crate) mod text;
pub(crate) mod units;

/// Tool identifiers as recorded in usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tool {
    QrGenerator,
    ImageResizer,
    PasswordGenerator,
    UnitConverter,
    TextReverser,
    WordCounter,
    ColorPicker,
    AgeCalculator,
    BmiCalculator,
    NumberRandomizer,
    UrlShortener,
    Base64Converter,
    JsonFormatter,
}

impl Tool {
    pub(crate) const ALL: [Tool; 13] = [
        Tool::QrGenerator,
        Tool::ImageResizer,
        Tool::PasswordGenerator,
        Tool::UnitConverter,
        Tool::TextReverser,
        Tool::WordCounter,
        Tool::ColorPicker,
        Tool::AgeCalculator,
        Tool::BmiCalculator,
        Tool::NumberRandomizer,
        Tool::UrlShortener,
        Tool::Base64Converter,
        Tool::JsonFormatter,
    ];

    /// Stable name used as the usage counter key
    pub(crate) fn name(self) -> &'static str {
        match self {
            Tool::QrGenerator => "qr-generator",
            Tool::ImageResizer => "image-resizer",
            Tool::PasswordGenerator => "password-generator",
            Tool::UnitConverter => "unit-converter",
            Tool::TextReverser => "text-reverser",
            Tool::WordCounter => "word-counter",
            Tool::ColorPicker => "color-picker",
            Tool::AgeCalculator => "age-calculator",
            Tool::BmiCalculator => "bmi-calculator",
            Tool::NumberRandomizer => "number-randomizer",
            Tool::UrlShortener => "url-shortener",
            Tool::Base64Converter => "base64-converter",
            Tool::JsonFormatter => "json-formatter",
        }
    }

    pub(crate) fn display_name(self) -> &'static str {
        match self {
            Tool::QrGenerator => "QR Code Generator",
            Tool::ImageResizer => "Image Resizer",
            Tool::PasswordGenerator => "Password Generator",
            Tool::UnitConverter => "Unit Converter",
            Tool::TextReverser => "Text Reverser",
            Tool::WordCounter => "Word Counter",
            Tool::ColorPicker => "Color Picker",
            Tool::AgeCalculator => "Age Calculator",
            Tool::BmiCalculator => "BMI Calculator",
            Tool::NumberRandomizer => "Number Randomizer",
            Tool::UrlShortener => "URL Shortener",
            Tool::Base64Converter => "Base64 Converter",
            Tool::JsonFormatter => "JSON Formatter",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        let mut names: Vec<_> = Tool::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Tool::ALL.len());
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Tool::from_name("calculator"), None);
    }
}
