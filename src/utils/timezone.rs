use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Timezone used to decide what "today" is and to display stored timestamps
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Calendar date of the given instant in this timezone
    pub(crate) fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        }
    }

    pub(crate) fn today(self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Render a stored UTC timestamp as "YYYY-MM-DD HH:MM" in this timezone
    pub(crate) fn format_timestamp(self, utc: DateTime<Utc>) -> String {
        const FMT: &str = "%Y-%m-%d %H:%M";
        match self {
            Timezone::Local => utc.with_timezone(&Local).format(FMT).to_string(),
            Timezone::Named(tz) => utc.with_timezone(&tz).format(FMT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_any_case() {
        for raw in ["", "local", "LOCAL", "  Local  "] {
            assert!(matches!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Local
            ));
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z", "  UTC  "] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::America::New_York)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn date_of_crosses_midnight_east_of_utc() {
        let utc = "2026-02-12T20:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("Asia/Shanghai")).unwrap();
        assert_eq!(tz.date_of(utc), NaiveDate::from_ymd_opt(2026, 2, 13).unwrap());
        let utc_tz = Timezone::Named(chrono_tz::UTC);
        assert_eq!(utc_tz.date_of(utc), NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());
    }

    #[test]
    fn format_timestamp_shifts_to_named_zone() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(tz.format_timestamp(utc), "2026-06-15 08:00");
    }
}
