//! Age arithmetic on calendar dates
//!
//! Years, months and days are computed field by field with borrowing: a
//! negative day count borrows the length of the month before `today`'s
//! month, a negative month count borrows a year. When the birth day does
//! not exist in the borrowed month, the anniversary is clamped to that
//! month's last day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct Age {
    pub(crate) birth_date: NaiveDate,
    pub(crate) today: NaiveDate,
    pub(crate) years: i32,
    pub(crate) months: i32,
    pub(crate) days: i32,
    pub(crate) total_days: i64,
    pub(crate) total_weeks: i64,
    pub(crate) total_months: i32,
    pub(crate) next_birthday: NaiveDate,
    pub(crate) days_until_birthday: i64,
}

/// Number of days in the month preceding `date`'s month
fn days_in_previous_month(date: NaiveDate) -> i32 {
    // Day before the 1st of this month is the last day of the previous one
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day() as i32)
}

/// The birthday in `year`; Feb 29 falls on Mar 1 in common years
fn birthday_in(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

pub(crate) fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday_in(birth, today.year());
    if this_year < today {
        birthday_in(birth, today.year() + 1)
    } else {
        this_year
    }
}

pub(crate) fn calculate(birth: NaiveDate, today: NaiveDate) -> Result<Age, AppError> {
    if birth > today {
        return Err(AppError::FutureBirthDate);
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        let borrowed = days_in_previous_month(today);
        days = if birth.day() as i32 > borrowed {
            today.day() as i32
        } else {
            days + borrowed
        };
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (today - birth).num_days();
    let next = next_birthday(birth, today);

    Ok(Age {
        birth_date: birth,
        today,
        years,
        months,
        days,
        total_days,
        total_weeks: total_days / 7,
        total_months: years * 12 + months,
        next_birthday: next,
        days_until_birthday: (next - today).num_days(),
    })
}
