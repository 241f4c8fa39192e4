// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Naive calendar-date helpers.
//!
//! Dates are plain calendar dates with no timezone attached. They cross
//! every boundary (API, storage) as `YYYY-MM-DD` strings.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month};

/// The ISO calendar-date format used on the wire and in storage.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Returns the weekday index of a date, Monday = 0 through Sunday = 6.
#[must_use]
pub const fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_monday()
}

/// Adds a number of days to a date.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result is outside
/// the representable calendar.
pub fn add_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {}", format_iso_date(date)),
        })
}

/// Adds calendar months to a date, keeping its day-of-month.
///
/// When the target month is shorter than the date's day-of-month, the day
/// is clamped to the last day of the target month. The caller carries the
/// clamped day into any later step, so `Jan 31 + 1` is `Feb 28` and
/// `Feb 28 + 1` is `Mar 28`.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result is outside
/// the representable calendar.
pub fn add_months(date: Date, months: u32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {months} months to {}", format_iso_date(date)),
    };

    // Months since year 0, zero-based
    let month_index: i64 =
        i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1 + i64::from(months);

    let year: i32 = i32::try_from(month_index.div_euclid(12)).map_err(|_| overflow())?;
    let month_number: u8 = u8::try_from(month_index.rem_euclid(12) + 1).map_err(|_| overflow())?;
    let month: Month = Month::try_from(month_number).map_err(|_| overflow())?;

    let day: u8 = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).map_err(|_| overflow())
}
