// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required text field was empty or blank.
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Duty kind is not one of the supported values.
    #[error("Invalid duty type '{0}': must be 'single' or 'group'")]
    InvalidDutyKind(String),
    /// Recurrence frequency is not one of the supported values.
    #[error(
        "Invalid recurrence frequency '{0}': must be one of daily, weekly, biweekly, monthly, custom"
    )]
    InvalidFrequency(String),
    /// Recurrence end type is not one of the supported values.
    #[error("Invalid recurrence end type '{0}': must be one of occurrences, date, never")]
    InvalidEndType(String),
    /// The recurrence interval must be at least one for stepped frequencies.
    #[error("Invalid recurrence interval {interval} for {frequency} frequency: must be at least 1")]
    InvalidInterval {
        /// The frequency that uses the interval.
        frequency: &'static str,
        /// The rejected interval.
        interval: i64,
    },
    /// The field required by the selected end type is missing.
    #[error("Recurrence end type '{end_type}' requires '{field}'")]
    MissingRecurrenceField {
        /// The selected end type.
        end_type: &'static str,
        /// The missing field.
        field: &'static str,
    },
    /// A custom weekday index is outside 0 (Monday) ..= 6 (Sunday).
    #[error("Invalid custom weekday index {0}: must be between 0 (Monday) and 6 (Sunday)")]
    InvalidWeekdayIndex(i64),
    /// Failed to parse date from string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A recurrence would produce more dates than one request may create.
    #[error("Recurrence would produce more than {limit} occurrences")]
    OccurrenceLimitExceeded {
        /// The largest number of dates allowed.
        limit: u32,
    },
}
