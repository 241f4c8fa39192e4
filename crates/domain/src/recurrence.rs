// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence rules and date-sequence generation.
//!
//! A [`RecurrencePattern`] is the loosely-typed shape accepted from callers.
//! It is validated into a [`RecurrenceRule`] (see
//! [`crate::validate_recurrence_pattern`]) before any dates are produced, so
//! generation never has to deal with missing or contradictory fields.

use crate::calendar::{add_days, add_months, weekday_index};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Days past the start date that bound an open-ended (`never`) rule.
pub const NEVER_HORIZON_DAYS: i64 = 90;

/// Most dates a single rule may produce.
pub const MAX_OCCURRENCES: u32 = 366;

const fn default_interval() -> i64 {
    1
}

/// A recurrence request as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrencePattern {
    /// One of `daily`, `weekly`, `biweekly`, `monthly`, `custom`.
    pub frequency: String,
    /// Step size for daily, weekly and monthly rules.
    #[serde(default = "default_interval")]
    pub interval: i64,
    /// One of `occurrences`, `date`, `never`.
    pub end_type: String,
    /// Number of dates to produce when `end_type` is `occurrences`.
    #[serde(default)]
    pub occurrences: Option<i64>,
    /// Inclusive last date (`YYYY-MM-DD`) when `end_type` is `date`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Weekday indices, Monday = 0 through Sunday = 6, for `custom` rules.
    #[serde(default)]
    pub custom_days: Vec<i64>,
}

/// A set of weekdays stored as a bitmask, bit 0 = Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Builds a set from Monday-based weekday indices.
    ///
    /// Duplicate indices are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekdayIndex` for any index outside `0..=6`.
    pub fn from_indices(indices: &[i64]) -> Result<Self, DomainError> {
        let mut set = Self::new();
        for &index in indices {
            let bit: u8 = u8::try_from(index)
                .ok()
                .filter(|bit| *bit <= 6)
                .ok_or(DomainError::InvalidWeekdayIndex(index))?;
            set.0 |= 1 << bit;
        }
        Ok(set)
    }

    /// Returns whether the weekday of `date` is in the set.
    #[must_use]
    pub const fn contains(&self, date: Date) -> bool {
        self.0 & (1 << weekday_index(date)) != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// How successive dates are stepped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    /// Every `interval` days.
    Daily { interval: u32 },
    /// Every `interval` weeks.
    Weekly { interval: u32 },
    /// Every 14 days.
    Biweekly,
    /// Every `interval` calendar months, clamping the day and carrying it.
    Monthly { interval: u32 },
    /// Every calendar day whose weekday is in the set.
    Custom { weekdays: WeekdaySet },
}

impl Frequency {
    /// Returns the wire name of this frequency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily { .. } => "daily",
            Self::Weekly { .. } => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly { .. } => "monthly",
            Self::Custom { .. } => "custom",
        }
    }

    /// Returns the first date at or after `start` that this frequency emits.
    fn first_on_or_after(&self, start: Date) -> Result<Date, DomainError> {
        match self {
            Self::Custom { weekdays } => {
                let mut candidate: Date = start;
                while !weekdays.contains(candidate) {
                    candidate = add_days(candidate, 1)?;
                }
                Ok(candidate)
            }
            _ => Ok(start),
        }
    }

    /// Returns the date emitted after `current`.
    fn next_after(&self, current: Date) -> Result<Date, DomainError> {
        match self {
            Self::Daily { interval } => add_days(current, i64::from(*interval)),
            Self::Weekly { interval } => add_days(current, 7 * i64::from(*interval)),
            Self::Biweekly => add_days(current, 14),
            // The clamped day of `current` is what gets carried forward
            Self::Monthly { interval } => add_months(current, *interval),
            Self::Custom { weekdays } => {
                let mut candidate: Date = add_days(current, 1)?;
                while !weekdays.contains(candidate) {
                    candidate = add_days(candidate, 1)?;
                }
                Ok(candidate)
            }
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When a recurrence stops producing dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCondition {
    /// Stop after this many dates.
    Occurrences(u32),
    /// Stop after this date (inclusive).
    Until(Date),
    /// Open-ended, bounded by [`NEVER_HORIZON_DAYS`].
    Never,
}

impl EndCondition {
    /// Returns the wire name of this end condition.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Occurrences(_) => "occurrences",
            Self::Until(_) => "date",
            Self::Never => "never",
        }
    }
}

/// A validated recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub end: EndCondition,
}

impl RecurrenceRule {
    #[must_use]
    pub const fn new(frequency: Frequency, end: EndCondition) -> Self {
        Self { frequency, end }
    }
}

/// Generates every date a rule produces from `start`.
///
/// The result is ascending with no duplicates. Every date is on or after
/// `start`.
///
/// # Arguments
///
/// * `start` - The first candidate date
/// * `rule` - The validated recurrence rule
///
/// # Errors
///
/// Returns an error if:
/// - Stepping leaves the representable calendar before an occurrence count
///   is reached (`DomainError::DateArithmeticOverflow`)
/// - The rule would produce more than [`MAX_OCCURRENCES`] dates
pub fn generate_occurrence_dates(
    start: Date,
    rule: &RecurrenceRule,
) -> Result<Vec<Date>, DomainError> {
    if matches!(rule.frequency, Frequency::Custom { weekdays } if weekdays.is_empty()) {
        return Ok(Vec::new());
    }

    let (limit, horizon): (Option<usize>, Option<Date>) = match rule.end {
        EndCondition::Occurrences(0) => return Ok(Vec::new()),
        EndCondition::Occurrences(count) => (usize::try_from(count).ok(), None),
        EndCondition::Until(end_date) => (None, Some(end_date)),
        EndCondition::Never => (None, Some(add_days(start, NEVER_HORIZON_DAYS)?)),
    };

    if horizon.is_some_and(|bound| bound < start) {
        return Ok(Vec::new());
    }

    let max_len: usize = usize::try_from(MAX_OCCURRENCES).unwrap_or(usize::MAX);
    let mut dates: Vec<Date> = Vec::new();
    let mut candidate: Date = match (rule.frequency.first_on_or_after(start), horizon) {
        (Ok(first), _) => first,
        (Err(_), Some(_)) => return Ok(Vec::new()),
        (Err(err), None) => return Err(err),
    };

    loop {
        if horizon.is_some_and(|bound| candidate > bound) {
            break;
        }
        if dates.len() >= max_len {
            return Err(DomainError::OccurrenceLimitExceeded {
                limit: MAX_OCCURRENCES,
            });
        }
        dates.push(candidate);
        if limit.is_some_and(|count| dates.len() >= count) {
            break;
        }
        candidate = match (rule.frequency.next_after(candidate), horizon) {
            (Ok(next), _) => next,
            // Any date past the calendar end is also past the bound
            (Err(_), Some(_)) => break,
            (Err(err), None) => return Err(err),
        };
    }

    Ok(dates)
}
