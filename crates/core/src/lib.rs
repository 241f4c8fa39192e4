// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod materialize;

#[cfg(test)]
mod tests;

use duty_roster_domain::{
    RecurrencePattern, RecurrenceRule, generate_occurrence_dates, validate_recurrence_pattern,
};
use time::Date;
use tracing::info;

// Re-export public types and functions
pub use error::{CoreError, MaterializationError};
pub use materialize::{
    MaterializationOutcome, OccurrenceDraft, OccurrenceSink, OccurrenceTemplate,
    PersistedOccurrence, materialize_occurrences,
};

/// Expands a recurrence pattern into persisted schedule duties and assignments.
///
/// The pattern is validated and every date generated before the first
/// write, so a malformed pattern never leaves partial state behind.
///
/// # Arguments
///
/// * `sink` - Where each occurrence is persisted
/// * `template` - The duty, person and time window shared by every occurrence
/// * `start` - The first candidate date
/// * `pattern` - The caller-supplied recurrence pattern
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the pattern is invalid or date
/// generation overflows, and `CoreError::PartialMaterialization` if the sink
/// fails part way through. The latter carries what was already persisted.
pub fn expand_recurring_assignment<S: OccurrenceSink>(
    sink: &mut S,
    template: &OccurrenceTemplate,
    start: Date,
    pattern: &RecurrencePattern,
) -> Result<MaterializationOutcome, CoreError<S::Error>> {
    let rule: RecurrenceRule = validate_recurrence_pattern(pattern)?;
    let dates: Vec<Date> = generate_occurrence_dates(start, &rule)?;

    info!(
        frequency = %rule.frequency,
        end_type = rule.end.as_str(),
        planned = dates.len(),
        personnel_id = %template.personnel.personnel_id,
        "Expanding recurring assignment"
    );

    Ok(materialize_occurrences(sink, template, &dates)?)
}
