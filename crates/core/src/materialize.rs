// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Turns generated dates into persisted schedule duties and assignments.

use crate::error::MaterializationError;
use duty_roster_domain::{DutyKind, NewScheduleDuty, PersonnelRef};
use time::Date;
use tracing::{debug, info, warn};

/// What every occurrence of a recurring assignment shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceTemplate {
    /// Catalog duty the generated schedule duties point at.
    pub duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    /// Qualifications snapshot copied onto each generated schedule duty.
    pub qualifications: Vec<String>,
    pub personnel: PersonnelRef,
    pub start_time: String,
    pub end_time: String,
    pub sub_duty_name: String,
    pub slot_index: i64,
}

impl OccurrenceTemplate {
    /// Builds the occurrence for one date.
    #[must_use]
    pub fn draft_for(&self, date: Date) -> OccurrenceDraft {
        OccurrenceDraft {
            schedule_duty: NewScheduleDuty {
                duty_id: self.duty_id.clone(),
                duty_name: self.duty_name.clone(),
                duty_code: self.duty_code.clone(),
                kind: DutyKind::Single,
                qualifications: self.qualifications.clone(),
                date,
            },
            personnel: self.personnel.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            sub_duty_name: self.sub_duty_name.clone(),
            slot_index: self.slot_index,
        }
    }
}

/// One schedule duty plus the assignment that staffs it.
///
/// The assignment's schedule duty reference is only known once the schedule
/// duty has been written, so the sink links the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceDraft {
    pub schedule_duty: NewScheduleDuty,
    pub personnel: PersonnelRef,
    pub start_time: String,
    pub end_time: String,
    pub sub_duty_name: String,
    pub slot_index: i64,
}

impl OccurrenceDraft {
    #[must_use]
    pub const fn date(&self) -> Date {
        self.schedule_duty.date
    }
}

/// Identifiers of a durably persisted occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOccurrence {
    pub schedule_duty_id: String,
    pub assignment_id: String,
    pub date: Date,
}

/// The write side used by the materializer.
///
/// An implementation must make each call all-or-nothing: the schedule duty,
/// the assignment and the personnel counter increment are either all durable
/// or none of them are.
pub trait OccurrenceSink {
    /// The error returned when an occurrence cannot be persisted.
    type Error: std::error::Error + 'static;

    /// Persists one occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if the occurrence could not be written. Nothing from
    /// this occurrence is durable in that case.
    fn persist_occurrence(
        &mut self,
        occurrence: &OccurrenceDraft,
    ) -> Result<PersistedOccurrence, Self::Error>;
}

/// The result of materializing a sequence of dates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaterializationOutcome {
    occurrences: Vec<PersistedOccurrence>,
}

impl MaterializationOutcome {
    /// Number of occurrences durably persisted.
    #[must_use]
    pub const fn created_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Persisted dates, ascending.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.occurrences.iter().map(|o| o.date).collect()
    }

    #[must_use]
    pub fn occurrences(&self) -> &[PersistedOccurrence] {
        &self.occurrences
    }
}

/// Persists one occurrence per date, in the order given.
///
/// Stops at the first sink failure. Earlier occurrences stay persisted and
/// are reported in the error.
///
/// # Arguments
///
/// * `sink` - Where each occurrence is persisted
/// * `template` - Shared fields for every occurrence
/// * `dates` - Ascending dates to materialize
///
/// # Errors
///
/// Returns a `MaterializationError` carrying the completed occurrences if
/// the sink fails.
pub fn materialize_occurrences<S: OccurrenceSink>(
    sink: &mut S,
    template: &OccurrenceTemplate,
    dates: &[Date],
) -> Result<MaterializationOutcome, MaterializationError<S::Error>> {
    let mut outcome: MaterializationOutcome = MaterializationOutcome::default();

    for &date in dates {
        let draft: OccurrenceDraft = template.draft_for(date);
        match sink.persist_occurrence(&draft) {
            Ok(persisted) => {
                debug!(
                    schedule_duty_id = %persisted.schedule_duty_id,
                    assignment_id = %persisted.assignment_id,
                    %date,
                    "Persisted occurrence"
                );
                outcome.occurrences.push(persisted);
            }
            Err(source) => {
                warn!(
                    %date,
                    created_count = outcome.created_count(),
                    planned = dates.len(),
                    error = %source,
                    "Occurrence materialization stopped"
                );
                return Err(MaterializationError {
                    completed: outcome,
                    failed_date: date,
                    planned: dates.len(),
                    source,
                });
            }
        }
    }

    info!(
        created_count = outcome.created_count(),
        "Materialized occurrences"
    );
    Ok(outcome)
}
