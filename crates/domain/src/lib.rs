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

mod calendar;
mod error;
mod recurrence;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{add_days, add_months, format_iso_date, parse_iso_date, weekday_index};
pub use error::DomainError;
pub use recurrence::{
    EndCondition, Frequency, MAX_OCCURRENCES, NEVER_HORIZON_DAYS, RecurrencePattern,
    RecurrenceRule, WeekdaySet, generate_occurrence_dates,
};
pub use types::{
    Assignment, DateFilter, DutyDefinition, DutyGroupConfig, DutyKind, NewAssignment,
    NewDutyDefinition, NewPersonnel, NewScheduleDuty, Personnel, PersonnelRef, ScheduleDuty,
    SubDutySlot,
};
pub use validation::{
    validate_assignment_fields, validate_duty_fields, validate_group_slots,
    validate_personnel_fields, validate_recurrence_pattern, validate_schedule_duty_fields,
};
