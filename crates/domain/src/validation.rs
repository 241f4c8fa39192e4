// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::parse_iso_date;
use crate::error::DomainError;
use crate::recurrence::{
    EndCondition, Frequency, MAX_OCCURRENCES, RecurrencePattern, RecurrenceRule, WeekdaySet,
};
use crate::types::{NewAssignment, NewDutyDefinition, NewPersonnel, NewScheduleDuty, SubDutySlot};

fn require_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidField {
            field,
            reason: String::from("must not be empty"),
        });
    }
    Ok(())
}

/// Validates a new catalog duty.
///
/// # Errors
///
/// Returns an error if the name or code is blank.
pub fn validate_duty_fields(duty: &NewDutyDefinition) -> Result<(), DomainError> {
    require_text("name", &duty.name)?;
    require_text("code", &duty.code)?;
    Ok(())
}

/// Validates a new personnel record.
///
/// # Errors
///
/// Returns an error if the callsign or name is blank.
pub fn validate_personnel_fields(personnel: &NewPersonnel) -> Result<(), DomainError> {
    require_text("callsign", &personnel.callsign)?;
    require_text("name", &personnel.name)?;
    Ok(())
}

/// Validates a new schedule duty.
///
/// # Errors
///
/// Returns an error if the duty reference, name or code is blank.
pub fn validate_schedule_duty_fields(schedule_duty: &NewScheduleDuty) -> Result<(), DomainError> {
    require_text("duty_id", &schedule_duty.duty_id)?;
    require_text("duty_name", &schedule_duty.duty_name)?;
    require_text("duty_code", &schedule_duty.duty_code)?;
    Ok(())
}

/// Validates a new assignment.
///
/// Referenced schedule duties and personnel are not checked for existence.
///
/// # Errors
///
/// Returns an error if any reference or the time window is blank, or if the
/// slot index is negative.
pub fn validate_assignment_fields(assignment: &NewAssignment) -> Result<(), DomainError> {
    require_text("schedule_duty_id", &assignment.schedule_duty_id)?;
    require_text("personnel_id", &assignment.personnel.personnel_id)?;
    require_text("start_time", &assignment.start_time)?;
    require_text("end_time", &assignment.end_time)?;
    if assignment.slot_index < 0 {
        return Err(DomainError::InvalidField {
            field: "slot_index",
            reason: format!("must not be negative, got {}", assignment.slot_index),
        });
    }
    Ok(())
}

/// Validates the slot layout of a group duty.
///
/// # Errors
///
/// Returns an error if a slot has a blank name or a count below one.
pub fn validate_group_slots(slots: &[SubDutySlot]) -> Result<(), DomainError> {
    for slot in slots {
        require_text("slot name", &slot.name)?;
        if slot.count < 1 {
            return Err(DomainError::InvalidField {
                field: "slot count",
                reason: format!("must be at least 1, got {}", slot.count),
            });
        }
    }
    Ok(())
}

fn stepped_interval(frequency: &'static str, interval: i64) -> Result<u32, DomainError> {
    u32::try_from(interval)
        .ok()
        .filter(|step| *step >= 1)
        .ok_or(DomainError::InvalidInterval {
            frequency,
            interval,
        })
}

/// Validates a recurrence pattern into a tagged rule.
///
/// `interval` is checked only for daily, weekly and monthly rules; biweekly
/// and custom rules ignore it. `custom_days` is checked only for custom
/// rules. A non-positive occurrence count is valid and yields no dates.
///
/// # Arguments
///
/// * `pattern` - The caller-supplied pattern
///
/// # Errors
///
/// Returns an error if:
/// - The frequency or end type is unknown
/// - A stepped frequency has an interval below one
/// - A custom weekday index is outside `0..=6`
/// - The occurrence count exceeds [`MAX_OCCURRENCES`]
/// - The field required by the end type is missing
/// - The end date cannot be parsed
pub fn validate_recurrence_pattern(
    pattern: &RecurrencePattern,
) -> Result<RecurrenceRule, DomainError> {
    let frequency: Frequency = match pattern.frequency.trim() {
        "daily" => Frequency::Daily {
            interval: stepped_interval("daily", pattern.interval)?,
        },
        "weekly" => Frequency::Weekly {
            interval: stepped_interval("weekly", pattern.interval)?,
        },
        "biweekly" => Frequency::Biweekly,
        "monthly" => Frequency::Monthly {
            interval: stepped_interval("monthly", pattern.interval)?,
        },
        "custom" => Frequency::Custom {
            weekdays: WeekdaySet::from_indices(&pattern.custom_days)?,
        },
        other => return Err(DomainError::InvalidFrequency(other.to_string())),
    };

    let end: EndCondition = match pattern.end_type.trim() {
        "occurrences" => {
            let count: i64 = pattern
                .occurrences
                .ok_or(DomainError::MissingRecurrenceField {
                    end_type: "occurrences",
                    field: "occurrences",
                })?;
            let count: u32 = u32::try_from(count.max(0))
                .ok()
                .filter(|count| *count <= MAX_OCCURRENCES)
                .ok_or(DomainError::OccurrenceLimitExceeded {
                    limit: MAX_OCCURRENCES,
                })?;
            EndCondition::Occurrences(count)
        }
        "date" => {
            let end_date: &str =
                pattern
                    .end_date
                    .as_deref()
                    .ok_or(DomainError::MissingRecurrenceField {
                        end_type: "date",
                        field: "end_date",
                    })?;
            EndCondition::Until(parse_iso_date(end_date)?)
        }
        "never" => EndCondition::Never,
        other => return Err(DomainError::InvalidEndType(other.to_string())),
    };

    Ok(RecurrenceRule::new(frequency, end))
}
