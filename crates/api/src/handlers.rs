// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use duty_roster::{MaterializationOutcome, OccurrenceTemplate, expand_recurring_assignment};
use duty_roster_domain::{
    DateFilter, DutyKind, NewAssignment, NewDutyDefinition, NewPersonnel, NewScheduleDuty,
    PersonnelRef, ScheduleDuty, format_iso_date, parse_iso_date, validate_assignment_fields,
    validate_duty_fields, validate_group_slots, validate_personnel_fields,
    validate_schedule_duty_fields,
};
use duty_roster_persistence::Persistence;
use std::str::FromStr;
use time::Date;
use tracing::{debug, info};

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AssignmentResponse, CreateAssignmentRequest, CreateDutyRequest, CreatePersonnelRequest,
    CreateRecurringAssignmentRequest, CreateRecurringAssignmentResponse,
    CreateScheduleDutyRequest, DateFilterQuery, DeletedResponse, DutyGroupConfigResponse,
    DutyResponse, ListDutiesQuery, ListPersonnelQuery, PersonnelResponse,
    ReassignAssignmentRequest, RootResponse, SaveDutyGroupConfigRequest, ScheduleDutyResponse,
};

/// The banner returned by the root endpoint.
pub const ROOT_MESSAGE: &str = "Duty Roster API";

/// Parses a required ISO date, reporting failures against `field`.
fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_iso_date(value.trim()).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

/// Parses an optional ISO date. Blank values count as absent.
fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>, ApiError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => parse_date_field(field, text).map(Some),
        _ => Ok(None),
    }
}

fn require_field(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("must not be empty"),
        });
    }
    Ok(())
}

/// Returns a search term, or `None` when it is blank.
fn search_term(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|s| !s.is_empty())
}

/// Resolves list query parameters into a date filter.
///
/// # Errors
///
/// Returns an error if a present date cannot be parsed.
pub fn resolve_date_filter(query: &DateFilterQuery) -> Result<DateFilter, ApiError> {
    let date: Option<Date> = parse_optional_date("date", query.date.as_deref())?;
    let start: Option<Date> = parse_optional_date("start_date", query.start_date.as_deref())?;
    let end: Option<Date> = parse_optional_date("end_date", query.end_date.as_deref())?;
    Ok(DateFilter::from_bounds(date, start, end))
}

/// Returns the API banner.
#[must_use]
pub fn root_message() -> RootResponse {
    RootResponse {
        message: ROOT_MESSAGE.to_string(),
    }
}

// ============================================================================
// Duty Catalog
// ============================================================================

/// Lists catalog duties.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `query` - Optional case-insensitive name search
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn list_duties(
    persistence: &mut Persistence,
    query: &ListDutiesQuery,
) -> Result<Vec<DutyResponse>, ApiError> {
    let duties = persistence
        .list_duties(search_term(query.search.as_deref()))
        .map_err(|e| translate_persistence_error(e, "Duty"))?;
    Ok(duties.into_iter().map(DutyResponse::from).collect())
}

/// Adds a duty to the catalog.
///
/// # Errors
///
/// Returns an error if the name or code is blank, or the duty cannot be
/// stored.
pub fn create_duty(
    persistence: &mut Persistence,
    request: CreateDutyRequest,
) -> Result<DutyResponse, ApiError> {
    let duty: NewDutyDefinition = NewDutyDefinition {
        name: request.name,
        code: request.code,
        qualifications: request.qualifications,
    };
    validate_duty_fields(&duty).map_err(translate_domain_error)?;

    let created = persistence
        .create_duty(&duty)
        .map_err(|e| translate_persistence_error(e, "Duty"))?;
    debug!(duty_id = %created.duty_id, code = %created.code, "Created duty");
    Ok(DutyResponse::from(created))
}

// ============================================================================
// Personnel
// ============================================================================

/// Lists personnel, optionally filtered by search term and availability.
///
/// # Errors
///
/// Returns an error if personnel cannot be read.
pub fn list_personnel(
    persistence: &mut Persistence,
    query: &ListPersonnelQuery,
) -> Result<Vec<PersonnelResponse>, ApiError> {
    let personnel = persistence
        .list_personnel(search_term(query.search.as_deref()), query.available)
        .map_err(|e| translate_persistence_error(e, "Personnel"))?;
    Ok(personnel.into_iter().map(PersonnelResponse::from).collect())
}

/// Adds a person. Their duty counter starts at zero.
///
/// # Errors
///
/// Returns an error if the callsign or name is blank, or the person cannot
/// be stored.
pub fn create_personnel(
    persistence: &mut Persistence,
    request: CreatePersonnelRequest,
) -> Result<PersonnelResponse, ApiError> {
    let person: NewPersonnel = NewPersonnel {
        callsign: request.callsign,
        name: request.name,
        qualifications: request.qualifications,
        available: request.available,
    };
    validate_personnel_fields(&person).map_err(translate_domain_error)?;

    let created = persistence
        .create_personnel(&person)
        .map_err(|e| translate_persistence_error(e, "Personnel"))?;
    debug!(
        personnel_id = %created.personnel_id,
        callsign = %created.callsign,
        "Created personnel"
    );
    Ok(PersonnelResponse::from(created))
}

// ============================================================================
// Schedule Duties
// ============================================================================

/// Lists schedule duties by date, ordered by date.
///
/// # Errors
///
/// Returns an error if a filter date is malformed or the roster cannot be
/// read.
pub fn list_schedule_duties(
    persistence: &mut Persistence,
    query: &DateFilterQuery,
) -> Result<Vec<ScheduleDutyResponse>, ApiError> {
    let filter: DateFilter = resolve_date_filter(query)?;
    let schedule_duties = persistence
        .list_schedule_duties(filter)
        .map_err(|e| translate_persistence_error(e, "Schedule duty"))?;
    Ok(schedule_duties
        .into_iter()
        .map(ScheduleDutyResponse::from)
        .collect())
}

/// Schedules a duty on a date.
///
/// # Errors
///
/// Returns an error if:
/// - The duty type is not `single` or `group`
/// - The date cannot be parsed
/// - A required reference is blank
/// - The schedule duty cannot be stored
pub fn create_schedule_duty(
    persistence: &mut Persistence,
    request: CreateScheduleDutyRequest,
) -> Result<ScheduleDutyResponse, ApiError> {
    let kind: DutyKind =
        DutyKind::from_str(request.duty_type.trim()).map_err(translate_domain_error)?;
    let date: Date = parse_date_field("date", &request.date)?;

    let schedule_duty: NewScheduleDuty = NewScheduleDuty {
        duty_id: request.duty_id,
        duty_name: request.duty_name,
        duty_code: request.duty_code,
        kind,
        qualifications: request.qualifications,
        date,
    };
    validate_schedule_duty_fields(&schedule_duty).map_err(translate_domain_error)?;

    let created = persistence
        .create_schedule_duty(&schedule_duty)
        .map_err(|e| translate_persistence_error(e, "Schedule duty"))?;
    Ok(ScheduleDutyResponse::from(created))
}

/// Deletes a schedule duty together with its group configuration and
/// assignments.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the schedule duty does not exist.
pub fn delete_schedule_duty(
    persistence: &mut Persistence,
    schedule_duty_id: &str,
) -> Result<DeletedResponse, ApiError> {
    let removal = persistence
        .delete_schedule_duty(schedule_duty_id)
        .map_err(|e| translate_persistence_error(e, "Schedule duty"))?;
    debug!(
        schedule_duty_id,
        assignments_removed = removal.assignments_removed,
        config_removed = removal.config_removed,
        "Deleted schedule duty"
    );
    Ok(DeletedResponse { deleted: true })
}

// ============================================================================
// Duty Group Configurations
// ============================================================================

/// Returns the group configuration of a schedule duty, if any.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read.
pub fn get_duty_group_config(
    persistence: &mut Persistence,
    schedule_duty_id: &str,
) -> Result<Option<DutyGroupConfigResponse>, ApiError> {
    let config = persistence
        .get_duty_group_config(schedule_duty_id)
        .map_err(|e| translate_persistence_error(e, "Duty group config"))?;
    Ok(config.map(DutyGroupConfigResponse::from))
}

/// Creates or replaces the group configuration of a schedule duty.
///
/// # Errors
///
/// Returns an error if the schedule duty reference is blank, a slot is
/// malformed, or the configuration cannot be stored.
pub fn save_duty_group_config(
    persistence: &mut Persistence,
    request: &SaveDutyGroupConfigRequest,
) -> Result<DutyGroupConfigResponse, ApiError> {
    require_field("schedule_duty_id", &request.schedule_duty_id)?;
    validate_group_slots(&request.duties).map_err(translate_domain_error)?;

    let config = persistence
        .save_duty_group_config(&request.schedule_duty_id, &request.duties)
        .map_err(|e| translate_persistence_error(e, "Duty group config"))?;
    Ok(DutyGroupConfigResponse::from(config))
}

// ============================================================================
// Assignments
// ============================================================================

/// Lists assignments by date, ordered by date.
///
/// # Errors
///
/// Returns an error if a filter date is malformed or assignments cannot be
/// read.
pub fn list_assignments(
    persistence: &mut Persistence,
    query: &DateFilterQuery,
) -> Result<Vec<AssignmentResponse>, ApiError> {
    let filter: DateFilter = resolve_date_filter(query)?;
    let assignments = persistence
        .list_assignments(filter)
        .map_err(|e| translate_persistence_error(e, "Assignment"))?;
    Ok(assignments
        .into_iter()
        .map(AssignmentResponse::from)
        .collect())
}

/// Assigns a person to a schedule duty and increments their counter.
///
/// Neither the schedule duty nor the person is checked for existence.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed, a required field is
/// blank, the slot index is negative, or the assignment cannot be stored.
pub fn create_assignment(
    persistence: &mut Persistence,
    request: CreateAssignmentRequest,
) -> Result<AssignmentResponse, ApiError> {
    let date: Date = parse_date_field("date", &request.date)?;
    let assignment: NewAssignment = NewAssignment {
        schedule_duty_id: request.schedule_duty_id,
        duty_code: request.duty_code,
        duty_name: request.duty_name,
        personnel: PersonnelRef {
            personnel_id: request.personnel_id,
            name: request.personnel_name,
            callsign: request.personnel_callsign,
        },
        date,
        start_time: request.start_time,
        end_time: request.end_time,
        sub_duty_name: request.sub_duty_name,
        slot_index: request.slot_index,
    };
    validate_assignment_fields(&assignment).map_err(translate_domain_error)?;

    let created = persistence
        .create_assignment(&assignment)
        .map_err(|e| translate_persistence_error(e, "Assignment"))?;
    Ok(AssignmentResponse::from(created))
}

/// Moves an assignment to another person.
///
/// The previous assignee's counter is decremented and the new assignee's
/// counter incremented.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the assignment does not exist, or
/// `ApiError::InvalidInput` if the new personnel reference is blank.
pub fn reassign_assignment(
    persistence: &mut Persistence,
    assignment_id: &str,
    request: ReassignAssignmentRequest,
) -> Result<AssignmentResponse, ApiError> {
    require_field("personnel_id", &request.personnel_id)?;
    let person: PersonnelRef = PersonnelRef {
        personnel_id: request.personnel_id,
        name: request.personnel_name,
        callsign: request.personnel_callsign,
    };

    let updated = persistence
        .reassign_assignment(assignment_id, &person)
        .map_err(|e| translate_persistence_error(e, "Assignment"))?;
    Ok(AssignmentResponse::from(updated))
}

/// Deletes an assignment and decrements the assignee's counter.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the assignment does not exist.
pub fn delete_assignment(
    persistence: &mut Persistence,
    assignment_id: &str,
) -> Result<DeletedResponse, ApiError> {
    persistence
        .delete_assignment(assignment_id)
        .map_err(|e| translate_persistence_error(e, "Assignment"))?;
    Ok(DeletedResponse { deleted: true })
}

// ============================================================================
// Recurring Assignments
// ============================================================================

/// Expands a recurrence into one schedule duty and one assignment per date.
///
/// When the source schedule duty exists its `duty_id` and qualifications are
/// copied onto every generated schedule duty. Otherwise the source
/// `schedule_duty_id` stands in as the duty reference and no qualifications
/// are copied. Neither the source nor the person is required to exist.
///
/// # Arguments
///
/// * `persistence` - The persistence layer, used as the occurrence sink
/// * `request` - The recurrence request
///
/// # Returns
///
/// The number of occurrences written and their dates.
///
/// # Errors
///
/// Returns an error if:
/// - The start date cannot be parsed
/// - A required field is blank or the slot index is negative
/// - The recurrence pattern is malformed (nothing is written)
/// - Storage fails part way (`ApiError::PartialMaterialization` reports what
///   was written)
pub fn create_recurring_assignments(
    persistence: &mut Persistence,
    request: CreateRecurringAssignmentRequest,
) -> Result<CreateRecurringAssignmentResponse, ApiError> {
    let start: Date = parse_date_field("start_date", &request.start_date)?;
    let personnel: PersonnelRef = PersonnelRef {
        personnel_id: request.personnel_id,
        name: request.personnel_name,
        callsign: request.personnel_callsign,
    };

    // Field checks run against the first candidate so blank references are
    // rejected before any write.
    validate_assignment_fields(&NewAssignment {
        schedule_duty_id: request.schedule_duty_id.clone(),
        duty_code: request.duty_code.clone(),
        duty_name: request.duty_name.clone(),
        personnel: personnel.clone(),
        date: start,
        start_time: request.start_time.clone(),
        end_time: request.end_time.clone(),
        sub_duty_name: request.sub_duty_name.clone(),
        slot_index: request.slot_index,
    })
    .map_err(translate_domain_error)?;

    let source: Option<ScheduleDuty> = persistence
        .get_schedule_duty(&request.schedule_duty_id)
        .map_err(|e| translate_persistence_error(e, "Schedule duty"))?;
    let (duty_id, qualifications) = source.map_or_else(
        || (request.schedule_duty_id.clone(), Vec::new()),
        |s| (s.duty_id, s.qualifications),
    );

    let template: OccurrenceTemplate = OccurrenceTemplate {
        duty_id,
        duty_code: request.duty_code,
        duty_name: request.duty_name,
        qualifications,
        personnel,
        start_time: request.start_time,
        end_time: request.end_time,
        sub_duty_name: request.sub_duty_name,
        slot_index: request.slot_index,
    };

    let outcome: MaterializationOutcome =
        expand_recurring_assignment(persistence, &template, start, &request.recurrence)
            .map_err(translate_core_error)?;

    info!(
        source_schedule_duty_id = %request.schedule_duty_id,
        created_count = outcome.created_count(),
        "Created recurring assignments"
    );

    Ok(CreateRecurringAssignmentResponse {
        created_count: outcome.created_count(),
        dates: outcome.dates().into_iter().map(format_iso_date).collect(),
    })
}
