// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross the boundary as `YYYY-MM-DD` strings and record identities
//! are exposed as `id`.

use duty_roster_domain::{
    Assignment, DutyDefinition, DutyGroupConfig, Personnel, RecurrencePattern, ScheduleDuty,
    SubDutySlot, format_iso_date,
};
use serde::{Deserialize, Serialize};

/// API response for the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    /// The service banner.
    pub message: String,
}

/// API response for a successful deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Always `true`.
    pub deleted: bool,
}

// ============================================================================
// Duty Catalog
// ============================================================================

/// Query parameters for listing catalog duties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListDutiesQuery {
    /// Case-insensitive name substring.
    pub search: Option<String>,
}

/// API request to add a duty to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDutyRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
}

/// A catalog duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub qualifications: Vec<String>,
    pub created_at: String,
}

impl From<DutyDefinition> for DutyResponse {
    fn from(duty: DutyDefinition) -> Self {
        Self {
            id: duty.duty_id,
            name: duty.name,
            code: duty.code,
            qualifications: duty.qualifications,
            created_at: duty.created_at,
        }
    }
}

// ============================================================================
// Personnel
// ============================================================================

/// Query parameters for listing personnel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListPersonnelQuery {
    /// Case-insensitive callsign or name substring.
    pub search: Option<String>,
    /// Only personnel with this availability.
    pub available: Option<bool>,
}

/// API request to add a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonnelRequest {
    pub callsign: String,
    pub name: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

/// A person with their running duty counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonnelResponse {
    pub id: String,
    pub callsign: String,
    pub name: String,
    pub qualifications: Vec<String>,
    pub total_duties: i64,
    pub available: bool,
    pub created_at: String,
}

impl From<Personnel> for PersonnelResponse {
    fn from(person: Personnel) -> Self {
        Self {
            id: person.personnel_id,
            callsign: person.callsign,
            name: person.name,
            qualifications: person.qualifications,
            total_duties: person.total_duties,
            available: person.available,
            created_at: person.created_at,
        }
    }
}

// ============================================================================
// Schedule Duties and Assignments
// ============================================================================

/// Date filter query parameters shared by schedule duty and assignment
/// listings.
///
/// `date` wins over the range. A range applies only when both bounds are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DateFilterQuery {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// API request to schedule a duty on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateScheduleDutyRequest {
    pub duty_id: String,
    pub duty_name: String,
    pub duty_code: String,
    /// `single` or `group`.
    #[serde(default = "default_duty_type")]
    pub duty_type: String,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub date: String,
}

fn default_duty_type() -> String {
    String::from("single")
}

/// A duty scheduled on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDutyResponse {
    pub id: String,
    pub duty_id: String,
    pub duty_name: String,
    pub duty_code: String,
    pub duty_type: String,
    pub qualifications: Vec<String>,
    pub date: String,
    pub created_at: String,
}

impl From<ScheduleDuty> for ScheduleDutyResponse {
    fn from(schedule_duty: ScheduleDuty) -> Self {
        Self {
            id: schedule_duty.schedule_duty_id,
            duty_id: schedule_duty.duty_id,
            duty_name: schedule_duty.duty_name,
            duty_code: schedule_duty.duty_code,
            duty_type: schedule_duty.kind.as_str().to_string(),
            qualifications: schedule_duty.qualifications,
            date: format_iso_date(schedule_duty.date),
            created_at: schedule_duty.created_at,
        }
    }
}

/// API request to assign a person to a schedule duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel_id: String,
    pub personnel_name: String,
    pub personnel_callsign: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub sub_duty_name: String,
    #[serde(default)]
    pub slot_index: i64,
}

/// API request to move an assignment to another person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignAssignmentRequest {
    pub personnel_id: String,
    pub personnel_name: String,
    pub personnel_callsign: String,
}

/// An assignment of one person to one schedule duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub id: String,
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel_id: String,
    pub personnel_name: String,
    pub personnel_callsign: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub sub_duty_name: String,
    pub slot_index: i64,
    pub created_at: String,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.assignment_id,
            schedule_duty_id: assignment.schedule_duty_id,
            duty_code: assignment.duty_code,
            duty_name: assignment.duty_name,
            personnel_id: assignment.personnel.personnel_id,
            personnel_name: assignment.personnel.name,
            personnel_callsign: assignment.personnel.callsign,
            date: format_iso_date(assignment.date),
            start_time: assignment.start_time,
            end_time: assignment.end_time,
            sub_duty_name: assignment.sub_duty_name,
            slot_index: assignment.slot_index,
            created_at: assignment.created_at,
        }
    }
}

// ============================================================================
// Duty Group Configurations
// ============================================================================

/// API request to create or replace the slot layout of a group duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDutyGroupConfigRequest {
    pub schedule_duty_id: String,
    /// Sub-duty slots, in display order.
    #[serde(default)]
    pub duties: Vec<SubDutySlot>,
}

/// The slot layout of a group duty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyGroupConfigResponse {
    pub id: String,
    pub schedule_duty_id: String,
    pub duties: Vec<SubDutySlot>,
    pub created_at: String,
}

impl From<DutyGroupConfig> for DutyGroupConfigResponse {
    fn from(config: DutyGroupConfig) -> Self {
        Self {
            id: config.config_id,
            schedule_duty_id: config.schedule_duty_id,
            duties: config.slots,
            created_at: config.created_at,
        }
    }
}

// ============================================================================
// Recurring Assignments
// ============================================================================

/// API request to expand a recurrence into schedule duties and assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecurringAssignmentRequest {
    /// The schedule duty the recurrence is modelled on.
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel_id: String,
    pub personnel_name: String,
    pub personnel_callsign: String,
    /// The first candidate date.
    pub start_date: String,
    pub start_time: String,
    pub end_time: String,
    pub recurrence: RecurrencePattern,
    #[serde(default)]
    pub sub_duty_name: String,
    #[serde(default)]
    pub slot_index: i64,
}

/// API response for a recurring assignment expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecurringAssignmentResponse {
    /// Occurrences written.
    pub created_count: usize,
    /// ISO dates of the written occurrences, ascending.
    pub dates: Vec<String>,
}
