// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversion to and from domain values.
//!
//! List-valued fields are stored as JSON text. Dates are stored as
//! `YYYY-MM-DD` text. Identities are UUID v4 strings generated here.

use diesel::prelude::*;
use duty_roster_domain::{
    Assignment, DutyDefinition, DutyGroupConfig, DutyKind, NewAssignment, NewDutyDefinition,
    NewPersonnel, NewScheduleDuty, Personnel, PersonnelRef, ScheduleDuty, SubDutySlot,
    format_iso_date, parse_iso_date,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::diesel_schema::{assignments, duties, duty_group_configs, personnel, schedule_duties};
use crate::error::PersistenceError;

/// Generates a new record identity.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns the current UTC time as an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn now_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn encode_list<T: Serialize>(values: &[T]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(values)?)
}

fn decode_list<T: DeserializeOwned>(
    field: &'static str,
    json: &str,
) -> Result<Vec<T>, PersistenceError> {
    serde_json::from_str(json).map_err(|e| PersistenceError::InvalidStoredValue {
        field,
        message: e.to_string(),
    })
}

fn decode_date(field: &'static str, value: &str) -> Result<Date, PersistenceError> {
    parse_iso_date(value).map_err(|e| PersistenceError::InvalidStoredValue {
        field,
        message: e.to_string(),
    })
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = duties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DutyRow {
    pub duty_id: String,
    pub name: String,
    pub code: String,
    pub qualifications_json: String,
    pub created_at: String,
}

impl DutyRow {
    /// Builds a fresh row with a new identity and creation timestamp.
    pub fn from_new(duty: &NewDutyDefinition) -> Result<Self, PersistenceError> {
        Ok(Self {
            duty_id: new_id(),
            name: duty.name.clone(),
            code: duty.code.clone(),
            qualifications_json: encode_list(&duty.qualifications)?,
            created_at: now_timestamp()?,
        })
    }

    pub fn into_domain(self) -> Result<DutyDefinition, PersistenceError> {
        Ok(DutyDefinition {
            qualifications: decode_list("duties.qualifications_json", &self.qualifications_json)?,
            duty_id: self.duty_id,
            name: self.name,
            code: self.code,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = personnel)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonnelRow {
    pub personnel_id: String,
    pub callsign: String,
    pub name: String,
    pub qualifications_json: String,
    pub total_duties: i64,
    pub available: i32,
    pub created_at: String,
}

impl PersonnelRow {
    /// Builds a fresh row with the given starting duty counter.
    pub fn from_new(person: &NewPersonnel, total_duties: i64) -> Result<Self, PersistenceError> {
        Ok(Self {
            personnel_id: new_id(),
            callsign: person.callsign.clone(),
            name: person.name.clone(),
            qualifications_json: encode_list(&person.qualifications)?,
            total_duties,
            available: i32::from(person.available),
            created_at: now_timestamp()?,
        })
    }

    pub fn into_domain(self) -> Result<Personnel, PersistenceError> {
        Ok(Personnel {
            qualifications: decode_list(
                "personnel.qualifications_json",
                &self.qualifications_json,
            )?,
            personnel_id: self.personnel_id,
            callsign: self.callsign,
            name: self.name,
            total_duties: self.total_duties,
            available: self.available != 0,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = schedule_duties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScheduleDutyRow {
    pub schedule_duty_id: String,
    pub duty_id: String,
    pub duty_name: String,
    pub duty_code: String,
    pub duty_type: String,
    pub qualifications_json: String,
    pub duty_date: String,
    pub created_at: String,
}

impl ScheduleDutyRow {
    pub fn from_new(schedule_duty: &NewScheduleDuty) -> Result<Self, PersistenceError> {
        Ok(Self {
            schedule_duty_id: new_id(),
            duty_id: schedule_duty.duty_id.clone(),
            duty_name: schedule_duty.duty_name.clone(),
            duty_code: schedule_duty.duty_code.clone(),
            duty_type: schedule_duty.kind.as_str().to_string(),
            qualifications_json: encode_list(&schedule_duty.qualifications)?,
            duty_date: format_iso_date(schedule_duty.date),
            created_at: now_timestamp()?,
        })
    }

    pub fn into_domain(self) -> Result<ScheduleDuty, PersistenceError> {
        let kind: DutyKind =
            DutyKind::from_str(&self.duty_type).map_err(|e| PersistenceError::InvalidStoredValue {
                field: "schedule_duties.duty_type",
                message: e.to_string(),
            })?;
        Ok(ScheduleDuty {
            kind,
            qualifications: decode_list(
                "schedule_duties.qualifications_json",
                &self.qualifications_json,
            )?,
            date: decode_date("schedule_duties.duty_date", &self.duty_date)?,
            schedule_duty_id: self.schedule_duty_id,
            duty_id: self.duty_id,
            duty_name: self.duty_name,
            duty_code: self.duty_code,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssignmentRow {
    pub assignment_id: String,
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel_id: String,
    pub personnel_name: String,
    pub personnel_callsign: String,
    pub duty_date: String,
    pub start_time: String,
    pub end_time: String,
    pub sub_duty_name: String,
    pub slot_index: i64,
    pub created_at: String,
}

impl AssignmentRow {
    pub fn from_new(assignment: &NewAssignment) -> Result<Self, PersistenceError> {
        Ok(Self {
            assignment_id: new_id(),
            schedule_duty_id: assignment.schedule_duty_id.clone(),
            duty_code: assignment.duty_code.clone(),
            duty_name: assignment.duty_name.clone(),
            personnel_id: assignment.personnel.personnel_id.clone(),
            personnel_name: assignment.personnel.name.clone(),
            personnel_callsign: assignment.personnel.callsign.clone(),
            duty_date: format_iso_date(assignment.date),
            start_time: assignment.start_time.clone(),
            end_time: assignment.end_time.clone(),
            sub_duty_name: assignment.sub_duty_name.clone(),
            slot_index: assignment.slot_index,
            created_at: now_timestamp()?,
        })
    }

    pub fn into_domain(self) -> Result<Assignment, PersistenceError> {
        Ok(Assignment {
            date: decode_date("assignments.duty_date", &self.duty_date)?,
            assignment_id: self.assignment_id,
            schedule_duty_id: self.schedule_duty_id,
            duty_code: self.duty_code,
            duty_name: self.duty_name,
            personnel: PersonnelRef {
                personnel_id: self.personnel_id,
                name: self.personnel_name,
                callsign: self.personnel_callsign,
            },
            start_time: self.start_time,
            end_time: self.end_time,
            sub_duty_name: self.sub_duty_name,
            slot_index: self.slot_index,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = duty_group_configs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DutyGroupConfigRow {
    pub config_id: String,
    pub schedule_duty_id: String,
    pub slots_json: String,
    pub created_at: String,
}

impl DutyGroupConfigRow {
    pub fn from_new(schedule_duty_id: &str, slots: &[SubDutySlot]) -> Result<Self, PersistenceError> {
        Ok(Self {
            config_id: new_id(),
            schedule_duty_id: schedule_duty_id.to_string(),
            slots_json: encode_slots(slots)?,
            created_at: now_timestamp()?,
        })
    }

    pub fn into_domain(self) -> Result<DutyGroupConfig, PersistenceError> {
        Ok(DutyGroupConfig {
            slots: decode_list("duty_group_configs.slots_json", &self.slots_json)?,
            config_id: self.config_id,
            schedule_duty_id: self.schedule_duty_id,
            created_at: self.created_at,
        })
    }
}

/// Encodes a slot list for the `slots_json` column.
pub fn encode_slots(slots: &[SubDutySlot]) -> Result<String, PersistenceError> {
    encode_list(slots)
}
