// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Whether a scheduled duty is staffed by one person or split into slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DutyKind {
    /// A single assignee.
    #[default]
    Single,
    /// Several named sub-duty slots, configured by a `DutyGroupConfig`.
    Group,
}

impl FromStr for DutyKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "group" => Ok(Self::Group),
            _ => Err(DomainError::InvalidDutyKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for DutyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl DutyKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Group => "group",
        }
    }
}

/// A duty type in the catalog (e.g. "G1 Guard Duty - Main Gate").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyDefinition {
    pub duty_id: String,
    pub name: String,
    pub code: String,
    /// Qualifications a person is expected to hold. Informational only.
    pub qualifications: Vec<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Fields supplied when adding a duty to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDutyDefinition {
    pub name: String,
    pub code: String,
    pub qualifications: Vec<String>,
}

/// A member of personnel who can be assigned to duties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personnel {
    pub personnel_id: String,
    pub callsign: String,
    pub name: String,
    pub qualifications: Vec<String>,
    /// Running count of assignments held. Adjusted incrementally, never
    /// recomputed from the assignment table.
    pub total_duties: i64,
    pub available: bool,
    pub created_at: String,
}

/// Fields supplied when adding a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersonnel {
    pub callsign: String,
    pub name: String,
    pub qualifications: Vec<String>,
    pub available: bool,
}

/// A duty placed on a specific calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDuty {
    pub schedule_duty_id: String,
    pub duty_id: String,
    pub duty_name: String,
    pub duty_code: String,
    pub kind: DutyKind,
    /// Snapshot of the catalog entry's qualifications at scheduling time.
    pub qualifications: Vec<String>,
    pub date: Date,
    pub created_at: String,
}

/// Fields supplied when scheduling a duty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScheduleDuty {
    pub duty_id: String,
    pub duty_name: String,
    pub duty_code: String,
    pub kind: DutyKind,
    pub qualifications: Vec<String>,
    pub date: Date,
}

/// Identity and display snapshot of the person on an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonnelRef {
    pub personnel_id: String,
    pub name: String,
    pub callsign: String,
}

/// A person assigned to a scheduled duty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub assignment_id: String,
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel: PersonnelRef,
    pub date: Date,
    /// Free-form time of day, e.g. "0800".
    pub start_time: String,
    pub end_time: String,
    /// Sub-duty slot name for group duties; empty for single duties.
    pub sub_duty_name: String,
    pub slot_index: i64,
    pub created_at: String,
}

/// Fields supplied when creating an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub schedule_duty_id: String,
    pub duty_code: String,
    pub duty_name: String,
    pub personnel: PersonnelRef,
    pub date: Date,
    pub start_time: String,
    pub end_time: String,
    pub sub_duty_name: String,
    pub slot_index: i64,
}

/// One named role within a group duty and how many people fill it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDutySlot {
    pub name: String,
    pub count: i64,
}

/// The slot layout of a group duty. At most one per schedule duty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyGroupConfig {
    pub config_id: String,
    pub schedule_duty_id: String,
    pub slots: Vec<SubDutySlot>,
    pub created_at: String,
}

/// Date restriction applied when listing schedule duties or assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    /// No restriction.
    #[default]
    All,
    /// Exactly this date.
    On(Date),
    /// Inclusive range.
    Between { start: Date, end: Date },
}

impl DateFilter {
    /// Builds a filter from optional query bounds.
    ///
    /// A single `date` wins over a range. A range applies only when both
    /// bounds are present; a lone bound is ignored.
    #[must_use]
    pub const fn from_bounds(date: Option<Date>, start: Option<Date>, end: Option<Date>) -> Self {
        match (date, start, end) {
            (Some(date), _, _) => Self::On(date),
            (None, Some(start), Some(end)) => Self::Between { start, end },
            _ => Self::All,
        }
    }
}
