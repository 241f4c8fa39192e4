// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the duty roster.
//!
//! Handlers are plain functions over a `Persistence` handle. They parse and
//! validate request DTOs, call into persistence or the recurrence engine,
//! and translate every lower-layer error into an `ApiError`. Transport
//! concerns live in the server crate.

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
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    ROOT_MESSAGE, create_assignment, create_duty, create_personnel, create_recurring_assignments,
    create_schedule_duty, delete_assignment, delete_schedule_duty, get_duty_group_config,
    list_assignments, list_duties, list_personnel, list_schedule_duties, reassign_assignment,
    resolve_date_filter, root_message, save_duty_group_config,
};
pub use request_response::{
    AssignmentResponse, CreateAssignmentRequest, CreateDutyRequest, CreatePersonnelRequest,
    CreateRecurringAssignmentRequest, CreateRecurringAssignmentResponse,
    CreateScheduleDutyRequest, DateFilterQuery, DeletedResponse, DutyGroupConfigResponse,
    DutyResponse, ListDutiesQuery, ListPersonnelQuery, PersonnelResponse,
    ReassignAssignmentRequest, RootResponse, SaveDutyGroupConfigRequest, ScheduleDutyResponse,
};
