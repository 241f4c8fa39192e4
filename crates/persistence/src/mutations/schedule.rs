// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule duty and duty-group configuration mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{DutyGroupConfig, NewScheduleDuty, ScheduleDuty, SubDutySlot};
use tracing::info;

use super::catalog::adjust_total_duties;
use crate::data_models::{DutyGroupConfigRow, ScheduleDutyRow, encode_slots};
use crate::diesel_schema::{assignments, duty_group_configs, schedule_duties};
use crate::error::PersistenceError;
use crate::queries::assignments::personnel_ids_for_schedule_duty;

/// What a schedule duty deletion removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDutyRemoval {
    /// Assignments deleted along with the schedule duty.
    pub assignments_removed: usize,
    /// Whether a duty-group configuration was deleted.
    pub config_removed: bool,
}

/// Inserts a schedule duty without opening a transaction.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_schedule_duty_row(
    conn: &mut SqliteConnection,
    schedule_duty: &NewScheduleDuty,
) -> Result<ScheduleDutyRow, PersistenceError> {
    let row: ScheduleDutyRow = ScheduleDutyRow::from_new(schedule_duty)?;
    diesel::insert_into(schedule_duties::table)
        .values(&row)
        .execute(conn)?;
    Ok(row)
}

/// Inserts a schedule duty.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_schedule_duty(
    conn: &mut SqliteConnection,
    schedule_duty: &NewScheduleDuty,
) -> Result<ScheduleDuty, PersistenceError> {
    let row: ScheduleDutyRow = insert_schedule_duty_row(conn, schedule_duty)?;
    info!(
        schedule_duty_id = %row.schedule_duty_id,
        duty_code = %row.duty_code,
        date = %row.duty_date,
        "Scheduled duty"
    );
    row.into_domain()
}

/// Deletes a schedule duty together with its configuration and assignments.
///
/// Each removed assignment decrements its person's duty counter. All of it
/// happens in one transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule_duty_id` - The schedule duty to delete
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the schedule duty does not exist,
/// or an error if any statement fails.
pub fn delete_schedule_duty(
    conn: &mut SqliteConnection,
    schedule_duty_id: &str,
) -> Result<ScheduleDutyRemoval, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let removed: usize =
            diesel::delete(schedule_duties::table.find(schedule_duty_id)).execute(conn)?;
        if removed == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Schedule duty {schedule_duty_id}"
            )));
        }

        let config_removed: bool = diesel::delete(
            duty_group_configs::table
                .filter(duty_group_configs::schedule_duty_id.eq(schedule_duty_id)),
        )
        .execute(conn)?
            > 0;

        let personnel_ids: Vec<String> = personnel_ids_for_schedule_duty(conn, schedule_duty_id)?;
        for personnel_id in &personnel_ids {
            adjust_total_duties(conn, personnel_id, -1)?;
        }

        let assignments_removed: usize = diesel::delete(
            assignments::table.filter(assignments::schedule_duty_id.eq(schedule_duty_id)),
        )
        .execute(conn)?;

        info!(
            schedule_duty_id,
            assignments_removed, config_removed, "Deleted schedule duty"
        );

        Ok(ScheduleDutyRemoval {
            assignments_removed,
            config_removed,
        })
    })
}

/// Creates or replaces the duty-group configuration of a schedule duty.
///
/// An existing configuration keeps its identity and creation timestamp;
/// only its slot list is replaced.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule_duty_id` - The schedule duty being configured
/// * `slots` - The new slot list
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn save_duty_group_config(
    conn: &mut SqliteConnection,
    schedule_duty_id: &str,
    slots: &[SubDutySlot],
) -> Result<DutyGroupConfig, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let existing: Option<DutyGroupConfigRow> = duty_group_configs::table
            .filter(duty_group_configs::schedule_duty_id.eq(schedule_duty_id))
            .select(DutyGroupConfigRow::as_select())
            .first(conn)
            .optional()?;

        let row: DutyGroupConfigRow = if let Some(mut row) = existing {
            row.slots_json = encode_slots(slots)?;
            diesel::update(duty_group_configs::table.find(&row.config_id))
                .set(duty_group_configs::slots_json.eq(&row.slots_json))
                .execute(conn)?;
            info!(schedule_duty_id, slots = slots.len(), "Updated duty group config");
            row
        } else {
            let row: DutyGroupConfigRow = DutyGroupConfigRow::from_new(schedule_duty_id, slots)?;
            diesel::insert_into(duty_group_configs::table)
                .values(&row)
                .execute(conn)?;
            info!(schedule_duty_id, slots = slots.len(), "Created duty group config");
            row
        };

        row.into_domain()
    })
}
