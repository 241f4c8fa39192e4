// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurring occurrence persistence.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster::{OccurrenceDraft, PersistedOccurrence};
use duty_roster_domain::NewAssignment;
use tracing::debug;

use super::assignments::insert_assignment_row;
use super::schedule::insert_schedule_duty_row;
use crate::data_models::{AssignmentRow, ScheduleDutyRow};
use crate::error::PersistenceError;

/// Persists one occurrence: its schedule duty, the assignment that staffs
/// it, and the assignee's counter increment.
///
/// The three writes share one transaction, so a failure leaves nothing
/// behind for this occurrence.
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn persist_occurrence(
    conn: &mut SqliteConnection,
    occurrence: &OccurrenceDraft,
) -> Result<PersistedOccurrence, PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let schedule_duty: ScheduleDutyRow =
            insert_schedule_duty_row(conn, &occurrence.schedule_duty)?;

        let assignment: NewAssignment = NewAssignment {
            schedule_duty_id: schedule_duty.schedule_duty_id.clone(),
            duty_code: occurrence.schedule_duty.duty_code.clone(),
            duty_name: occurrence.schedule_duty.duty_name.clone(),
            personnel: occurrence.personnel.clone(),
            date: occurrence.date(),
            start_time: occurrence.start_time.clone(),
            end_time: occurrence.end_time.clone(),
            sub_duty_name: occurrence.sub_duty_name.clone(),
            slot_index: occurrence.slot_index,
        };
        let row: AssignmentRow = insert_assignment_row(conn, &assignment)?;

        debug!(
            schedule_duty_id = %schedule_duty.schedule_duty_id,
            assignment_id = %row.assignment_id,
            date = %schedule_duty.duty_date,
            "Persisted recurring occurrence"
        );

        Ok(PersistedOccurrence {
            schedule_duty_id: schedule_duty.schedule_duty_id,
            assignment_id: row.assignment_id,
            date: occurrence.date(),
        })
    })
}
