// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment mutations.
//!
//! Every function here pairs the assignment change with the matching
//! personnel counter adjustment in one transaction.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{Assignment, NewAssignment, PersonnelRef};
use tracing::info;

use super::catalog::adjust_total_duties;
use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;
use crate::queries::assignments::get_assignment_row;

/// Inserts an assignment and increments its person's counter, without
/// opening a transaction.
///
/// # Errors
///
/// Returns an error if either statement fails.
pub fn insert_assignment_row(
    conn: &mut SqliteConnection,
    assignment: &NewAssignment,
) -> Result<AssignmentRow, PersistenceError> {
    let row: AssignmentRow = AssignmentRow::from_new(assignment)?;
    diesel::insert_into(assignments::table)
        .values(&row)
        .execute(conn)?;
    adjust_total_duties(conn, &row.personnel_id, 1)?;
    Ok(row)
}

/// Creates an assignment and increments the assigned person's counter.
///
/// # Errors
///
/// Returns an error if any statement fails; nothing is written in that case.
pub fn insert_assignment(
    conn: &mut SqliteConnection,
    assignment: &NewAssignment,
) -> Result<Assignment, PersistenceError> {
    let row: AssignmentRow =
        conn.transaction::<_, PersistenceError, _>(|conn| insert_assignment_row(conn, assignment))?;

    info!(
        assignment_id = %row.assignment_id,
        schedule_duty_id = %row.schedule_duty_id,
        personnel_id = %row.personnel_id,
        "Created assignment"
    );
    row.into_domain()
}

/// Moves an assignment to a different person.
///
/// The previous person's counter is decremented and the new person's is
/// incremented.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `assignment_id` - The assignment to move
/// * `person` - The new assignee
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the assignment does not exist,
/// or an error if any statement fails.
pub fn reassign_assignment(
    conn: &mut SqliteConnection,
    assignment_id: &str,
    person: &PersonnelRef,
) -> Result<Assignment, PersistenceError> {
    let row: AssignmentRow = conn.transaction::<_, PersistenceError, _>(|conn| {
        let mut row: AssignmentRow = get_assignment_row(conn, assignment_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Assignment {assignment_id}")))?;

        adjust_total_duties(conn, &row.personnel_id, -1)?;

        diesel::update(assignments::table.find(assignment_id))
            .set((
                assignments::personnel_id.eq(&person.personnel_id),
                assignments::personnel_name.eq(&person.name),
                assignments::personnel_callsign.eq(&person.callsign),
            ))
            .execute(conn)?;

        adjust_total_duties(conn, &person.personnel_id, 1)?;

        info!(
            assignment_id,
            from = %row.personnel_id,
            to = %person.personnel_id,
            "Reassigned assignment"
        );

        row.personnel_id.clone_from(&person.personnel_id);
        row.personnel_name.clone_from(&person.name);
        row.personnel_callsign.clone_from(&person.callsign);
        Ok(row)
    })?;

    row.into_domain()
}

/// Deletes an assignment and decrements its person's counter.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the assignment does not exist,
/// or an error if any statement fails.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment_id: &str,
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        let row: AssignmentRow = get_assignment_row(conn, assignment_id)?
            .ok_or_else(|| PersistenceError::NotFound(format!("Assignment {assignment_id}")))?;

        diesel::delete(assignments::table.find(assignment_id)).execute(conn)?;
        adjust_total_duties(conn, &row.personnel_id, -1)?;

        info!(
            assignment_id,
            personnel_id = %row.personnel_id,
            "Deleted assignment"
        );
        Ok(())
    })
}
