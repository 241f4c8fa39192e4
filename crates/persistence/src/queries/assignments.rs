// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use duty_roster_domain::{Assignment, DateFilter};

use super::{DateBounds, ROSTER_LIMIT};
use crate::data_models::AssignmentRow;
use crate::diesel_schema::assignments;
use crate::error::PersistenceError;

/// Lists assignments matching a date filter.
///
/// Results are ordered by date and capped at [`ROSTER_LIMIT`].
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_assignments(
    conn: &mut SqliteConnection,
    filter: DateFilter,
) -> Result<Vec<Assignment>, PersistenceError> {
    let mut query: assignments::BoxedQuery<'_, Sqlite> = assignments::table.into_boxed();

    query = match DateBounds::from(filter) {
        DateBounds::All => query,
        DateBounds::On(date) => query.filter(assignments::duty_date.eq(date)),
        DateBounds::Between(start, end) => query
            .filter(assignments::duty_date.ge(start))
            .filter(assignments::duty_date.le(end)),
    };

    let rows: Vec<AssignmentRow> = query
        .order((assignments::duty_date.asc(), assignments::created_at.asc()))
        .limit(ROSTER_LIMIT)
        .load::<AssignmentRow>(conn)?;

    rows.into_iter().map(AssignmentRow::into_domain).collect()
}

/// Retrieves one assignment row by identity.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if not found.
pub fn get_assignment_row(
    conn: &mut SqliteConnection,
    assignment_id: &str,
) -> Result<Option<AssignmentRow>, PersistenceError> {
    Ok(assignments::table
        .find(assignment_id)
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?)
}

/// Retrieves one assignment by identity.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if not found.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: &str,
) -> Result<Option<Assignment>, PersistenceError> {
    get_assignment_row(conn, assignment_id)?
        .map(AssignmentRow::into_domain)
        .transpose()
}

/// Returns the person on every assignment of a schedule duty.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn personnel_ids_for_schedule_duty(
    conn: &mut SqliteConnection,
    schedule_duty_id: &str,
) -> Result<Vec<String>, PersistenceError> {
    Ok(assignments::table
        .filter(assignments::schedule_duty_id.eq(schedule_duty_id))
        .select(assignments::personnel_id)
        .load::<String>(conn)?)
}
