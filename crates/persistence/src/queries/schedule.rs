// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule duty and duty-group configuration queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use duty_roster_domain::{DateFilter, DutyGroupConfig, ScheduleDuty};

use super::{DateBounds, ROSTER_LIMIT};
use crate::data_models::{DutyGroupConfigRow, ScheduleDutyRow};
use crate::diesel_schema::{duty_group_configs, schedule_duties};
use crate::error::PersistenceError;

/// Lists schedule duties matching a date filter.
///
/// Results are ordered by date and capped at [`ROSTER_LIMIT`].
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `filter` - The date restriction
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_schedule_duties(
    conn: &mut SqliteConnection,
    filter: DateFilter,
) -> Result<Vec<ScheduleDuty>, PersistenceError> {
    let mut query: schedule_duties::BoxedQuery<'_, Sqlite> = schedule_duties::table.into_boxed();

    query = match DateBounds::from(filter) {
        DateBounds::All => query,
        DateBounds::On(date) => query.filter(schedule_duties::duty_date.eq(date)),
        DateBounds::Between(start, end) => query
            .filter(schedule_duties::duty_date.ge(start))
            .filter(schedule_duties::duty_date.le(end)),
    };

    let rows: Vec<ScheduleDutyRow> = query
        .order((
            schedule_duties::duty_date.asc(),
            schedule_duties::created_at.asc(),
        ))
        .limit(ROSTER_LIMIT)
        .load::<ScheduleDutyRow>(conn)?;

    rows.into_iter().map(ScheduleDutyRow::into_domain).collect()
}

/// Retrieves one schedule duty by identity.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if not found.
pub fn get_schedule_duty(
    conn: &mut SqliteConnection,
    schedule_duty_id: &str,
) -> Result<Option<ScheduleDuty>, PersistenceError> {
    schedule_duties::table
        .find(schedule_duty_id)
        .select(ScheduleDutyRow::as_select())
        .first(conn)
        .optional()?
        .map(ScheduleDutyRow::into_domain)
        .transpose()
}

/// Retrieves the duty-group configuration of a schedule duty.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if the schedule
/// duty has no configuration.
pub fn get_duty_group_config(
    conn: &mut SqliteConnection,
    schedule_duty_id: &str,
) -> Result<Option<DutyGroupConfig>, PersistenceError> {
    duty_group_configs::table
        .filter(duty_group_configs::schedule_duty_id.eq(schedule_duty_id))
        .select(DutyGroupConfigRow::as_select())
        .first(conn)
        .optional()?
        .map(DutyGroupConfigRow::into_domain)
        .transpose()
}
