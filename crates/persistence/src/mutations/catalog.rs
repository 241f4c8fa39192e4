// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty catalog and personnel mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{DutyDefinition, NewDutyDefinition, NewPersonnel, Personnel};
use tracing::{debug, info, warn};

use crate::data_models::{DutyRow, PersonnelRow};
use crate::diesel_schema::{duties, personnel};
use crate::error::PersistenceError;

/// Inserts a catalog duty.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_duty(
    conn: &mut SqliteConnection,
    duty: &NewDutyDefinition,
) -> Result<DutyDefinition, PersistenceError> {
    let row: DutyRow = DutyRow::from_new(duty)?;

    diesel::insert_into(duties::table)
        .values(&row)
        .execute(conn)?;

    info!(duty_id = %row.duty_id, code = %row.code, "Created duty definition");
    row.into_domain()
}

/// Inserts a person with a given starting duty counter.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `person` - The person to insert
/// * `total_duties` - Starting counter value (zero except when seeding)
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_personnel(
    conn: &mut SqliteConnection,
    person: &NewPersonnel,
    total_duties: i64,
) -> Result<Personnel, PersistenceError> {
    let row: PersonnelRow = PersonnelRow::from_new(person, total_duties)?;

    diesel::insert_into(personnel::table)
        .values(&row)
        .execute(conn)?;

    info!(
        personnel_id = %row.personnel_id,
        callsign = %row.callsign,
        "Created personnel record"
    );
    row.into_domain()
}

/// Adds `delta` to a person's duty counter in a single statement.
///
/// The counter is not clamped. An unknown person is not an error; assignments
/// are allowed to reference personnel that do not exist.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `personnel_id` - The person whose counter changes
/// * `delta` - Amount to add, typically `1` or `-1`
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn adjust_total_duties(
    conn: &mut SqliteConnection,
    personnel_id: &str,
    delta: i64,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(personnel::table.find(personnel_id))
        .set(personnel::total_duties.eq(personnel::total_duties + delta))
        .execute(conn)?;

    if updated == 0 {
        warn!(personnel_id, delta, "Duty counter not adjusted: unknown personnel");
    } else {
        debug!(personnel_id, delta, "Adjusted duty counter");
    }
    Ok(())
}
