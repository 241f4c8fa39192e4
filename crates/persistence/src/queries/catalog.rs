// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duty catalog and personnel queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use duty_roster_domain::{DutyDefinition, Personnel};
use num_traits::ToPrimitive;
use tracing::debug;

use super::{CATALOG_LIMIT, substring_pattern};
use crate::data_models::{DutyRow, PersonnelRow};
use crate::diesel_schema::{duties, personnel};
use crate::error::PersistenceError;

fn active_term(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|term| !term.is_empty())
}

/// Lists catalog duties, optionally filtered by a name substring.
///
/// Matching is case-insensitive. At most [`CATALOG_LIMIT`] rows are returned,
/// oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `search` - Optional name substring
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_duties(
    conn: &mut SqliteConnection,
    search: Option<&str>,
) -> Result<Vec<DutyDefinition>, PersistenceError> {
    let mut query: duties::BoxedQuery<'_, Sqlite> = duties::table.into_boxed();

    if let Some(term) = active_term(search) {
        debug!(search = term, "Filtering duties by name");
        query = query.filter(duties::name.like(substring_pattern(term)).escape('\\'));
    }

    let rows: Vec<DutyRow> = query
        .order((duties::created_at.asc(), duties::duty_id.asc()))
        .limit(CATALOG_LIMIT)
        .load::<DutyRow>(conn)?;

    rows.into_iter().map(DutyRow::into_domain).collect()
}

/// Lists personnel, optionally filtered by callsign/name and availability.
///
/// The search term matches either the callsign or the name,
/// case-insensitively. At most [`CATALOG_LIMIT`] rows are returned, oldest
/// first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `search` - Optional callsign or name substring
/// * `available` - Optional availability flag to match
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_personnel(
    conn: &mut SqliteConnection,
    search: Option<&str>,
    available: Option<bool>,
) -> Result<Vec<Personnel>, PersistenceError> {
    let mut query: personnel::BoxedQuery<'_, Sqlite> = personnel::table.into_boxed();

    if let Some(term) = active_term(search) {
        let pattern: String = substring_pattern(term);
        query = query.filter(
            personnel::callsign
                .like(pattern.clone())
                .escape('\\')
                .or(personnel::name.like(pattern).escape('\\')),
        );
    }

    if let Some(flag) = available {
        query = query.filter(personnel::available.eq(i32::from(flag)));
    }

    let rows: Vec<PersonnelRow> = query
        .order((personnel::created_at.asc(), personnel::personnel_id.asc()))
        .limit(CATALOG_LIMIT)
        .load::<PersonnelRow>(conn)?;

    rows.into_iter().map(PersonnelRow::into_domain).collect()
}

/// Retrieves one person by identity.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if not found.
pub fn get_personnel(
    conn: &mut SqliteConnection,
    personnel_id: &str,
) -> Result<Option<Personnel>, PersistenceError> {
    personnel::table
        .find(personnel_id)
        .select(PersonnelRow::as_select())
        .first(conn)
        .optional()?
        .map(PersonnelRow::into_domain)
        .transpose()
}

/// Counts catalog duties.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_duties(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = duties::table.count().get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts personnel.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_personnel(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = personnel::table.count().get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}
