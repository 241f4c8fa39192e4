// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the duty roster.
//!
//! This crate stores duty definitions, personnel, schedule duties,
//! assignments and duty-group configurations in `SQLite` through Diesel.
//!
//! ## Storage Conventions
//!
//! - Identities are UUID v4 strings
//! - Calendar dates are `YYYY-MM-DD` text, so range filters compare lexicographically
//! - List-valued fields (qualifications, group slots) are JSON text
//! - Rows reference each other by identity only; cascades are explicit
//!
//! ## Testing Philosophy
//!
//! - Tests run against `Persistence::new_in_memory()`
//! - Every call to `new_in_memory()` gets its own isolated database

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

use diesel::SqliteConnection;
use duty_roster::{OccurrenceDraft, OccurrenceSink, PersistedOccurrence};
use duty_roster_domain::{
    Assignment, DateFilter, DutyDefinition, DutyGroupConfig, NewAssignment, NewDutyDefinition,
    NewPersonnel, NewScheduleDuty, Personnel, PersonnelRef, ScheduleDuty, SubDutySlot,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::{ScheduleDutyRemoval, SeedSummary};
pub use queries::{CATALOG_LIMIT, ROSTER_LIMIT};

/// Persistence adapter for the roster store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so adapters never
    /// see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Seeds the duty catalog and personnel if either is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding fails.
    pub fn seed_defaults(&mut self) -> Result<SeedSummary, PersistenceError> {
        mutations::seed::seed_defaults(&mut self.conn)
    }

    // ========================================================================
    // Duty Catalog
    // ========================================================================

    /// Lists catalog duties, optionally filtered by a case-insensitive name
    /// substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_duties(
        &mut self,
        search: Option<&str>,
    ) -> Result<Vec<DutyDefinition>, PersistenceError> {
        queries::catalog::list_duties(&mut self.conn, search)
    }

    /// Adds a duty to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the duty cannot be inserted.
    pub fn create_duty(
        &mut self,
        duty: &NewDutyDefinition,
    ) -> Result<DutyDefinition, PersistenceError> {
        mutations::catalog::insert_duty(&mut self.conn, duty)
    }

    /// Counts catalog duties.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_duties(&mut self) -> Result<usize, PersistenceError> {
        queries::catalog::count_duties(&mut self.conn)
    }

    // ========================================================================
    // Personnel
    // ========================================================================

    /// Lists personnel.
    ///
    /// # Arguments
    ///
    /// * `search` - Optional case-insensitive callsign or name substring
    /// * `available` - Optional availability flag to match
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_personnel(
        &mut self,
        search: Option<&str>,
        available: Option<bool>,
    ) -> Result<Vec<Personnel>, PersistenceError> {
        queries::catalog::list_personnel(&mut self.conn, search, available)
    }

    /// Adds a person with a duty counter of zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the person cannot be inserted.
    pub fn create_personnel(
        &mut self,
        person: &NewPersonnel,
    ) -> Result<Personnel, PersistenceError> {
        mutations::catalog::insert_personnel(&mut self.conn, person, 0)
    }

    /// Retrieves one person.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried. Returns `Ok(None)`
    /// if the person does not exist.
    pub fn get_personnel(
        &mut self,
        personnel_id: &str,
    ) -> Result<Option<Personnel>, PersistenceError> {
        queries::catalog::get_personnel(&mut self.conn, personnel_id)
    }

    /// Counts personnel.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn count_personnel(&mut self) -> Result<usize, PersistenceError> {
        queries::catalog::count_personnel(&mut self.conn)
    }

    // ========================================================================
    // Schedule Duties
    // ========================================================================

    /// Lists schedule duties matching a date filter, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_schedule_duties(
        &mut self,
        filter: DateFilter,
    ) -> Result<Vec<ScheduleDuty>, PersistenceError> {
        queries::schedule::list_schedule_duties(&mut self.conn, filter)
    }

    /// Retrieves one schedule duty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried. Returns `Ok(None)`
    /// if the schedule duty does not exist.
    pub fn get_schedule_duty(
        &mut self,
        schedule_duty_id: &str,
    ) -> Result<Option<ScheduleDuty>, PersistenceError> {
        queries::schedule::get_schedule_duty(&mut self.conn, schedule_duty_id)
    }

    /// Schedules a duty on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule duty cannot be inserted.
    pub fn create_schedule_duty(
        &mut self,
        schedule_duty: &NewScheduleDuty,
    ) -> Result<ScheduleDuty, PersistenceError> {
        mutations::schedule::insert_schedule_duty(&mut self.conn, schedule_duty)
    }

    /// Deletes a schedule duty, its duty-group configuration and every
    /// assignment referencing it, decrementing the affected counters.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the schedule duty does not
    /// exist, or an error if the deletion fails.
    pub fn delete_schedule_duty(
        &mut self,
        schedule_duty_id: &str,
    ) -> Result<ScheduleDutyRemoval, PersistenceError> {
        mutations::schedule::delete_schedule_duty(&mut self.conn, schedule_duty_id)
    }

    // ========================================================================
    // Duty Group Configurations
    // ========================================================================

    /// Retrieves the duty-group configuration of a schedule duty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried. Returns `Ok(None)`
    /// if there is no configuration.
    pub fn get_duty_group_config(
        &mut self,
        schedule_duty_id: &str,
    ) -> Result<Option<DutyGroupConfig>, PersistenceError> {
        queries::schedule::get_duty_group_config(&mut self.conn, schedule_duty_id)
    }

    /// Creates or replaces the duty-group configuration of a schedule duty.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save_duty_group_config(
        &mut self,
        schedule_duty_id: &str,
        slots: &[SubDutySlot],
    ) -> Result<DutyGroupConfig, PersistenceError> {
        mutations::schedule::save_duty_group_config(&mut self.conn, schedule_duty_id, slots)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Lists assignments matching a date filter, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_assignments(
        &mut self,
        filter: DateFilter,
    ) -> Result<Vec<Assignment>, PersistenceError> {
        queries::assignments::list_assignments(&mut self.conn, filter)
    }

    /// Retrieves one assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried. Returns `Ok(None)`
    /// if the assignment does not exist.
    pub fn get_assignment(
        &mut self,
        assignment_id: &str,
    ) -> Result<Option<Assignment>, PersistenceError> {
        queries::assignments::get_assignment(&mut self.conn, assignment_id)
    }

    /// Creates an assignment and increments the assignee's counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment cannot be written.
    pub fn create_assignment(
        &mut self,
        assignment: &NewAssignment,
    ) -> Result<Assignment, PersistenceError> {
        mutations::assignments::insert_assignment(&mut self.conn, assignment)
    }

    /// Moves an assignment to another person, adjusting both counters.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the assignment does not exist,
    /// or an error if the update fails.
    pub fn reassign_assignment(
        &mut self,
        assignment_id: &str,
        person: &PersonnelRef,
    ) -> Result<Assignment, PersistenceError> {
        mutations::assignments::reassign_assignment(&mut self.conn, assignment_id, person)
    }

    /// Deletes an assignment and decrements the assignee's counter.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the assignment does not exist,
    /// or an error if the deletion fails.
    pub fn delete_assignment(&mut self, assignment_id: &str) -> Result<(), PersistenceError> {
        mutations::assignments::delete_assignment(&mut self.conn, assignment_id)
    }
}

impl OccurrenceSink for Persistence {
    type Error = PersistenceError;

    fn persist_occurrence(
        &mut self,
        occurrence: &OccurrenceDraft,
    ) -> Result<PersistedOccurrence, Self::Error> {
        mutations::occurrences::persist_occurrence(&mut self.conn, occurrence)
    }
}
