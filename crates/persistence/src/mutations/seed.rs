// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup seeding of the duty catalog and personnel.

use diesel::SqliteConnection;
use diesel::prelude::*;
use duty_roster_domain::{NewDutyDefinition, NewPersonnel};
use tracing::info;

use super::catalog::{insert_duty, insert_personnel};
use crate::error::PersistenceError;
use crate::queries::catalog::{count_duties, count_personnel};

/// How many records seeding inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub duties_inserted: usize,
    pub personnel_inserted: usize,
}

/// `(code, name, qualifications)`
const SEED_DUTIES: &[(&str, &str, &[&str])] = &[
    ("G1", "Guard Duty - Main Gate", &["Security L1", "Firearm"]),
    ("G2", "Guard Duty - East Wing", &["Security L1", "Comms"]),
    ("G3", "Guard Duty - Perimeter", &["Security L2", "Patrol"]),
    ("P1", "Patrol - Sector A", &["Driver", "Security L1"]),
    ("D1", "Desk Ops - HQ", &["Admin", "Comms"]),
    ("L1", "Logistics Support", &["Heavy Lift"]),
];

/// `(callsign, name, qualifications, total_duties, available)`
const SEED_PERSONNEL: &[(&str, &str, &[&str], i64, bool)] = &[
    (
        "Alpha-1",
        "John Miller",
        &["Security L1", "Firearm", "Comms"],
        7,
        true,
    ),
    (
        "Alpha-2",
        "Sarah Chen",
        &["Security L1", "Security L2", "Patrol"],
        5,
        true,
    ),
    (
        "Bravo-1",
        "Marcus Lee",
        &["Driver", "Security L1", "Heavy Lift"],
        3,
        true,
    ),
    (
        "Bravo-2",
        "Emily Park",
        &["Admin", "Comms", "Security L1"],
        6,
        true,
    ),
    (
        "Charlie-1",
        "David Kim",
        &["Security L2", "Firearm", "Patrol"],
        4,
        true,
    ),
    (
        "Charlie-2",
        "Jessica Wang",
        &["Heavy Lift", "Driver"],
        2,
        true,
    ),
    ("Delta-1", "Ryan Torres", &["Comms", "Admin"], 8, false),
    (
        "Delta-2",
        "Olivia Brown",
        &["Security L1", "Firearm", "Security L2"],
        5,
        false,
    ),
];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Seeds the duty catalog and personnel when they are empty.
///
/// Each table is checked separately; a populated table is left untouched.
///
/// # Errors
///
/// Returns an error if counting or inserting fails. Seeding of a table is
/// all-or-nothing.
pub fn seed_defaults(conn: &mut SqliteConnection) -> Result<SeedSummary, PersistenceError> {
    let mut summary: SeedSummary = SeedSummary::default();

    if count_duties(conn)? == 0 {
        summary.duties_inserted = conn.transaction::<_, PersistenceError, _>(|conn| {
            for (code, name, qualifications) in SEED_DUTIES {
                insert_duty(
                    conn,
                    &NewDutyDefinition {
                        name: (*name).to_string(),
                        code: (*code).to_string(),
                        qualifications: to_strings(qualifications),
                    },
                )?;
            }
            Ok(SEED_DUTIES.len())
        })?;
        info!(count = summary.duties_inserted, "Seeded duty catalog");
    }

    if count_personnel(conn)? == 0 {
        summary.personnel_inserted = conn.transaction::<_, PersistenceError, _>(|conn| {
            for (callsign, name, qualifications, total_duties, available) in SEED_PERSONNEL {
                insert_personnel(
                    conn,
                    &NewPersonnel {
                        callsign: (*callsign).to_string(),
                        name: (*name).to_string(),
                        qualifications: to_strings(qualifications),
                        available: *available,
                    },
                    *total_duties,
                )?;
            }
            Ok(SEED_PERSONNEL.len())
        })?;
        info!(count = summary.personnel_inserted, "Seeded personnel");
    }

    Ok(summary)
}
