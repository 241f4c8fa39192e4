// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `catalog` — Duty definitions, personnel and the personnel duty counter
//! - `schedule` — Schedule duties (with cascade delete) and duty-group configurations
//! - `assignments` — Assignment create, reassign and delete with counter upkeep
//! - `occurrences` — One recurring occurrence per transaction
//! - `seed` — Startup catalog and personnel seeding
//!
//! Every mutation that touches an assignment adjusts the affected personnel
//! counters inside the same transaction.

pub mod assignments;
pub mod catalog;
pub mod occurrences;
pub mod schedule;
pub mod seed;

pub use schedule::ScheduleDutyRemoval;
pub use seed::SeedSummary;
