// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `catalog` — Duty definitions and personnel
//! - `schedule` — Schedule duties and duty-group configurations
//! - `assignments` — Assignments

pub mod assignments;
pub mod catalog;
pub mod schedule;

use duty_roster_domain::{DateFilter, format_iso_date};

/// Maximum rows returned by catalog and personnel listings.
pub const CATALOG_LIMIT: i64 = 100;

/// Maximum rows returned by schedule duty and assignment listings.
pub const ROSTER_LIMIT: i64 = 500;

/// Builds a `LIKE` substring pattern.
///
/// `%`, `_` and `\` in the search term are escaped with `\`, so callers must
/// pair the pattern with `.escape('\\')`.
pub fn substring_pattern(term: &str) -> String {
    let mut pattern: String = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// The text bounds a `DateFilter` imposes on a `YYYY-MM-DD` column.
pub enum DateBounds {
    All,
    On(String),
    Between(String, String),
}

impl From<DateFilter> for DateBounds {
    fn from(filter: DateFilter) -> Self {
        match filter {
            DateFilter::All => Self::All,
            DateFilter::On(date) => Self::On(format_iso_date(date)),
            DateFilter::Between { start, end } => {
                Self::Between(format_iso_date(start), format_iso_date(end))
            }
        }
    }
}
