// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_person};
use crate::SeedSummary;

#[test]
fn test_seed_populates_empty_tables() {
    let mut persistence = create_test_persistence();

    let summary = persistence.seed_defaults().unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            duties_inserted: 6,
            personnel_inserted: 8,
        }
    );

    let codes: Vec<String> = persistence
        .list_duties(None)
        .unwrap()
        .into_iter()
        .map(|duty| duty.code)
        .collect();
    for code in ["G1", "G2", "G3", "P1", "D1", "L1"] {
        assert!(codes.iter().any(|c| c == code), "missing {code}");
    }

    let personnel = persistence.list_personnel(Some("Delta-1"), None).unwrap();
    assert_eq!(personnel.len(), 1);
    assert_eq!(personnel[0].name, "Ryan Torres");
    assert_eq!(personnel[0].total_duties, 8);
    assert!(!personnel[0].available);

    assert_eq!(
        persistence.list_personnel(None, Some(true)).unwrap().len(),
        6
    );
}

#[test]
fn test_seed_is_idempotent() {
    let mut persistence = create_test_persistence();
    persistence.seed_defaults().unwrap();

    let summary = persistence.seed_defaults().unwrap();
    assert_eq!(summary, SeedSummary::default());
    assert_eq!(persistence.count_duties().unwrap(), 6);
    assert_eq!(persistence.count_personnel().unwrap(), 8);
}

#[test]
fn test_seed_skips_populated_table() {
    let mut persistence = create_test_persistence();
    create_test_person(&mut persistence, "Echo-1", "Sam Reyes");

    let summary = persistence.seed_defaults().unwrap();
    assert_eq!(summary.duties_inserted, 6);
    assert_eq!(summary.personnel_inserted, 0);
    assert_eq!(persistence.count_personnel().unwrap(), 1);
}
