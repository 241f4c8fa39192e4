// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_test_persistence, create_test_person, create_test_schedule_duty, date,
    new_assignment, total_duties,
};
use crate::{PersistenceError, ScheduleDutyRemoval};
use duty_roster_domain::{DateFilter, DutyKind, SubDutySlot};

fn slot(name: &str, count: i64) -> SubDutySlot {
    SubDutySlot {
        name: name.to_string(),
        count,
    }
}

#[test]
fn test_schedule_duty_round_trips() {
    let mut persistence = create_test_persistence();
    let created = create_test_schedule_duty(&mut persistence, "2025-01-15");

    assert_eq!(created.kind, DutyKind::Single);
    assert_eq!(created.date, date("2025-01-15"));

    let fetched = persistence
        .get_schedule_duty(&created.schedule_duty_id)
        .unwrap();
    assert_eq!(fetched, Some(created));
}

#[test]
fn test_schedule_duty_date_filters() {
    let mut persistence = create_test_persistence();
    for day in ["2025-01-01", "2025-01-10", "2025-01-20", "2025-02-01"] {
        create_test_schedule_duty(&mut persistence, day);
    }

    let all = persistence.list_schedule_duties(DateFilter::All).unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|pair| pair[0].date <= pair[1].date));

    let on = persistence
        .list_schedule_duties(DateFilter::On(date("2025-01-10")))
        .unwrap();
    assert_eq!(on.len(), 1);

    let between = persistence
        .list_schedule_duties(DateFilter::Between {
            start: date("2025-01-10"),
            end: date("2025-01-20"),
        })
        .unwrap();
    let dates: Vec<_> = between.iter().map(|sd| sd.date).collect();
    assert_eq!(dates, vec![date("2025-01-10"), date("2025-01-20")]);
}

#[test]
fn test_delete_unknown_schedule_duty_is_not_found() {
    let mut persistence = create_test_persistence();
    let result = persistence.delete_schedule_duty("missing");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_schedule_duty_cascades_and_decrements() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let bravo = create_test_person(&mut persistence, "Bravo-1", "Marcus Lee");
    let doomed = create_test_schedule_duty(&mut persistence, "2025-01-15");
    let survivor = create_test_schedule_duty(&mut persistence, "2025-01-16");

    persistence
        .create_assignment(&new_assignment(&doomed, &alpha))
        .unwrap();
    persistence
        .create_assignment(&new_assignment(&doomed, &bravo))
        .unwrap();
    persistence
        .create_assignment(&new_assignment(&survivor, &alpha))
        .unwrap();
    persistence
        .save_duty_group_config(&doomed.schedule_duty_id, &[slot("Gate", 2)])
        .unwrap();

    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 2);
    assert_eq!(total_duties(&mut persistence, &bravo.personnel_id), 1);

    let removal = persistence
        .delete_schedule_duty(&doomed.schedule_duty_id)
        .unwrap();
    assert_eq!(
        removal,
        ScheduleDutyRemoval {
            assignments_removed: 2,
            config_removed: true,
        }
    );

    assert!(
        persistence
            .get_schedule_duty(&doomed.schedule_duty_id)
            .unwrap()
            .is_none()
    );
    assert!(
        persistence
            .get_duty_group_config(&doomed.schedule_duty_id)
            .unwrap()
            .is_none()
    );
    let remaining = persistence.list_assignments(DateFilter::All).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].schedule_duty_id, survivor.schedule_duty_id);

    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 1);
    assert_eq!(total_duties(&mut persistence, &bravo.personnel_id), 0);
}

#[test]
fn test_group_config_absent_by_default() {
    let mut persistence = create_test_persistence();
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");
    assert!(
        persistence
            .get_duty_group_config(&schedule_duty.schedule_duty_id)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_group_config_upsert_replaces_slots() {
    let mut persistence = create_test_persistence();
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");
    let id = schedule_duty.schedule_duty_id.as_str();

    let first = persistence
        .save_duty_group_config(id, &[slot("Gate", 2), slot("Tower", 1)])
        .unwrap();
    assert_eq!(first.slots.len(), 2);

    let second = persistence
        .save_duty_group_config(id, &[slot("Roving", 3)])
        .unwrap();
    assert_eq!(second.config_id, first.config_id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.slots, vec![slot("Roving", 3)]);

    let fetched = persistence.get_duty_group_config(id).unwrap();
    assert_eq!(fetched, Some(second));
}
