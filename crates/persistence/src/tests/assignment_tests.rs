// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_test_persistence, create_test_person, create_test_schedule_duty, date,
    new_assignment, person_ref, total_duties,
};
use crate::PersistenceError;
use duty_roster_domain::{DateFilter, PersonnelRef};

#[test]
fn test_create_assignment_increments_counter() {
    let mut persistence = create_test_persistence();
    let person = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");

    let created = persistence
        .create_assignment(&new_assignment(&schedule_duty, &person))
        .unwrap();

    assert_eq!(created.schedule_duty_id, schedule_duty.schedule_duty_id);
    assert_eq!(created.personnel, person_ref(&person));
    assert_eq!(created.date, date("2025-01-15"));
    assert_eq!(total_duties(&mut persistence, &person.personnel_id), 1);
}

#[test]
fn test_assignment_for_unknown_person_is_still_created() {
    let mut persistence = create_test_persistence();
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");
    let mut assignment = new_assignment(
        &schedule_duty,
        &create_test_person(&mut persistence, "Alpha-1", "John Miller"),
    );
    assignment.personnel = PersonnelRef {
        personnel_id: String::from("ghost"),
        name: String::from("Nobody"),
        callsign: String::from("Zulu-9"),
    };

    persistence.create_assignment(&assignment).unwrap();
    assert_eq!(persistence.list_assignments(DateFilter::All).unwrap().len(), 1);
}

#[test]
fn test_reassign_moves_counter() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let bravo = create_test_person(&mut persistence, "Bravo-1", "Marcus Lee");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");

    let created = persistence
        .create_assignment(&new_assignment(&schedule_duty, &alpha))
        .unwrap();

    let moved = persistence
        .reassign_assignment(&created.assignment_id, &person_ref(&bravo))
        .unwrap();

    assert_eq!(moved.assignment_id, created.assignment_id);
    assert_eq!(moved.personnel, person_ref(&bravo));
    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 0);
    assert_eq!(total_duties(&mut persistence, &bravo.personnel_id), 1);

    let fetched = persistence
        .get_assignment(&created.assignment_id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched, moved);
}

#[test]
fn test_reassign_to_same_person_leaves_counter() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");
    let created = persistence
        .create_assignment(&new_assignment(&schedule_duty, &alpha))
        .unwrap();

    persistence
        .reassign_assignment(&created.assignment_id, &person_ref(&alpha))
        .unwrap();
    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 1);
}

#[test]
fn test_reassign_unknown_assignment_is_not_found() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");

    let result = persistence.reassign_assignment("missing", &person_ref(&alpha));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 0);
}

#[test]
fn test_delete_assignment_decrements_counter() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-15");
    let created = persistence
        .create_assignment(&new_assignment(&schedule_duty, &alpha))
        .unwrap();

    persistence.delete_assignment(&created.assignment_id).unwrap();

    assert!(
        persistence
            .get_assignment(&created.assignment_id)
            .unwrap()
            .is_none()
    );
    assert_eq!(total_duties(&mut persistence, &alpha.personnel_id), 0);
}

#[test]
fn test_delete_unknown_assignment_is_not_found() {
    let mut persistence = create_test_persistence();
    let result = persistence.delete_assignment("missing");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_assignment_date_filters() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    for day in ["2025-03-01", "2025-03-02", "2025-03-03"] {
        let schedule_duty = create_test_schedule_duty(&mut persistence, day);
        persistence
            .create_assignment(&new_assignment(&schedule_duty, &alpha))
            .unwrap();
    }

    let on = persistence
        .list_assignments(DateFilter::On(date("2025-03-02")))
        .unwrap();
    assert_eq!(on.len(), 1);
    assert_eq!(on[0].date, date("2025-03-02"));

    let between = persistence
        .list_assignments(DateFilter::Between {
            start: date("2025-03-02"),
            end: date("2025-03-31"),
        })
        .unwrap();
    assert_eq!(between.len(), 2);
}
