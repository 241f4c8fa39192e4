// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_person, date, person_ref, total_duties};
use duty_roster::{OccurrenceTemplate, expand_recurring_assignment};
use duty_roster_domain::{DateFilter, DutyKind, RecurrencePattern, format_iso_date};

fn weekly_pattern(occurrences: i64) -> RecurrencePattern {
    RecurrencePattern {
        frequency: String::from("weekly"),
        interval: 1,
        end_type: String::from("occurrences"),
        occurrences: Some(occurrences),
        end_date: None,
        custom_days: Vec::new(),
    }
}

#[test]
fn test_recurring_expansion_persists_pairs_and_counts() {
    let mut persistence = create_test_persistence();
    let person = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let template = OccurrenceTemplate {
        duty_id: String::from("duty-p1"),
        duty_code: String::from("P1"),
        duty_name: String::from("Patrol - Sector A"),
        qualifications: vec![String::from("Driver")],
        personnel: person_ref(&person),
        start_time: String::from("2200"),
        end_time: String::from("0600"),
        sub_duty_name: String::new(),
        slot_index: 0,
    };

    let outcome = expand_recurring_assignment(
        &mut persistence,
        &template,
        date("2025-01-06"),
        &weekly_pattern(4),
    )
    .unwrap();

    let dates: Vec<String> = outcome.dates().into_iter().map(format_iso_date).collect();
    assert_eq!(
        dates,
        vec!["2025-01-06", "2025-01-13", "2025-01-20", "2025-01-27"]
    );
    assert_eq!(outcome.created_count(), 4);

    let schedule_duties = persistence.list_schedule_duties(DateFilter::All).unwrap();
    assert_eq!(schedule_duties.len(), 4);
    assert!(schedule_duties.iter().all(|sd| {
        sd.duty_id == "duty-p1"
            && sd.kind == DutyKind::Single
            && sd.qualifications == vec![String::from("Driver")]
    }));

    let assignments = persistence.list_assignments(DateFilter::All).unwrap();
    assert_eq!(assignments.len(), 4);
    for (assignment, persisted) in assignments.iter().zip(outcome.occurrences()) {
        assert_eq!(assignment.schedule_duty_id, persisted.schedule_duty_id);
        assert_eq!(assignment.assignment_id, persisted.assignment_id);
        assert_eq!(assignment.date, persisted.date);
        assert_eq!(assignment.start_time, "2200");
    }

    assert_eq!(total_duties(&mut persistence, &person.personnel_id), 4);

    // Deleting one generated assignment lowers the counter by exactly one
    persistence
        .delete_assignment(&assignments[0].assignment_id)
        .unwrap();
    assert_eq!(total_duties(&mut persistence, &person.personnel_id), 3);
}
