// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    assignment_request, create_test_person, create_test_persistence, create_test_schedule_duty,
    total_duties,
};
use crate::{
    ApiError, CreateScheduleDutyRequest, DateFilterQuery, DeletedResponse,
    ReassignAssignmentRequest, SaveDutyGroupConfigRequest, create_assignment,
    create_schedule_duty, delete_assignment, delete_schedule_duty, get_duty_group_config,
    list_assignments, list_schedule_duties, reassign_assignment, save_duty_group_config,
};
use duty_roster_domain::SubDutySlot;

fn schedule_request(duty_type: &str, date: &str) -> CreateScheduleDutyRequest {
    CreateScheduleDutyRequest {
        duty_id: String::from("duty-d1"),
        duty_name: String::from("Desk Ops - HQ"),
        duty_code: String::from("D1"),
        duty_type: duty_type.to_string(),
        qualifications: Vec::new(),
        date: date.to_string(),
    }
}

fn slot(name: &str, count: i64) -> SubDutySlot {
    SubDutySlot {
        name: name.to_string(),
        count,
    }
}

#[test]
fn test_create_group_schedule_duty() {
    let mut persistence = create_test_persistence();

    let created =
        create_schedule_duty(&mut persistence, schedule_request("group", "2025-02-01")).unwrap();

    assert_eq!(created.duty_type, "group");
    assert_eq!(created.date, "2025-02-01");
    assert!(!created.id.is_empty());
}

#[test]
fn test_create_schedule_duty_rejects_unknown_duty_type() {
    let mut persistence = create_test_persistence();

    let result = create_schedule_duty(&mut persistence, schedule_request("triple", "2025-02-01"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "duty_type"
    ));
}

#[test]
fn test_create_schedule_duty_rejects_malformed_date() {
    let mut persistence = create_test_persistence();

    let result = create_schedule_duty(&mut persistence, schedule_request("single", "2025-02-30"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}

#[test]
fn test_schedule_duty_date_filters() {
    let mut persistence = create_test_persistence();
    for on in ["2025-01-01", "2025-01-05", "2025-01-10"] {
        create_test_schedule_duty(&mut persistence, on);
    }

    let on_date = list_schedule_duties(
        &mut persistence,
        &DateFilterQuery {
            date: Some(String::from("2025-01-05")),
            start_date: Some(String::from("2025-01-01")),
            end_date: Some(String::from("2025-01-10")),
        },
    )
    .unwrap();
    assert_eq!(on_date.len(), 1);
    assert_eq!(on_date[0].date, "2025-01-05");

    let in_range = list_schedule_duties(
        &mut persistence,
        &DateFilterQuery {
            date: None,
            start_date: Some(String::from("2025-01-02")),
            end_date: Some(String::from("2025-01-10")),
        },
    )
    .unwrap();
    let dates: Vec<&str> = in_range.iter().map(|sd| sd.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-01-05", "2025-01-10"]);

    let lone_bound = list_schedule_duties(
        &mut persistence,
        &DateFilterQuery {
            date: Some(String::new()),
            start_date: Some(String::from("2025-01-06")),
            end_date: None,
        },
    )
    .unwrap();
    assert_eq!(lone_bound.len(), 3);
}

#[test]
fn test_malformed_filter_date_is_rejected() {
    let mut persistence = create_test_persistence();

    let result = list_assignments(
        &mut persistence,
        &DateFilterQuery {
            date: None,
            start_date: Some(String::from("yesterday")),
            end_date: Some(String::from("2025-01-10")),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "start_date"
    ));
}

#[test]
fn test_delete_unknown_schedule_duty_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = delete_schedule_duty(&mut persistence, "no-such-duty");

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Schedule duty"
    ));
}

#[test]
fn test_delete_schedule_duty_cascades() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let bravo = create_test_person(&mut persistence, "Bravo-1", "Marcus Lee");
    let kept = create_test_schedule_duty(&mut persistence, "2025-01-02");
    let removed = create_test_schedule_duty(&mut persistence, "2025-01-03");

    create_assignment(&mut persistence, assignment_request(&removed, &alpha)).unwrap();
    create_assignment(&mut persistence, assignment_request(&removed, &bravo)).unwrap();
    create_assignment(&mut persistence, assignment_request(&kept, &alpha)).unwrap();
    save_duty_group_config(
        &mut persistence,
        &SaveDutyGroupConfigRequest {
            schedule_duty_id: removed.id.clone(),
            duties: vec![slot("Pilot", 2)],
        },
    )
    .unwrap();
    assert_eq!(total_duties(&mut persistence, &alpha.id), 2);

    let response = delete_schedule_duty(&mut persistence, &removed.id).unwrap();

    assert_eq!(response, DeletedResponse { deleted: true });
    assert_eq!(total_duties(&mut persistence, &alpha.id), 1);
    assert_eq!(total_duties(&mut persistence, &bravo.id), 0);
    assert!(
        get_duty_group_config(&mut persistence, &removed.id)
            .unwrap()
            .is_none()
    );
    let remaining = list_assignments(&mut persistence, &DateFilterQuery::default()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].schedule_duty_id, kept.id);
}

#[test]
fn test_assignment_lifecycle_keeps_counters_in_step() {
    let mut persistence = create_test_persistence();
    let alpha = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let bravo = create_test_person(&mut persistence, "Bravo-2", "Emily Park");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-02");

    let created =
        create_assignment(&mut persistence, assignment_request(&schedule_duty, &alpha)).unwrap();
    assert_eq!(created.personnel_id, alpha.id);
    assert_eq!(total_duties(&mut persistence, &alpha.id), 1);

    let moved = reassign_assignment(
        &mut persistence,
        &created.id,
        ReassignAssignmentRequest {
            personnel_id: bravo.id.clone(),
            personnel_name: bravo.name.clone(),
            personnel_callsign: bravo.callsign.clone(),
        },
    )
    .unwrap();
    assert_eq!(moved.id, created.id);
    assert_eq!(moved.personnel_id, bravo.id);
    assert_eq!(moved.personnel_callsign, "Bravo-2");
    assert_eq!(total_duties(&mut persistence, &alpha.id), 0);
    assert_eq!(total_duties(&mut persistence, &bravo.id), 1);

    delete_assignment(&mut persistence, &created.id).unwrap();
    assert_eq!(total_duties(&mut persistence, &bravo.id), 0);
    assert!(
        list_assignments(&mut persistence, &DateFilterQuery::default())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_unknown_assignment_is_not_found() {
    let mut persistence = create_test_persistence();
    let person = create_test_person(&mut persistence, "Alpha-1", "John Miller");

    let reassigned = reassign_assignment(
        &mut persistence,
        "no-such-assignment",
        ReassignAssignmentRequest {
            personnel_id: person.id.clone(),
            personnel_name: person.name.clone(),
            personnel_callsign: person.callsign,
        },
    );
    assert!(matches!(
        reassigned,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Assignment"
    ));

    let deleted = delete_assignment(&mut persistence, "no-such-assignment");
    assert!(matches!(deleted, Err(ApiError::ResourceNotFound { .. })));
    assert_eq!(total_duties(&mut persistence, &person.id), 0);
}

#[test]
fn test_create_assignment_rejects_negative_slot() {
    let mut persistence = create_test_persistence();
    let person = create_test_person(&mut persistence, "Alpha-1", "John Miller");
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-02");
    let mut request = assignment_request(&schedule_duty, &person);
    request.slot_index = -1;

    let result = create_assignment(&mut persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "slot_index"
    ));
    assert_eq!(total_duties(&mut persistence, &person.id), 0);
}

#[test]
fn test_duty_group_config_upsert_replaces_slots() {
    let mut persistence = create_test_persistence();
    let schedule_duty = create_test_schedule_duty(&mut persistence, "2025-01-02");

    assert!(
        get_duty_group_config(&mut persistence, &schedule_duty.id)
            .unwrap()
            .is_none()
    );

    let first = save_duty_group_config(
        &mut persistence,
        &SaveDutyGroupConfigRequest {
            schedule_duty_id: schedule_duty.id.clone(),
            duties: vec![slot("Pilot", 2), slot("Tower", 1)],
        },
    )
    .unwrap();
    let second = save_duty_group_config(
        &mut persistence,
        &SaveDutyGroupConfigRequest {
            schedule_duty_id: schedule_duty.id.clone(),
            duties: vec![slot("Ground", 3)],
        },
    )
    .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.duties, vec![slot("Ground", 3)]);
    let stored = get_duty_group_config(&mut persistence, &schedule_duty.id)
        .unwrap()
        .expect("Config should exist");
    assert_eq!(stored, second);
}

#[test]
fn test_duty_group_config_rejects_empty_slot() {
    let mut persistence = create_test_persistence();

    let result = save_duty_group_config(
        &mut persistence,
        &SaveDutyGroupConfigRequest {
            schedule_duty_id: String::from("sd-1"),
            duties: vec![slot("Pilot", 0)],
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "slot count"
    ));
}
