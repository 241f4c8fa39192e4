// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use duty_roster_domain::RecurrencePattern;
use duty_roster_persistence::Persistence;

use crate::{
    CreateAssignmentRequest, CreatePersonnelRequest, CreateRecurringAssignmentRequest,
    CreateScheduleDutyRequest, PersonnelResponse, ScheduleDutyResponse, create_personnel,
    create_schedule_duty,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_person(
    persistence: &mut Persistence,
    callsign: &str,
    name: &str,
) -> PersonnelResponse {
    create_personnel(
        persistence,
        CreatePersonnelRequest {
            callsign: callsign.to_string(),
            name: name.to_string(),
            qualifications: vec![String::from("Security L1")],
            available: true,
        },
    )
    .expect("Failed to create personnel")
}

pub fn create_test_schedule_duty(persistence: &mut Persistence, on: &str) -> ScheduleDutyResponse {
    create_schedule_duty(
        persistence,
        CreateScheduleDutyRequest {
            duty_id: String::from("duty-g1"),
            duty_name: String::from("Guard Duty - Main Gate"),
            duty_code: String::from("G1"),
            duty_type: String::from("single"),
            qualifications: vec![String::from("Security L1"), String::from("Firearm")],
            date: on.to_string(),
        },
    )
    .expect("Failed to create schedule duty")
}

pub fn assignment_request(
    schedule_duty: &ScheduleDutyResponse,
    person: &PersonnelResponse,
) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        schedule_duty_id: schedule_duty.id.clone(),
        duty_code: schedule_duty.duty_code.clone(),
        duty_name: schedule_duty.duty_name.clone(),
        personnel_id: person.id.clone(),
        personnel_name: person.name.clone(),
        personnel_callsign: person.callsign.clone(),
        date: schedule_duty.date.clone(),
        start_time: String::from("0800"),
        end_time: String::from("1600"),
        sub_duty_name: String::new(),
        slot_index: 0,
    }
}

pub fn pattern(frequency: &str, end_type: &str) -> RecurrencePattern {
    RecurrencePattern {
        frequency: frequency.to_string(),
        interval: 1,
        end_type: end_type.to_string(),
        occurrences: None,
        end_date: None,
        custom_days: Vec::new(),
    }
}

pub fn counted_pattern(frequency: &str, occurrences: i64) -> RecurrencePattern {
    RecurrencePattern {
        occurrences: Some(occurrences),
        ..pattern(frequency, "occurrences")
    }
}

pub fn recurring_request(
    schedule_duty_id: &str,
    person: &PersonnelResponse,
    start_date: &str,
    recurrence: RecurrencePattern,
) -> CreateRecurringAssignmentRequest {
    CreateRecurringAssignmentRequest {
        schedule_duty_id: schedule_duty_id.to_string(),
        duty_code: String::from("G1"),
        duty_name: String::from("Guard Duty - Main Gate"),
        personnel_id: person.id.clone(),
        personnel_name: person.name.clone(),
        personnel_callsign: person.callsign.clone(),
        start_date: start_date.to_string(),
        start_time: String::from("0800"),
        end_time: String::from("1600"),
        recurrence,
        sub_duty_name: String::new(),
        slot_index: 0,
    }
}

pub fn total_duties(persistence: &mut Persistence, personnel_id: &str) -> i64 {
    persistence
        .get_personnel(personnel_id)
        .unwrap()
        .expect("Personnel should exist")
        .total_duties
}
