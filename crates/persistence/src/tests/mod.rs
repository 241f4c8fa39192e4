// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod assignment_tests;
mod initialization_tests;
mod occurrence_tests;
mod schedule_tests;
mod seed_tests;

use crate::Persistence;
use duty_roster_domain::{
    DutyKind, NewAssignment, NewPersonnel, NewScheduleDuty, Personnel, PersonnelRef,
    ScheduleDuty, parse_iso_date,
};
use time::Date;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn date(value: &str) -> Date {
    parse_iso_date(value).expect("Valid test date")
}

pub fn create_test_person(persistence: &mut Persistence, callsign: &str, name: &str) -> Personnel {
    persistence
        .create_personnel(&NewPersonnel {
            callsign: callsign.to_string(),
            name: name.to_string(),
            qualifications: vec![String::from("Security L1")],
            available: true,
        })
        .expect("Failed to create personnel")
}

pub fn create_test_schedule_duty(persistence: &mut Persistence, on: &str) -> ScheduleDuty {
    persistence
        .create_schedule_duty(&NewScheduleDuty {
            duty_id: String::from("duty-g1"),
            duty_name: String::from("Guard Duty - Main Gate"),
            duty_code: String::from("G1"),
            kind: DutyKind::Single,
            qualifications: vec![String::from("Security L1"), String::from("Firearm")],
            date: date(on),
        })
        .expect("Failed to create schedule duty")
}

pub fn person_ref(person: &Personnel) -> PersonnelRef {
    PersonnelRef {
        personnel_id: person.personnel_id.clone(),
        name: person.name.clone(),
        callsign: person.callsign.clone(),
    }
}

pub fn new_assignment(schedule_duty: &ScheduleDuty, person: &Personnel) -> NewAssignment {
    NewAssignment {
        schedule_duty_id: schedule_duty.schedule_duty_id.clone(),
        duty_code: schedule_duty.duty_code.clone(),
        duty_name: schedule_duty.duty_name.clone(),
        personnel: person_ref(person),
        date: schedule_duty.date,
        start_time: String::from("0800"),
        end_time: String::from("1600"),
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
