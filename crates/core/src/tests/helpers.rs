// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{OccurrenceDraft, OccurrenceSink, OccurrenceTemplate, PersistedOccurrence};
use duty_roster_domain::{PersonnelRef, RecurrencePattern, parse_iso_date};
use time::Date;

#[derive(Debug, thiserror::Error)]
#[error("simulated write failure")]
pub struct SimulatedFailure;

/// An in-memory sink that can be told to fail on its Nth call (zero-based).
#[derive(Debug, Default)]
pub struct FakeSink {
    pub written: Vec<OccurrenceDraft>,
    pub fail_at: Option<usize>,
    pub calls: usize,
}

impl FakeSink {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }
}

impl OccurrenceSink for FakeSink {
    type Error = SimulatedFailure;

    fn persist_occurrence(
        &mut self,
        occurrence: &OccurrenceDraft,
    ) -> Result<PersistedOccurrence, Self::Error> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(SimulatedFailure);
        }
        self.written.push(occurrence.clone());
        Ok(PersistedOccurrence {
            schedule_duty_id: format!("sd-{call}"),
            assignment_id: format!("as-{call}"),
            date: occurrence.date(),
        })
    }
}

pub fn date(value: &str) -> Date {
    parse_iso_date(value).unwrap()
}

pub fn create_test_template() -> OccurrenceTemplate {
    OccurrenceTemplate {
        duty_id: String::from("duty-g1"),
        duty_code: String::from("G1"),
        duty_name: String::from("Guard Duty - Main Gate"),
        qualifications: vec![String::from("Security L1"), String::from("Firearm")],
        personnel: PersonnelRef {
            personnel_id: String::from("person-1"),
            name: String::from("John Miller"),
            callsign: String::from("Alpha-1"),
        },
        start_time: String::from("0800"),
        end_time: String::from("1600"),
        sub_duty_name: String::new(),
        slot_index: 0,
    }
}

pub fn daily_pattern(occurrences: i64) -> RecurrencePattern {
    RecurrencePattern {
        frequency: String::from("daily"),
        interval: 1,
        end_type: String::from("occurrences"),
        occurrences: Some(occurrences),
        end_date: None,
        custom_days: Vec::new(),
    }
}
