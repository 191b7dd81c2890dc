// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use nextup_core::{
    DateRole, ProjectField, ProjectForm, SubmissionPhase, SubmissionResult, SubmitStart,
    ValidationError,
};

use crate::common::{ScriptedCalendar, assert_ordered, launch_form, test_form};

#[test]
fn form_starts_idle_and_empty() {
    let form = ProjectForm::new();
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.can_submit());
    assert_eq!(form.submit_label(), "Create Project");
    assert_eq!(form.validate(), Err(ValidationError::MissingName));
}

#[test]
fn form_fields_from_key_value_input() {
    let mut form = ProjectForm::new();
    for (key, value) in [
        ("name", "Launch"),
        ("description", "Ship v1"),
        ("startDate", "2025-06-01"),
        ("endDate", "2025-06-20"),
    ] {
        form.update_field(ProjectField::parse(key, value).unwrap());
    }

    assert_eq!(form.draft().name, "Launch");
    assert_eq!(form.draft().start_date(), Some(date(2025, 6, 1)));
    assert_eq!(form.draft().end_date(), Some(date(2025, 6, 20)));
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn form_picker_writes_through() {
    let mut form = ProjectForm::new();
    let mut calendar = ScriptedCalendar::new([date(2025, 6, 1)]);
    form.picker().open(&mut calendar, DateRole::Start);

    let mut calendar = ScriptedCalendar::new([date(2025, 5, 1), date(2025, 6, 20)]);
    form.picker().open(&mut calendar, DateRole::End);

    assert_eq!(form.draft().start_date(), Some(date(2025, 6, 1)));
    assert_eq!(form.draft().end_date(), Some(date(2025, 6, 20)));
    assert_ordered(&form);
}

#[test]
fn form_moving_start_past_end_requires_new_end() {
    let mut form = test_form("Launch", date(2025, 6, 1), date(2025, 6, 5));

    form.picker()
        .select_date(date(2025, 6, 10), DateRole::Start)
        .unwrap();

    assert_eq!(form.draft().end_date(), None);
    assert_eq!(form.validate(), Err(ValidationError::MissingDates));
}

#[test]
fn form_launch_example_builds_request() {
    // Arrange
    let mut form = launch_form();

    // Act
    let start = form.begin_submit();

    // Assert
    let req = match start {
        SubmitStart::Started(req) => req,
        other => panic!("expected submission to start, got {other:?}"),
    };
    assert_eq!(req.name, "Launch");
    assert_eq!(req.description, "Ship v1");
    assert_eq!(req.start_date, date(2025, 6, 1));
    assert_eq!(req.end_date, date(2025, 6, 20));
    assert_eq!(req.status, "active");
    assert_eq!(form.submit_label(), "Creating...");
}

#[test]
fn form_finish_returns_to_idle() {
    let mut form = launch_form();
    let _ = form.begin_submit();

    form.finish_submit(&SubmissionResult::TransportFailure("down".to_string()));

    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.draft().name, "Launch");
}
