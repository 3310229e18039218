// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_sim::Roster;
use roster_sim_domain::{CoverageStatus, ShiftPattern};

use crate::tests::helpers::{create_hire_request, hire_many};
use crate::{
    ApiError, CatalogResponse, EMPTY_ROSTER_MESSAGE, FireLastResponse, HireRequest, HireResponse,
    ReportResponse, ResetResponse, RosterResponse, TARGET_MET_MESSAGE, TARGET_NOT_MET_MESSAGE,
    fire_last, get_catalog, get_report, hire, list_roster, reset,
};

#[test]
fn test_hire_returns_employee_number_and_report() {
    let mut roster: Roster = Roster::new();

    let response: HireResponse =
        hire(&mut roster, &create_hire_request(ShiftPattern::SatSunOff)).unwrap();

    assert_eq!(response.employee_id, 1);
    assert_eq!(response.pattern, "Sat-Sun Off (Work Mon-Fri)");
    assert_eq!(response.message, "Added Employee #1");
    assert_eq!(response.report.total_employees, 1);
    assert_eq!(roster.size(), 1);
}

#[test]
fn test_hire_with_unknown_pattern_is_rejected_without_mutation() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SunMonOff, 2);
    let before: Roster = roster.clone();

    let request: HireRequest = HireRequest {
        pattern: String::from("Weekends Only"),
    };
    let result: Result<HireResponse, ApiError> = hire(&mut roster, &request);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "pattern"
    ));
    assert_eq!(roster, before);
}

#[test]
fn test_fire_last_removes_tail() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SatSunOff, 1);
    hire_many(&mut roster, ShiftPattern::ThuFriOff, 1);

    let response: FireLastResponse = fire_last(&mut roster).unwrap();

    assert_eq!(response.employee_id, 2);
    assert_eq!(response.pattern, "Thu-Fri Off (Work Sat-Wed)");
    assert_eq!(response.message, "Removed Employee #2");
    assert_eq!(response.report.total_employees, 1);
}

#[test]
fn test_fire_last_walks_back_through_hires() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SunMonOff, 1);
    hire_many(&mut roster, ShiftPattern::MonTueOff, 1);

    let second: FireLastResponse = fire_last(&mut roster).unwrap();
    let first: FireLastResponse = fire_last(&mut roster).unwrap();

    assert_eq!(second.employee_id, 2);
    assert_eq!(second.pattern, ShiftPattern::MonTueOff.label());
    assert_eq!(first.employee_id, 1);
    assert_eq!(first.pattern, ShiftPattern::SunMonOff.label());
    assert_eq!(first.report.total_employees, 0);
    assert!(matches!(
        fire_last(&mut roster),
        Err(ApiError::NothingToRemove { .. })
    ));
}

#[test]
fn test_fire_last_on_empty_roster_is_nothing_to_remove() {
    let mut roster: Roster = Roster::new();

    let result: Result<FireLastResponse, ApiError> = fire_last(&mut roster);

    assert_eq!(
        result.unwrap_err(),
        ApiError::NothingToRemove {
            message: String::from("No employees to remove."),
        }
    );
    assert_eq!(roster.size(), 0);
}

#[test]
fn test_hire_then_fire_restores_report() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::WedThuOff, 3);
    let before: ReportResponse = get_report(&roster);

    hire(&mut roster, &create_hire_request(ShiftPattern::FriSatOff)).unwrap();
    let after_fire: FireLastResponse = fire_last(&mut roster).unwrap();

    assert_eq!(after_fire.report, before);
}

#[test]
fn test_reset_empties_roster() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SatSunOff, 5);

    let response: ResetResponse = reset(&mut roster);

    assert_eq!(response.removed, 5);
    assert!(roster.is_empty());
    assert_eq!(response.report.total_slack, 0);
    assert!(!response.report.all_met);
    assert!(response.report.per_day.iter().all(|day| day.actual == 0));
}

#[test]
fn test_empty_roster_report() {
    let report: ReportResponse = get_report(&Roster::new());

    let sunday = report.per_day.iter().find(|day| day.day == "Sunday").unwrap();
    assert_eq!(sunday.actual, 0);
    assert_eq!(sunday.required, 2);
    assert_eq!(sunday.status, CoverageStatus::Understaffed);
    assert_eq!(sunday.label, "Understaffed");
    assert_eq!(report.total_slack, 0);
    assert!(!report.all_met);
    assert_eq!(report.verdict, TARGET_NOT_MET_MESSAGE);
}

#[test]
fn test_ten_weekday_workers_report() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SatSunOff, 10);

    let report: ReportResponse = get_report(&roster);

    let labels: Vec<&str> = report.per_day.iter().map(|day| day.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "+4 Slack",
            "+6 Slack",
            "+2 Slack",
            "+1 Slack",
            "Perfect",
            "Understaffed",
            "Understaffed"
        ]
    );
    assert_eq!(report.total_slack, 13);
    assert!(!report.all_met);
    assert_eq!(report.total_employees, 10);
}

#[test]
fn test_covering_roster_reports_target_met() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::SatSunOff, 6);
    hire_many(&mut roster, ShiftPattern::MonTueOff, 3);
    hire_many(&mut roster, ShiftPattern::SunMonOff, 1);

    let report: ReportResponse = get_report(&roster);

    assert!(report.all_met);
    assert_eq!(report.verdict, TARGET_MET_MESSAGE);
    assert_eq!(report.total_slack, 8);
}

#[test]
fn test_report_is_idempotent() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::TueWedOff, 4);
    assert_eq!(get_report(&roster), get_report(&roster));
}

#[test]
fn test_list_roster() {
    let mut roster: Roster = Roster::new();
    hire_many(&mut roster, ShiftPattern::MonTueOff, 1);
    hire_many(&mut roster, ShiftPattern::SatSunOff, 1);

    let response: RosterResponse = list_roster(&roster);

    assert_eq!(response.total_employees, 2);
    assert_eq!(response.employees[0].id, 1);
    assert_eq!(response.employees[0].pattern, "Mon-Tue Off (Work Wed-Sun)");
    assert_eq!(response.employees[1].id, 2);
    assert!(response.message.is_none());
}

#[test]
fn test_list_empty_roster_has_message() {
    let response: RosterResponse = list_roster(&Roster::new());
    assert!(response.employees.is_empty());
    assert_eq!(response.message.as_deref(), Some(EMPTY_ROSTER_MESSAGE));
}

#[test]
fn test_catalog_describes_static_tables() {
    let catalog: CatalogResponse = get_catalog();

    assert_eq!(catalog.days.len(), 7);
    assert_eq!(catalog.days[0], "Monday");
    assert_eq!(catalog.requirements[4].day, "Friday");
    assert_eq!(catalog.requirements[4].required, 10);
    assert_eq!(catalog.patterns.len(), 7);

    let weekend_off = &catalog.patterns[0];
    assert_eq!(weekend_off.label, "Sat-Sun Off (Work Mon-Fri)");
    assert_eq!(weekend_off.days_off, vec!["Saturday", "Sunday"]);
    assert_eq!(
        weekend_off.working_days,
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
    );
}
