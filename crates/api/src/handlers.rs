// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for roster mutations and read-only views.
//!
//! Every mutation recomputes the coverage report before returning, so a
//! client can redraw from the response alone.

use roster_sim::{
    Command, CoverageReport, DayCoverage, Roster, TransitionResult, apply, compute_coverage,
};
use roster_sim_domain::{Day, FACILITY_REQUIREMENTS, ShiftPattern};
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CatalogResponse, DayReportInfo, FireLastResponse, HireRequest, HireResponse, PatternInfo,
    ReportResponse, RequirementInfo, ResetResponse, RosterEntryInfo, RosterResponse,
};

/// Verdict shown when every day meets its requirement.
pub const TARGET_MET_MESSAGE: &str = "Target Met! All shifts covered.";
/// Verdict shown when at least one day is understaffed.
pub const TARGET_NOT_MET_MESSAGE: &str = "Requirements not met.";
/// Message shown when the roster listing is empty.
pub const EMPTY_ROSTER_MESSAGE: &str = "No employees hired yet.";

/// Hires an employee on the requested pattern.
///
/// # Arguments
///
/// * `roster` - The session's roster
/// * `request` - The hire request carrying a catalog label
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the pattern label is not in the
/// catalog. The roster is unchanged in that case.
pub fn hire(roster: &mut Roster, request: &HireRequest) -> Result<HireResponse, ApiError> {
    let pattern: ShiftPattern =
        ShiftPattern::parse(&request.pattern).map_err(translate_domain_error)?;

    execute(roster, Command::Hire { pattern })?;

    // The new employee is always the tail
    let employee_id: usize = roster.size();

    Ok(HireResponse {
        employee_id,
        pattern: pattern.label().to_string(),
        message: format!("Added Employee #{employee_id}"),
        report: get_report(roster),
    })
}

/// Removes the most recently hired employee.
///
/// # Errors
///
/// Returns `ApiError::NothingToRemove` if the roster is empty. The roster
/// is unchanged in that case.
pub fn fire_last(roster: &mut Roster) -> Result<FireLastResponse, ApiError> {
    // The tail's id is the size before removal
    let employee_id: usize = roster.size();
    let pattern: ShiftPattern = roster.fire_last().map_err(translate_core_error)?;
    debug!(employee_id, pattern = %pattern, "Fired employee");

    Ok(FireLastResponse {
        employee_id,
        pattern: pattern.label().to_string(),
        message: format!("Removed Employee #{employee_id}"),
        report: get_report(roster),
    })
}

/// Clears the roster.
pub fn reset(roster: &mut Roster) -> ResetResponse {
    let removed: usize = roster.size();
    roster.reset();
    debug!(removed, "Reset roster");

    ResetResponse {
        removed,
        message: format!("Simulation reset: removed {removed} employee(s)"),
        report: get_report(roster),
    }
}

/// Computes the coverage report for a roster against the facility requirements.
#[must_use]
pub fn get_report(roster: &Roster) -> ReportResponse {
    report_to_response(&compute_coverage(roster, &FACILITY_REQUIREMENTS))
}

/// Lists the roster in hiring order.
#[must_use]
pub fn list_roster(roster: &Roster) -> RosterResponse {
    let employees: Vec<RosterEntryInfo> = roster
        .list()
        .map(|entry| RosterEntryInfo {
            id: entry.index,
            pattern: entry.pattern.label().to_string(),
        })
        .collect();

    RosterResponse {
        total_employees: roster.size(),
        message: employees
            .is_empty()
            .then(|| String::from(EMPTY_ROSTER_MESSAGE)),
        employees,
    }
}

/// Applies a command to the roster, replacing it on success.
///
/// The roster is untouched when the command fails.
fn execute(roster: &mut Roster, command: Command) -> Result<(), ApiError> {
    let transition: TransitionResult = apply(roster, command).map_err(translate_core_error)?;
    debug!(command = command.name(), outcome = ?transition.outcome, "Applied command");
    *roster = transition.new_roster;
    Ok(())
}

/// Describes the days, requirement table and pattern catalog.
#[must_use]
pub fn get_catalog() -> CatalogResponse {
    CatalogResponse {
        days: Day::ALL.iter().map(ToString::to_string).collect(),
        requirements: FACILITY_REQUIREMENTS
            .iter()
            .map(|(day, required)| RequirementInfo {
                day: day.to_string(),
                required,
            })
            .collect(),
        patterns: ShiftPattern::ALL
            .iter()
            .map(|pattern| PatternInfo {
                label: pattern.label().to_string(),
                days_off: pattern.days_off().iter().map(ToString::to_string).collect(),
                working_days: pattern.working_days().map(|day| day.to_string()).collect(),
            })
            .collect(),
    }
}

/// Converts a `CoverageReport` to a `ReportResponse`.
fn report_to_response(report: &CoverageReport) -> ReportResponse {
    ReportResponse {
        per_day: report.days.iter().map(day_to_info).collect(),
        total_slack: report.total_slack,
        all_met: report.all_met,
        total_employees: report.total_employees,
        verdict: if report.all_met {
            String::from(TARGET_MET_MESSAGE)
        } else {
            String::from(TARGET_NOT_MET_MESSAGE)
        },
    }
}

fn day_to_info(coverage: &DayCoverage) -> DayReportInfo {
    DayReportInfo {
        day: coverage.day.to_string(),
        required: coverage.required,
        actual: coverage.actual,
        difference: coverage.difference,
        status: coverage.status,
        label: coverage.status.display_label(coverage.difference),
    }
}
