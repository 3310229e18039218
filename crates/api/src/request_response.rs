// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use roster_sim_domain::CoverageStatus;
use serde::{Deserialize, Serialize};

/// API request to hire an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireRequest {
    /// The catalog label of the new employee's shift pattern.
    pub pattern: String,
}

/// API response for a successful hire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireResponse {
    /// The new employee's 1-based id.
    pub employee_id: usize,
    /// The new employee's shift pattern label.
    pub pattern: String,
    /// A success message.
    pub message: String,
    /// The coverage report after the hire.
    pub report: ReportResponse,
}

/// API response for a successful removal of the last employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireLastResponse {
    /// The removed employee's former 1-based id.
    pub employee_id: usize,
    /// The removed employee's shift pattern label.
    pub pattern: String,
    /// A success message.
    pub message: String,
    /// The coverage report after the removal.
    pub report: ReportResponse,
}

/// API response for a roster reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    /// How many employees were removed.
    pub removed: usize,
    /// A success message.
    pub message: String,
    /// The coverage report after the reset.
    pub report: ReportResponse,
}

/// Coverage figures for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReportInfo {
    /// The day name (e.g., "Monday").
    pub day: String,
    /// Required headcount.
    pub required: u32,
    /// Employees working this day.
    pub actual: usize,
    /// `actual - required`.
    pub difference: i64,
    /// The day's classification.
    pub status: CoverageStatus,
    /// Display label, e.g. "Understaffed", "Perfect" or "+2 Slack".
    pub label: String,
}

/// API response for the coverage report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    /// One entry per day, Monday first.
    pub per_day: Vec<DayReportInfo>,
    /// Sum of positive differences across the week.
    pub total_slack: u64,
    /// True when no day is understaffed.
    pub all_met: bool,
    /// Number of hired employees.
    pub total_employees: usize,
    /// Overall verdict for display.
    pub verdict: String,
}

/// One employee in the roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntryInfo {
    /// The employee's 1-based id.
    pub id: usize,
    /// The employee's shift pattern label.
    pub pattern: String,
}

/// API response for the roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterResponse {
    /// Number of hired employees.
    pub total_employees: usize,
    /// Employees in hiring order.
    pub employees: Vec<RosterEntryInfo>,
    /// Informational message when the roster is empty.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// A shift pattern in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternInfo {
    /// The pattern's catalog label, used when hiring.
    pub label: String,
    /// The two days off.
    pub days_off: Vec<String>,
    /// The five working days, in week order.
    pub working_days: Vec<String>,
}

/// Required headcount for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementInfo {
    /// The day name.
    pub day: String,
    /// Required headcount.
    pub required: u32,
}

/// API response describing the static scheduling tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The days of the week, in week order.
    pub days: Vec<String>,
    /// The requirement table.
    pub requirements: Vec<RequirementInfo>,
    /// The shift pattern catalog.
    pub patterns: Vec<PatternInfo>,
}

/// API response for a newly opened session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// The bearer token identifying the session.
    pub session_token: String,
    /// A success message.
    pub message: String,
}
