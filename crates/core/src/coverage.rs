// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coverage calculation.
//!
//! The report is always recomputed from scratch. Employees are first
//! bucketed by pattern; each bucket is then added to the pattern's five
//! working days. This is equivalent to visiting every employee for every
//! day, with work bounded by the seven-pattern catalog instead of the
//! roster size.

use crate::state::Roster;
use roster_sim_domain::{CoverageStatus, Day, Requirements, ShiftPattern};
use serde::Serialize;

/// Coverage figures for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCoverage {
    /// The day.
    pub day: Day,
    /// Required headcount.
    pub required: u32,
    /// Number of hired employees working this day.
    pub actual: usize,
    /// `actual - required`.
    pub difference: i64,
    /// Classification of `difference`.
    pub status: CoverageStatus,
}

impl DayCoverage {
    /// Builds the figures for a day from its required and actual headcount.
    #[must_use]
    pub fn new(day: Day, required: u32, actual: usize) -> Self {
        let difference: i64 =
            i64::try_from(actual).unwrap_or(i64::MAX) - i64::from(required);
        Self {
            day,
            required,
            actual,
            difference,
            status: CoverageStatus::classify(difference),
        }
    }

    /// Returns the surplus over the requirement, zero when understaffed.
    #[must_use]
    pub const fn slack(&self) -> u64 {
        if self.difference > 0 {
            self.difference.unsigned_abs()
        } else {
            0
        }
    }
}

/// Coverage of the whole week against the requirement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// One entry per day, Monday first.
    pub days: [DayCoverage; 7],
    /// Sum of positive differences across the week.
    pub total_slack: u64,
    /// True when no day is understaffed.
    pub all_met: bool,
    /// Number of hired employees.
    pub total_employees: usize,
}

impl CoverageReport {
    /// Returns the figures for a single day.
    #[must_use]
    pub const fn day(&self, day: Day) -> &DayCoverage {
        &self.days[day.index()]
    }

    /// Iterates the days that are below their requirement.
    pub fn understaffed_days(&self) -> impl Iterator<Item = &DayCoverage> {
        self.days
            .iter()
            .filter(|coverage| coverage.status == CoverageStatus::Understaffed)
    }
}

/// Counts how many employees work each day.
///
/// The result is indexed by `Day::index`.
#[must_use]
pub fn count_working(roster: &Roster) -> [usize; 7] {
    let mut per_pattern: [usize; 7] = [0; 7];
    for pattern in roster.patterns() {
        per_pattern[pattern.index()] += 1;
    }

    let mut per_day: [usize; 7] = [0; 7];
    for pattern in ShiftPattern::ALL {
        let hired: usize = per_pattern[pattern.index()];
        if hired == 0 {
            continue;
        }
        for day in pattern.working_days() {
            per_day[day.index()] += hired;
        }
    }
    per_day
}

/// Computes the coverage report for a roster.
///
/// Pure and deterministic: the same roster and requirements always give
/// the same report.
#[must_use]
pub fn compute_coverage(roster: &Roster, requirements: &Requirements) -> CoverageReport {
    let working: [usize; 7] = count_working(roster);
    let days: [DayCoverage; 7] = Day::ALL
        .map(|day| DayCoverage::new(day, requirements.required(day), working[day.index()]));

    let total_slack: u64 = days.iter().map(DayCoverage::slack).sum();
    let all_met: bool = days.iter().all(|coverage| coverage.status.is_met());

    CoverageReport {
        days,
        total_slack,
        all_met,
        total_employees: roster.size(),
    }
}
