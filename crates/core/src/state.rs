// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use roster_sim_domain::ShiftPattern;
use serde::Serialize;

/// One row of the roster listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    /// The employee's 1-based position in the roster.
    pub index: usize,
    /// The employee's shift pattern.
    pub pattern: ShiftPattern,
}

/// The ordered set of hired employees for one session.
///
/// Employees are identified only by their position. Insertion order is
/// preserved; the tail is the most recent hire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// Shift pattern of each hired employee, in hiring order.
    assignments: Vec<ShiftPattern>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Appends an employee on the given pattern.
    ///
    /// Returns the new roster size, which is also the new employee's id.
    pub fn hire(&mut self, pattern: ShiftPattern) -> usize {
        self.assignments.push(pattern);
        self.assignments.len()
    }

    /// Removes the most recently hired employee and returns their pattern.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyRoster` if there is nobody to remove. The
    /// roster is unchanged in that case.
    pub fn fire_last(&mut self) -> Result<ShiftPattern, CoreError> {
        self.assignments.pop().ok_or(CoreError::EmptyRoster)
    }

    /// Removes every employee.
    pub fn reset(&mut self) {
        self.assignments.clear();
    }

    /// Returns the number of hired employees.
    #[must_use]
    pub fn size(&self) -> usize {
        self.assignments.len()
    }

    /// Returns whether nobody is hired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Lists the roster in hiring order with 1-based ids.
    ///
    /// The iterator is lazy and can be cloned to restart the listing.
    pub fn list(&self) -> impl Iterator<Item = RosterEntry> + Clone + '_ {
        self.assignments
            .iter()
            .enumerate()
            .map(|(position, pattern)| RosterEntry {
                index: position + 1,
                pattern: *pattern,
            })
    }

    /// Returns the shift patterns in hiring order.
    #[must_use]
    pub fn patterns(&self) -> &[ShiftPattern] {
        &self.assignments
    }
}

impl FromIterator<ShiftPattern> for Roster {
    fn from_iter<I: IntoIterator<Item = ShiftPattern>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

/// What a successful command did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// An employee was appended.
    Hired {
        /// The new employee's 1-based id.
        employee_id: usize,
        /// The new employee's pattern.
        pattern: ShiftPattern,
    },
    /// The last employee was removed.
    Fired {
        /// The removed employee's former 1-based id.
        employee_id: usize,
        /// The removed employee's pattern.
        pattern: ShiftPattern,
    },
    /// The roster was cleared.
    Reset {
        /// How many employees were removed.
        removed: usize,
    },
}

/// The result of a successful roster transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The roster after the transition.
    pub new_roster: Roster,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}
