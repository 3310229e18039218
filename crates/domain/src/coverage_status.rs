// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day coverage classification.
//!
//! A day is classified by the signed difference between the number of
//! employees working it and the number required. A difference of exactly
//! zero is its own class.

use serde::{Deserialize, Serialize};

/// Staffing status of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// Fewer employees than required.
    Understaffed,
    /// Exactly the required number of employees.
    Perfect,
    /// More employees than required.
    Slack,
}

impl CoverageStatus {
    /// Classifies a day from `actual - required`.
    #[must_use]
    pub const fn classify(difference: i64) -> Self {
        if difference < 0 {
            Self::Understaffed
        } else if difference == 0 {
            Self::Perfect
        } else {
            Self::Slack
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Understaffed => "understaffed",
            Self::Perfect => "perfect",
            Self::Slack => "slack",
        }
    }

    /// Returns whether the day's requirement is satisfied.
    #[must_use]
    pub const fn is_met(&self) -> bool {
        matches!(self, Self::Perfect | Self::Slack)
    }

    /// Returns the human-readable status shown next to a day.
    ///
    /// Slack days carry the surplus, e.g. `+2 Slack`.
    #[must_use]
    pub fn display_label(&self, difference: i64) -> String {
        match self {
            Self::Understaffed => String::from("Understaffed"),
            Self::Perfect => String::from("Perfect"),
            Self::Slack => format!("+{difference} Slack"),
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
