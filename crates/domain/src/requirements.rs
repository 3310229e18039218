// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Day;

/// Minimum daily headcount, keyed by day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    /// Required headcount, indexed by `Day::index`.
    by_day: [u32; 7],
}

/// The facility's staffing requirements.
pub const FACILITY_REQUIREMENTS: Requirements = Requirements::new([6, 4, 8, 9, 10, 3, 2]);

impl Requirements {
    /// Creates a requirement table from headcounts ordered Monday to Sunday.
    #[must_use]
    pub const fn new(by_day: [u32; 7]) -> Self {
        Self { by_day }
    }

    /// Returns the required headcount for a day.
    #[must_use]
    pub const fn required(&self, day: Day) -> u32 {
        self.by_day[day.index()]
    }

    /// Iterates `(day, required)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, u32)> + '_ {
        Day::ALL.into_iter().map(move |day| (day, self.required(day)))
    }
}

impl Default for Requirements {
    fn default() -> Self {
        FACILITY_REQUIREMENTS
    }
}
