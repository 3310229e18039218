// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use roster_sim_domain::{Day, ShiftPattern};

/// Builds a roster with `count` employees on the same pattern.
pub fn create_uniform_roster(pattern: ShiftPattern, count: usize) -> Roster {
    std::iter::repeat_n(pattern, count).collect()
}

/// A roster with one employee on every catalog pattern, in catalog order.
pub fn create_one_of_each_roster() -> Roster {
    ShiftPattern::ALL.into_iter().collect()
}

/// Counts working employees for a day by visiting every employee.
pub fn naive_actual(roster: &Roster, day: Day) -> usize {
    roster
        .patterns()
        .iter()
        .filter(|pattern| !pattern.days_off().contains(&day))
        .count()
}
