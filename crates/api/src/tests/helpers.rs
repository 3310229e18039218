// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use roster_sim::Roster;
use roster_sim_domain::ShiftPattern;

use crate::{HireRequest, hire};

pub fn create_hire_request(pattern: ShiftPattern) -> HireRequest {
    HireRequest {
        pattern: pattern.label().to_string(),
    }
}

/// Hires `count` employees on `pattern` through the API.
pub fn hire_many(roster: &mut Roster, pattern: ShiftPattern, count: usize) {
    let request: HireRequest = create_hire_request(pattern);
    for _ in 0..count {
        hire(roster, &request).unwrap();
    }
}
