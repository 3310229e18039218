// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Roster, TransitionOutcome, TransitionResult};
use roster_sim_domain::ShiftPattern;

/// Applies a command to a roster, producing the new roster and an outcome.
///
/// The input roster is never modified; callers replace their roster with
/// `TransitionResult::new_roster` on success.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns `CoreError::EmptyRoster` if `FireLast` is applied to an empty roster.
pub fn apply(roster: &Roster, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Hire { pattern } => {
            let mut new_roster: Roster = roster.clone();
            let employee_id: usize = new_roster.hire(pattern);

            Ok(TransitionResult {
                new_roster,
                outcome: TransitionOutcome::Hired {
                    employee_id,
                    pattern,
                },
            })
        }
        Command::FireLast => {
            let employee_id: usize = roster.size();
            let mut new_roster: Roster = roster.clone();
            let pattern: ShiftPattern = new_roster.fire_last()?;

            Ok(TransitionResult {
                new_roster,
                outcome: TransitionOutcome::Fired {
                    employee_id,
                    pattern,
                },
            })
        }
        Command::Reset => Ok(TransitionResult {
            new_roster: Roster::new(),
            outcome: TransitionOutcome::Reset {
                removed: roster.size(),
            },
        }),
    }
}
