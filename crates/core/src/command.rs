// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_sim_domain::ShiftPattern;

/// A command represents user intent as data only.
///
/// Commands are the only way to request roster changes through `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hire one employee on the given pattern.
    Hire {
        /// The new employee's shift pattern.
        pattern: ShiftPattern,
    },
    /// Remove the most recently hired employee.
    FireLast,
    /// Remove every employee.
    Reset,
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hire { .. } => "Hire",
            Self::FireLast => "FireLast",
            Self::Reset => "Reset",
        }
    }
}
