// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The shift pattern label is not in the catalog.
    #[error("Invalid shift pattern: '{0}' is not in the pattern catalog")]
    InvalidPattern(String),
}
