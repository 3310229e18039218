// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roster_sim::CoreError;
use roster_sim_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The request asked to remove an employee from an empty roster.
    ///
    /// Nothing was changed; this is informational rather than a failure of
    /// the system.
    #[error("{message}")]
    NothingToRemove {
        /// A human-readable description for the user.
        message: String,
    },
    /// The session token does not name a live session.
    #[error("Session not found")]
    SessionNotFound,
    /// No further sessions can be opened.
    #[error("Session limit reached: at most {limit} sessions may be open")]
    SessionLimitReached {
        /// The configured maximum number of sessions.
        limit: usize,
    },
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPattern(label) => ApiError::InvalidInput {
            field: String::from("pattern"),
            message: format!("'{label}' is not a known shift pattern"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::EmptyRoster => ApiError::NothingToRemove {
            message: String::from("No employees to remove."),
        },
    }
}
