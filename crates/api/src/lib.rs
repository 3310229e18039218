// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::cargo_common_metadata)]

mod error;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    EMPTY_ROSTER_MESSAGE, TARGET_MET_MESSAGE, TARGET_NOT_MET_MESSAGE, fire_last, get_catalog,
    get_report, hire, list_roster, reset,
};
pub use request_response::{
    CatalogResponse, CreateSessionResponse, DayReportInfo, FireLastResponse, HireRequest,
    HireResponse, PatternInfo, ReportResponse, RequirementInfo, ResetResponse, RosterEntryInfo,
    RosterResponse,
};
pub use session::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TIMEOUT, SessionRegistry};
