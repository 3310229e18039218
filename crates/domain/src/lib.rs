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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::cargo_common_metadata)]

mod coverage_status;
mod error;
mod requirements;
mod types;

#[cfg(test)]
mod tests;

pub use coverage_status::CoverageStatus;
pub use error::DomainError;
pub use requirements::{FACILITY_REQUIREMENTS, Requirements};
pub use types::{Day, ShiftPattern};
