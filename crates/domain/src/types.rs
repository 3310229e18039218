// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A day of the scheduling week.
///
/// Days are ordered by their position in the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Every day of the week, in week order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the zero-based position of this day in the week.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the day that follows this one, wrapping Sunday to Monday.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 7]
    }

    /// Returns the day that precedes this one, wrapping Monday to Sunday.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + 6) % 7]
    }

    /// Returns the full English name of the day.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the three-letter abbreviation used in pattern labels.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weekly shift pattern.
///
/// Each pattern grants exactly two consecutive days off; the remaining
/// five days of the week are worked. The seven variants are the seven
/// rotations of the two-day window around the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftPattern {
    /// Off Saturday and Sunday.
    SatSunOff,
    /// Off Sunday and Monday.
    SunMonOff,
    /// Off Monday and Tuesday.
    MonTueOff,
    /// Off Tuesday and Wednesday.
    TueWedOff,
    /// Off Wednesday and Thursday.
    WedThuOff,
    /// Off Thursday and Friday.
    ThuFriOff,
    /// Off Friday and Saturday.
    FriSatOff,
}

impl ShiftPattern {
    /// The full pattern catalog, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::SatSunOff,
        Self::SunMonOff,
        Self::MonTueOff,
        Self::TueWedOff,
        Self::WedThuOff,
        Self::ThuFriOff,
        Self::FriSatOff,
    ];

    /// Returns the position of this pattern in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the catalog label for this pattern.
    ///
    /// Labels are the only accepted external names for patterns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SatSunOff => "Sat-Sun Off (Work Mon-Fri)",
            Self::SunMonOff => "Sun-Mon Off (Work Tue-Sat)",
            Self::MonTueOff => "Mon-Tue Off (Work Wed-Sun)",
            Self::TueWedOff => "Tue-Wed Off (Work Thu-Mon)",
            Self::WedThuOff => "Wed-Thu Off (Work Fri-Tue)",
            Self::ThuFriOff => "Thu-Fri Off (Work Sat-Wed)",
            Self::FriSatOff => "Fri-Sat Off (Work Sun-Thu)",
        }
    }

    /// Parses a catalog label into a pattern.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPattern` if the label is not one of the
    /// seven catalog labels.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.label() == label)
            .ok_or_else(|| DomainError::InvalidPattern(label.to_string()))
    }

    /// Returns the first of the two days off.
    #[must_use]
    pub const fn first_day_off(self) -> Day {
        match self {
            Self::SatSunOff => Day::Saturday,
            Self::SunMonOff => Day::Sunday,
            Self::MonTueOff => Day::Monday,
            Self::TueWedOff => Day::Tuesday,
            Self::WedThuOff => Day::Wednesday,
            Self::ThuFriOff => Day::Thursday,
            Self::FriSatOff => Day::Friday,
        }
    }

    /// Returns both days off, in week-rotation order.
    #[must_use]
    pub const fn days_off(self) -> [Day; 2] {
        let first: Day = self.first_day_off();
        [first, first.next()]
    }

    /// Returns whether an employee on this pattern works the given day.
    #[must_use]
    pub fn works_on(self, day: Day) -> bool {
        !self.days_off().contains(&day)
    }

    /// Returns the five working days of this pattern, in week order.
    pub fn working_days(self) -> impl Iterator<Item = Day> + Clone {
        Day::ALL.into_iter().filter(move |day| self.works_on(*day))
    }
}

impl FromStr for ShiftPattern {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ShiftPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
