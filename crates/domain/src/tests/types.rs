// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Day, DomainError, ShiftPattern};
use std::str::FromStr;

#[test]
fn test_days_are_ordered_by_week_position() {
    assert!(Day::Monday < Day::Tuesday);
    assert!(Day::Saturday < Day::Sunday);
    for (position, day) in Day::ALL.iter().enumerate() {
        assert_eq!(day.index(), position);
    }
}

#[test]
fn test_day_next_and_previous_wrap() {
    assert_eq!(Day::Sunday.next(), Day::Monday);
    assert_eq!(Day::Monday.previous(), Day::Sunday);
    assert_eq!(Day::Wednesday.next(), Day::Thursday);
    for day in Day::ALL {
        assert_eq!(day.next().previous(), day);
    }
}

#[test]
fn test_catalog_has_seven_distinct_rotations() {
    let first_days: Vec<Day> = ShiftPattern::ALL
        .iter()
        .map(|pattern| pattern.first_day_off())
        .collect();
    for day in Day::ALL {
        assert_eq!(first_days.iter().filter(|d| **d == day).count(), 1);
    }
}

#[test]
fn test_days_off_are_consecutive() {
    for pattern in ShiftPattern::ALL {
        let [first, second] = pattern.days_off();
        assert_eq!(first.next(), second);
    }
}

#[test]
fn test_sat_sun_off_days() {
    assert_eq!(
        ShiftPattern::SatSunOff.days_off(),
        [Day::Saturday, Day::Sunday]
    );
    assert_eq!(
        ShiftPattern::FriSatOff.days_off(),
        [Day::Friday, Day::Saturday]
    );
    assert_eq!(ShiftPattern::SunMonOff.days_off(), [Day::Sunday, Day::Monday]);
}

#[test]
fn test_every_pattern_works_exactly_five_days() {
    for pattern in ShiftPattern::ALL {
        let working: Vec<Day> = pattern.working_days().collect();
        assert_eq!(working.len(), 5);
        for day in pattern.days_off() {
            assert!(!working.contains(&day));
        }
    }
}

#[test]
fn test_working_days_are_in_week_order() {
    let working: Vec<Day> = ShiftPattern::TueWedOff.working_days().collect();
    assert_eq!(
        working,
        vec![
            Day::Monday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
            Day::Sunday
        ]
    );
}

#[test]
fn test_labels_describe_days_off_and_working_span() {
    for pattern in ShiftPattern::ALL {
        let [first, second] = pattern.days_off();
        let expected: String = format!(
            "{}-{} Off (Work {}-{})",
            first.short_name(),
            second.short_name(),
            second.next().short_name(),
            first.previous().short_name()
        );
        assert_eq!(pattern.label(), expected);
    }
}

#[test]
fn test_parse_round_trips_every_label() {
    for pattern in ShiftPattern::ALL {
        assert_eq!(ShiftPattern::parse(pattern.label()).unwrap(), pattern);
    }
}

#[test]
fn test_parse_rejects_unknown_label() {
    let result: Result<ShiftPattern, DomainError> = ShiftPattern::parse("Sat-Mon Off");
    assert_eq!(
        result,
        Err(DomainError::InvalidPattern(String::from("Sat-Mon Off")))
    );
}

#[test]
fn test_parse_is_exact() {
    assert!(ShiftPattern::parse("sat-sun off (work mon-fri)").is_err());
    assert!(ShiftPattern::parse("").is_err());
    assert!(ShiftPattern::from_str("Sat-Sun Off (Work Mon-Fri)").is_ok());
}
