// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CoverageStatus;

#[test]
fn test_negative_difference_is_understaffed() {
    assert_eq!(CoverageStatus::classify(-1), CoverageStatus::Understaffed);
    assert_eq!(CoverageStatus::classify(-10), CoverageStatus::Understaffed);
}

#[test]
fn test_zero_difference_is_perfect() {
    assert_eq!(CoverageStatus::classify(0), CoverageStatus::Perfect);
}

#[test]
fn test_positive_difference_is_slack() {
    assert_eq!(CoverageStatus::classify(1), CoverageStatus::Slack);
    assert_eq!(CoverageStatus::classify(7), CoverageStatus::Slack);
}

#[test]
fn test_only_understaffed_is_unmet() {
    assert!(!CoverageStatus::Understaffed.is_met());
    assert!(CoverageStatus::Perfect.is_met());
    assert!(CoverageStatus::Slack.is_met());
}

#[test]
fn test_display_labels() {
    assert_eq!(CoverageStatus::Understaffed.display_label(-3), "Understaffed");
    assert_eq!(CoverageStatus::Perfect.display_label(0), "Perfect");
    assert_eq!(CoverageStatus::Slack.display_label(2), "+2 Slack");
}

#[test]
fn test_status_display_matches_as_str() {
    assert_eq!(CoverageStatus::Understaffed.as_str(), "understaffed");
    assert_eq!(format!("{}", CoverageStatus::Slack), "slack");
}

#[test]
fn test_status_serializes_as_snake_case() {
    for status in [
        CoverageStatus::Understaffed,
        CoverageStatus::Perfect,
        CoverageStatus::Slack,
    ] {
        let json: String = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
    assert_eq!(
        serde_json::to_string(&CoverageStatus::Understaffed).unwrap(),
        "\"understaffed\""
    );
}

#[test]
fn test_status_deserializes_from_snake_case() {
    let status: CoverageStatus = serde_json::from_str("\"perfect\"").unwrap();
    assert_eq!(status, CoverageStatus::Perfect);
    assert!(serde_json::from_str::<CoverageStatus>("\"Perfect\"").is_err());
}
