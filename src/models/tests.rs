use super::{Status, StatusParseError};

use std::str::FromStr;

use anyhow::Result;

#[test]
fn test_raw_status_synonyms_fold_into_canonical_values() {
    let test_cases = vec![
        (Some("completed"), Status::Completed),
        (Some("SUCCESS"), Status::Completed),
        (Some("Pending"), Status::Pending),
        (Some(" processing "), Status::Pending),
        (Some("in_progress"), Status::Pending),
        (Some("failed"), Status::Failed),
        (Some("Error"), Status::Failed),
        (Some("DECLINED"), Status::Failed),
    ];

    for (raw, expected) in test_cases {
        assert_eq!(Status::from_raw(raw), expected, "raw status {raw:?}");
    }
}

#[test]
fn test_unrecognised_or_absent_status_defaults_to_completed() {
    assert_eq!(Status::from_raw(None), Status::Completed);
    assert_eq!(Status::from_raw(Some("")), Status::Completed);
    assert_eq!(Status::from_raw(Some("on hold")), Status::Completed);
}

#[test]
fn test_canonical_status_names_parse_case_insensitively() -> Result<()> {
    assert_eq!(Status::from_str("pending")?, Status::Pending);
    assert_eq!(Status::from_str("FAILED")?, Status::Failed);
    assert_eq!(Status::from_str(" Completed ")?, Status::Completed);

    Ok(())
}

#[test]
fn test_status_filter_parsing_rejects_raw_synonyms() {
    assert_eq!(Status::from_str("success"), Err(StatusParseError::Unknown("success".to_string())));
    assert!(Status::from_str("").is_err());
}

#[test]
fn test_status_display_order_is_completed_pending_failed() {
    let names: Vec<String> = Status::ALL.iter().map(|status| status.to_string()).collect();

    assert_eq!(names, vec!["Completed", "Pending", "Failed"]);
}
