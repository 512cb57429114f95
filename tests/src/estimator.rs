#![cfg(test)]
use drills_common::config::{Config, PRICING};
use drills_common::estimate::Estimate;
use drills_common::estimator::{self, EstimatorError, RoomKind};

fn session(input: &str) -> (Result<Estimate, EstimatorError>, String) {
    let cfg: Config = Config::default();
    let mut out: Vec<u8> = Vec::new();
    let result = estimator::run(input.as_bytes(), &mut out, &cfg);
    (result, String::from_utf8(out).expect("output is utf-8"))
}

/// Two small rooms and one large room, the worked example from the quote sheet.
#[test]
fn estimate_two_small_one_large() {
    let (result, text) = session("2\n1\n");

    let estimate: Estimate = result.expect("estimate should succeed");
    assert_eq!(estimate.subtotal, 85.0);
    assert!((estimate.tax - 5.1).abs() < 1e-9);
    assert!((estimate.total - 90.1).abs() < 1e-9);

    assert!(text.contains("Cost: $85\n"), "subtotal missing: {text}");
    assert!(text.contains("Tax: $5.1\n"), "tax missing: {text}");
    assert!(text.contains("Total cost: 90.1\n"), "total missing: {text}");
}

#[test]
fn estimate_zero_rooms_keeps_report_shape() {
    let (result, text) = session("0 0\n");

    let estimate: Estimate = result.expect("estimate should succeed");
    assert_eq!(estimate.total, 0.0);

    let receipt: Vec<&str> = text
        .split_once("cleaned? \n")
        .map(|(_, receipt)| receipt.lines().collect())
        .expect("receipt follows the prompts");

    assert_eq!(
        receipt,
        vec![
            "Estimate for carpet cleaning service",
            "Number of small rooms: 0",
            "Number of large rooms: 0",
            "Price per small room: $25",
            "Cost: $0",
            "Tax: $0",
            "===============================================",
            "Total cost: 0",
            "This cost is valid for 30 days",
        ]
    );
}

#[test]
fn validity_line_is_fixed() {
    for input in ["0 0", "2 1", "7\n13", "1000000 1000000"] {
        let (result, text) = session(input);
        assert!(result.is_ok(), "input {input:?} failed: {:?}", result.err());
        assert_eq!(
            text.lines().last(),
            Some("This cost is valid for 30 days"),
            "input {input:?}"
        );
    }
    assert_eq!(PRICING.quote_validity_days, 30);
}

#[test]
fn large_counts_use_general_notation() {
    let (result, text) = session("1000000 0\n");

    assert!(result.is_ok());
    assert!(text.contains("Cost: $2.5e+07\n"), "{text}");
    assert!(text.contains("Total cost: 2.65e+07\n"), "{text}");
}

#[test]
fn malformed_input_fails_fast() {
    let (result, text) = session("2\nlots\n");

    match result {
        Err(EstimatorError::InvalidCount { field, token }) => {
            assert_eq!(field, RoomKind::Large);
            assert_eq!(token, "lots");
        }
        other => panic!("expected InvalidCount, got {other:?}"),
    }
    assert!(!text.contains("Total cost"));
}

#[test]
fn empty_input_reports_missing_small_count() {
    let (result, text) = session("");

    assert!(matches!(
        result,
        Err(EstimatorError::MissingCount {
            field: RoomKind::Small
        })
    ));
    assert!(text.ends_with("How many small rooms would you like cleaned? "));
}
