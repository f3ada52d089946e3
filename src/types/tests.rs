use super::Usd;

#[test]
fn test_usd_formats_amounts_with_cents_and_thousands_separators() {
    let test_cases = vec![
        (0.0, "$0.00"),
        (5.0, "$5.00"),
        (100.5, "$100.50"),
        (999.999, "$1,000.00"),
        (1200.0, "$1,200.00"),
        (1234567.891, "$1,234,567.89"),
        (-5.0, "-$5.00"),
        (-1234.5, "-$1,234.50"),
    ];

    for (amount, expected_output) in test_cases {
        assert_eq!(Usd(amount).to_string(), expected_output);
    }
}

#[test]
fn test_usd_rounds_half_cents_away_from_zero() {
    assert_eq!(Usd(0.125).to_string(), "$0.13");
    assert_eq!(Usd(-0.125).to_string(), "-$0.13");
}

#[test]
fn test_usd_does_not_render_negative_zero() {
    assert_eq!(Usd(-0.001).to_string(), "$0.00");
}
