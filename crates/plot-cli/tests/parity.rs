// File: crates/plot-cli/tests/parity.rs
// Purpose: Validate the perfect-prediction reference-line endpoints.

use plot_cli::render::parity_range;

#[test]
fn endpoints_span_both_columns() {
    let actual = vec![1.1, 2.0, 2.9];
    let predicted = vec![1.0, 2.0, 3.0];
    let (lo, hi) = parity_range(&actual, &predicted);
    assert_eq!(lo, 1.0, "minimum over actual and predicted");
    assert_eq!(hi, 3.0, "maximum over actual and predicted");
}

#[test]
fn endpoints_track_the_wider_column() {
    let (lo, hi) = parity_range(&[5.0, 6.0], &[-2.0, 4.0]);
    assert_eq!((lo, hi), (-2.0, 6.0));
}

#[test]
fn empty_input_falls_back_to_unit_range() {
    assert_eq!(parity_range(&[], &[]), (0.0, 1.0));
}
