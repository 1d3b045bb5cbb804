// File: crates/plot-core/tests/bars.rs
// Purpose: Validate importance bar slotting: ascending order, half-integer slots, degenerate inputs.

use plot_core::{bars_from_scores, Axis, Chart, RenderOptions, Series, SeriesType};

#[test]
fn scores_sort_ascending_along_slots() {
    let entries = vec![
        ("b".to_string(), 0.9),
        ("a".to_string(), 0.2),
        ("c".to_string(), 0.5),
    ];
    let (bars, ticks) = bars_from_scores(entries);

    let labels: Vec<&str> = ticks.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(labels, vec!["a", "c", "b"]);

    for (i, &(score, slot)) in bars.iter().enumerate() {
        assert_eq!(slot, i as f64 + 0.5, "slot offsets are half-integers");
        if i > 0 {
            assert!(score >= bars[i - 1].0, "scores must be non-decreasing");
        }
    }
}

#[test]
fn single_entry_gets_first_slot() {
    let (bars, ticks) = bars_from_scores(vec![("only".to_string(), 1.25)]);
    assert_eq!(bars, vec![(1.25, 0.5)]);
    assert_eq!(ticks[0].1, "only");
}

#[test]
fn empty_mapping_yields_empty_bars() {
    let (bars, ticks) = bars_from_scores(Vec::new());
    assert!(bars.is_empty());
    assert!(ticks.is_empty());
}

#[test]
fn tied_scores_order_by_name() {
    let (_, ticks) = bars_from_scores(vec![
        ("z".to_string(), 0.5),
        ("a".to_string(), 0.5),
    ]);
    let labels: Vec<&str> = ticks.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(labels, vec!["a", "z"]);
}

#[test]
fn empty_bar_chart_still_renders() {
    // Degenerate case: an empty mapping must produce a labeled chart, not fail.
    let (bars, ticks) = bars_from_scores(Vec::new());
    let mut chart = Chart::new();
    chart.title = "Feature Importance".to_string();
    chart.x_axis = Axis::new("Importance", 0.0, 1.0);
    chart.y_axis = Axis::new("Feature", 0.0, 1.0);
    chart.y_tick_labels = Some(ticks);
    chart.add_series(Series::with_data(SeriesType::Bars, bars));

    let bytes = chart
        .render_to_png_bytes(&RenderOptions::default())
        .expect("empty bar chart renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
