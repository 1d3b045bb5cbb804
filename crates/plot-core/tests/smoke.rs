// File: crates/plot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use plot_core::{Chart, RenderOptions, Axis, Series, SeriesType, Theme};

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new();
    chart.title = "Smoke".to_string();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn tiny_figure_keeps_plot_rect_ordered() {
    // A figure smaller than the default insets must shrink them instead of
    // producing an inverted plot rectangle.
    let opts = RenderOptions::with_size_inches(0.5, 0.5, Theme::light());
    let (l, t, r, b) = opts.plot_area();
    assert!(l < r, "plot rect inverted horizontally: {l}..{r}");
    assert!(t < b, "plot rect inverted vertically: {t}..{b}");
    assert!(l >= 0 && t >= 0 && r <= opts.width && b <= opts.height);

    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (1.0, 1.0)]));
    chart.autoscale_axes(0.02);
    let bytes = chart.render_to_png_bytes(&opts).expect("tiny figure renders");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn render_creates_missing_parent_dirs() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(0.0, 1.0), (1.0, 0.0)]));
    chart.autoscale_axes(0.02);

    let out = std::path::PathBuf::from("target/test_out/nested/deeper/out.png");
    let _ = std::fs::remove_dir_all("target/test_out/nested");

    chart
        .render_to_png(&RenderOptions::default(), &out)
        .expect("render should create parent dirs");
    assert!(out.exists());
}
