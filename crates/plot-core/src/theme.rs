// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart and diagram rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    /// Per-series stroke/fill colors, picked by `Series::palette`.
    pub series: [skia::Color; 4],
    /// Dashed reference lines (perfect-prediction diagonal, zero line).
    pub reference: skia::Color,
    pub bar_fill: skia::Color,
    pub node_fill: skia::Color,
    pub node_stroke: skia::Color,
    pub edge: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 215, 215, 220),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 20, 20, 30),
            series: [
                skia::Color::from_argb(255, 31, 119, 180),  // blue
                skia::Color::from_argb(255, 214, 39, 40),   // red
                skia::Color::from_argb(255, 44, 160, 44),   // green
                skia::Color::from_argb(255, 255, 127, 14),  // orange
            ],
            reference: skia::Color::from_argb(255, 120, 120, 130),
            bar_fill: skia::Color::from_argb(255, 31, 119, 180),
            node_fill: skia::Color::from_argb(255, 100, 160, 230),
            node_stroke: skia::Color::from_argb(255, 40, 70, 120),
            edge: skia::Color::from_argb(90, 60, 60, 70),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 45, 45, 50),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 225, 225, 235),
            title: skia::Color::from_argb(255, 240, 240, 250),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 235, 90, 90),
                skia::Color::from_argb(255, 60, 200, 130),
                skia::Color::from_argb(255, 250, 170, 50),
            ],
            reference: skia::Color::from_argb(255, 150, 150, 160),
            bar_fill: skia::Color::from_argb(255, 64, 160, 255),
            node_fill: skia::Color::from_argb(255, 70, 130, 200),
            node_stroke: skia::Color::from_argb(255, 170, 200, 240),
            edge: skia::Color::from_argb(90, 200, 200, 210),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
