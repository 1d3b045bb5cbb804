// File: crates/plot-core/src/series.rs
// Summary: Series model for line, scatter, and horizontal-bar data.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
    /// Horizontal bars: each point is (value, slot); the bar spans from
    /// x = 0 to x = value at vertical position y = slot.
    Bars,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Legend entry; empty string means the series is not listed.
    pub name: String,
    pub style: LineStyle,
    /// Index into the theme's series palette.
    pub palette: usize,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, data_xy: data, name: String::new(), style: LineStyle::Solid, palette: 0 }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dashed(mut self) -> Self {
        self.style = LineStyle::Dashed;
        self
    }

    pub fn palette(mut self, index: usize) -> Self {
        self.palette = index;
        self
    }
}

/// Sort (name, score) entries ascending by score and assign each a discrete
/// vertical slot at half-integer offsets (entry `i` sits at `i + 0.5`).
/// Returns the bar points (value, slot) alongside the (slot, label) ticks.
/// Ties sort by name so the result is deterministic for any input order.
pub fn bars_from_scores(mut entries: Vec<(String, f64)>) -> (Vec<(f64, f64)>, Vec<(f64, String)>) {
    entries.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    let mut bars = Vec::with_capacity(entries.len());
    let mut ticks = Vec::with_capacity(entries.len());
    for (i, (name, score)) in entries.into_iter().enumerate() {
        let slot = i as f64 + 0.5;
        bars.push((score, slot));
        ticks.push((slot, name));
    }
    (bars, ticks)
}
