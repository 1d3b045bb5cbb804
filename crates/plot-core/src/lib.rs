// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod text;
pub mod diagram;

pub use chart::{render_notice, Chart, RenderOptions};
pub use series::{bars_from_scores, LineStyle, Series, SeriesType};
pub use axis::Axis;
pub use diagram::{layout_network, NetworkDiagram, NetworkLayout};
pub use geometry::RectF;
pub use theme::Theme;
pub use text::TextShaper;
