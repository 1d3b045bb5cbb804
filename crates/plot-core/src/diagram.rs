// File: crates/plot-core/src/diagram.rs
// Summary: Network-architecture diagram: pure node/edge layout plus Skia rendering.

use anyhow::Result;
use skia_safe as skia;

use crate::chart::{encode_png, new_surface, write_png, RenderOptions};
use crate::geometry::RectF;
use crate::text::TextShaper;

/// A node circle, in the same mathematical coordinates as the layout bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// A straight edge between two node centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// Drawing primitives for one architecture, fully determined by the input.
#[derive(Clone, Debug, Default)]
pub struct NetworkLayout {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Lay out a layered network inside `bounds` (y-up coordinates).
///
/// One column per layer, evenly spaced horizontally; nodes within a layer
/// stacked around the vertical center with spacing derived from the widest
/// layer, so circles never leave the box. Every node connects to every node
/// of the next layer. Quadratic in layer width, which is fine at diagram
/// scale. Degenerate inputs (fewer than two layers, an empty layer) yield an
/// empty layout; callers validate upstream.
pub fn layout_network(layer_sizes: &[u32], bounds: RectF) -> NetworkLayout {
    if layer_sizes.len() < 2 || layer_sizes.iter().any(|&s| s == 0) {
        return NetworkLayout::default();
    }

    let widest = *layer_sizes.iter().max().unwrap() as f64;
    let v_spacing = bounds.height() / widest;
    let h_spacing = bounds.width() / (layer_sizes.len() - 1) as f64;
    let v_center = (bounds.top + bounds.bottom) * 0.5;
    let radius = v_spacing / 4.0;

    let mut nodes = Vec::with_capacity(layer_sizes.iter().map(|&s| s as usize).sum());
    let mut columns: Vec<Vec<(f64, f64)>> = Vec::with_capacity(layer_sizes.len());

    for (n, &size) in layer_sizes.iter().enumerate() {
        let x = bounds.left + n as f64 * h_spacing;
        let layer_top = v_spacing * (size as f64 - 1.0) * 0.5 + v_center;
        let mut column = Vec::with_capacity(size as usize);
        for m in 0..size {
            let y = layer_top - m as f64 * v_spacing;
            nodes.push(Node { x, y, radius });
            column.push((x, y));
        }
        columns.push(column);
    }

    let mut edges = Vec::new();
    for pair in columns.windows(2) {
        for &from in &pair[0] {
            for &to in &pair[1] {
                edges.push(Edge { from, to });
            }
        }
    }

    NetworkLayout { nodes, edges }
}

/// A renderable architecture diagram: title plus node counts per layer.
pub struct NetworkDiagram {
    pub title: String,
    pub layer_sizes: Vec<u32>,
}

impl NetworkDiagram {
    pub fn new(title: impl Into<String>, layer_sizes: Vec<u32>) -> Self {
        Self { title: title.into(), layer_sizes }
    }

    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        write_png(output_png_path, &data)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = new_surface(opts)?;
        self.draw(surface.canvas(), opts);
        encode_png(&mut surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let layout = layout_network(&self.layer_sizes, RectF::unit());

        // Map the unit layout box onto the inset plot area, flipping y.
        let (l, t, r, b) = opts.plot_area();
        let (l, t, r, b) = (l as f32, t as f32, r as f32, b as f32);
        let px = |x: f64| -> f32 { l + x as f32 * (r - l) };
        let py = |y: f64| -> f32 { b - y as f32 * (b - t) };
        // Radius comes out of the unit box; scale by the shorter pixel axis.
        let pr = |radius: f64| -> f32 { radius as f32 * (r - l).min(b - t) };

        let mut edge_paint = skia::Paint::default();
        edge_paint.set_anti_alias(true);
        edge_paint.set_style(skia::paint::Style::Stroke);
        edge_paint.set_stroke_width(1.0);
        edge_paint.set_color(theme.edge);

        for e in &layout.edges {
            canvas.draw_line(
                (px(e.from.0), py(e.from.1)),
                (px(e.to.0), py(e.to.1)),
                &edge_paint,
            );
        }

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.node_fill);
        let mut ring = skia::Paint::default();
        ring.set_anti_alias(true);
        ring.set_style(skia::paint::Style::Stroke);
        ring.set_stroke_width(1.5);
        ring.set_color(theme.node_stroke);

        for node in &layout.nodes {
            let center = (px(node.x), py(node.y));
            let radius = pr(node.radius);
            canvas.draw_circle(center, radius, &fill);
            canvas.draw_circle(center, radius, &ring);
        }

        if opts.draw_labels && !self.title.is_empty() {
            let shaper = TextShaper::new();
            shaper.draw_centered(
                canvas,
                &self.title,
                opts.width as f32 * 0.5,
                t - 20.0,
                22.0,
                theme.title,
            );
        }
    }
}
