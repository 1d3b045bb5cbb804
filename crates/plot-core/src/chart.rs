// File: crates/plot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::{format_tick, linspace};
use crate::series::{LineStyle, Series, SeriesType};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DPI, HEIGHT, WIDTH};
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable for pixel-exact tests; text shaping varies across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Build options from a figure size given in plotting inches at the
    /// fixed raster density.
    pub fn with_size_inches(width_in: f64, height_in: f64, theme: Theme) -> Self {
        Self {
            width: (width_in * DPI).round().max(1.0) as i32,
            height: (height_in * DPI).round().max(1.0) as i32,
            insets: Insets::default(),
            theme,
            draw_labels: true,
        }
    }

    /// Plot rectangle (left, top, right, bottom) in pixels. Insets shrink
    /// proportionally when the figure is too small to hold them, so the
    /// rectangle never inverts.
    pub fn plot_area(&self) -> (i32, i32, i32, i32) {
        let (l, r) = fit_insets(self.insets.left as i32, self.insets.right as i32, self.width);
        let (t, b) = fit_insets(self.insets.top as i32, self.insets.bottom as i32, self.height);
        (l, t, self.width - r, self.height - b)
    }
}

fn fit_insets(near: i32, far: i32, extent: i32) -> (i32, i32) {
    let avail = (extent - 1).max(0);
    let total = near + far;
    if total <= avail {
        return (near, far);
    }
    let scale = avail as f64 / total as f64;
    ((near as f64 * scale) as i32, (far as f64 * scale) as i32)
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Categorical y ticks (position, label); replaces numeric y ticks when set.
    pub y_tick_labels: Option<Vec<(f64, String)>>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y_tick_labels: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data extent of all series. `margin` is a fraction
    /// of the y span added above and below.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
            // Bars grow out of the x = 0 baseline and occupy slot +/- 0.5.
            if s.series_type == SeriesType::Bars && !s.data_xy.is_empty() {
                x_min = x_min.min(0.0);
                x_max = x_max.max(0.0);
                y_min = y_min.min(0.0);
                y_max = y_max.max(s.data_xy.len() as f64);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            self.x_axis.min = 0.0;
            self.x_axis.max = 1.0;
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * margin;
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(opts)?;
        write_png(output_png_path, &data)
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = new_surface(opts)?;
        self.draw(surface.canvas(), opts);
        encode_png(&mut surface)
    }

    /// Render into a raw RGBA8 buffer; returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = new_surface(opts)?;
        self.draw(surface.canvas(), opts);
        read_rgba8(&mut surface, opts)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let (plot_left, plot_top, plot_right, plot_bottom) = opts.plot_area();

        let shaper = TextShaper::new();

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, theme, self.y_tick_labels.is_none());
        draw_axes(canvas, plot_left, plot_top, plot_right, plot_bottom, theme);
        if opts.draw_labels {
            self.draw_labels(canvas, plot_left, plot_top, plot_right, plot_bottom, opts, &shaper);
        }

        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, theme, s,
                ),
                SeriesType::Scatter => draw_scatter_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, theme, s,
                ),
                SeriesType::Bars => draw_bar_series(
                    canvas,
                    plot_left, plot_top, plot_right, plot_bottom,
                    &self.x_axis, &self.y_axis, theme, s,
                ),
            }
        }

        if opts.draw_labels {
            draw_legend(canvas, plot_top, plot_right, theme, &self.series, &shaper);
        }
    }

    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        l: i32,
        t: i32,
        r: i32,
        b: i32,
        opts: &RenderOptions,
        shaper: &TextShaper,
    ) {
        let theme = &opts.theme;

        // Title, centered over the plot area
        if !self.title.is_empty() {
            shaper.draw_centered(
                canvas,
                &self.title,
                (l + r) as f32 * 0.5,
                t as f32 - 20.0,
                22.0,
                theme.title,
            );
        }

        // X ticks
        let x_step = self.x_axis.span() / 5.0;
        for x in linspace(self.x_axis.min, self.x_axis.max, 6) {
            let px = scale_x(x, &self.x_axis, l, r);
            let label = format_tick(x, x_step);
            let w = shaper.measure_width(&label, 12.0, true);
            shaper.draw_left(canvas, &label, px - w * 0.5, b as f32 + 20.0, 12.0, theme.axis_label, true);
        }

        // Y ticks: categorical labels when present, numeric otherwise
        match &self.y_tick_labels {
            Some(ticks) => {
                for (pos, label) in ticks {
                    let py = scale_y(*pos, &self.y_axis, t, b);
                    shaper.draw_right(canvas, label, l as f32 - 8.0, py + 5.0, 12.0, theme.axis_label, false);
                }
            }
            None => {
                let y_step = self.y_axis.span() / 4.0;
                for y in linspace(self.y_axis.min, self.y_axis.max, 5) {
                    let py = scale_y(y, &self.y_axis, t, b);
                    let label = format_tick(y, y_step);
                    shaper.draw_right(canvas, &label, l as f32 - 8.0, py + 5.0, 12.0, theme.axis_label, true);
                }
            }
        }

        // Axis titles
        if !self.x_axis.label.is_empty() {
            shaper.draw_centered(canvas, &self.x_axis.label, (l + r) as f32 * 0.5, b as f32 + 48.0, 16.0, theme.axis_label);
        }
        if !self.y_axis.label.is_empty() {
            shaper.draw_left(canvas, &self.y_axis.label, 10.0, t as f32 - 12.0, 16.0, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn new_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn read_rgba8(
    surface: &mut skia::Surface,
    opts: &RenderOptions,
) -> Result<(Vec<u8>, i32, i32, usize)> {
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Premul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back RGBA pixels");
    }
    Ok((pixels, opts.width, opts.height, stride))
}

/// Create the parent directory if needed and write the encoded image.
pub(crate) fn write_png(path: impl AsRef<std::path::Path>, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, data)?;
    Ok(())
}

#[inline]
fn scale_x(x: f64, axis: &Axis, l: i32, r: i32) -> f32 {
    l as f32 + ((x - axis.min) / axis.span()) as f32 * (r - l) as f32
}

#[inline]
fn scale_y(y: f64, axis: &Axis, t: i32, b: i32) -> f32 {
    b as f32 - ((y - axis.min) / axis.span()) as f32 * (b - t) as f32
}

fn stroke_paint(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if style == LineStyle::Dashed {
        paint.set_path_effect(skia::PathEffect::dash(&[10.0, 6.0], 0.0));
    }
    paint
}

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme, horizontals: bool) {
    // Light dashed gridlines aligned with the tick positions
    let paint = stroke_paint(theme.grid, 1.0, LineStyle::Dashed);

    for x in linspace(l as f64, r as f64, 6) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    if horizontals {
        for y in linspace(t as f64, b as f64, 5) {
            canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.5, LineStyle::Solid);
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}

fn series_color(theme: &Theme, s: &Series) -> skia::Color {
    if s.style == LineStyle::Dashed {
        theme.reference
    } else {
        theme.series[s.palette % theme.series.len()]
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((scale_x(x0, x_axis, l, r), scale_y(y0, y_axis, t, b)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((scale_x(x, x_axis, l, r), scale_y(y, y_axis, t, b)));
    }

    let stroke = stroke_paint(series_color(theme, series), 2.0, series.style);
    canvas.draw_path(&path, &stroke);
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
    series: &Series,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(series_color(theme, series));

    for &(x, y) in &series.data_xy {
        let px = scale_x(x, x_axis, l, r);
        let py = scale_y(y, y_axis, t, b);
        canvas.draw_circle((px, py), 3.5, &paint);
    }
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
    series: &Series,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(theme.bar_fill);

    // Each bar occupies 70% of its unit slot.
    let half = 0.35;
    let x0 = scale_x(0.0, x_axis, l, r);
    for &(value, slot) in &series.data_xy {
        let x1 = scale_x(value, x_axis, l, r);
        let top = scale_y(slot + half, y_axis, t, b);
        let bot = scale_y(slot - half, y_axis, t, b);
        let rect = skia::Rect::from_ltrb(x0.min(x1), top, x0.max(x1), bot);
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    t: i32, r: i32,
    theme: &Theme,
    series: &[Series],
    shaper: &TextShaper,
) {
    let named: Vec<&Series> = series.iter().filter(|s| !s.name.is_empty()).collect();
    if named.is_empty() {
        return;
    }

    let size = 14.0f32;
    let row_h = 22.0f32;
    let swatch_w = 26.0f32;
    let pad = 10.0f32;

    let text_w = named
        .iter()
        .map(|s| shaper.measure_width(&s.name, size, false))
        .fold(0.0f32, f32::max);
    let box_w = swatch_w + 8.0 + text_w + pad * 2.0;
    let box_h = row_h * named.len() as f32 + pad;
    let bx = r as f32 - box_w - 12.0;
    let by = t as f32 + 12.0;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.background);
    let rect = skia::Rect::from_xywh(bx, by, box_w, box_h);
    canvas.draw_rect(rect, &fill);
    let border = stroke_paint(theme.axis_line, 1.0, LineStyle::Solid);
    canvas.draw_rect(rect, &border);

    for (i, s) in named.iter().enumerate() {
        let cy = by + pad * 0.5 + row_h * i as f32 + row_h * 0.5;
        let swatch = stroke_paint(series_color(theme, s), 2.5, s.style);
        canvas.draw_line((bx + pad, cy), (bx + pad + swatch_w, cy), &swatch);
        shaper.draw_left(canvas, &s.name, bx + pad + swatch_w + 8.0, cy + 5.0, size, theme.axis_label, false);
    }
}

/// Render a labeled placeholder image: background, border, centered title and
/// an explanatory note. Used for plot types that are not drawn yet.
pub fn render_notice(
    title: &str,
    message: &str,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let mut surface = new_surface(opts)?;
    let canvas = surface.canvas();
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let border = stroke_paint(theme.axis_line, 1.5, LineStyle::Solid);
    let (l, t, r, b) = opts.plot_area();
    let rect = skia::Rect::from_ltrb(l as f32, t as f32, r as f32, b as f32);
    canvas.draw_rect(rect, &border);

    if opts.draw_labels {
        let shaper = TextShaper::new();
        let cx = opts.width as f32 * 0.5;
        let cy = opts.height as f32 * 0.5;
        shaper.draw_centered(canvas, title, cx, cy - 18.0, 26.0, theme.title);
        shaper.draw_centered(canvas, message, cx, cy + 18.0, 16.0, theme.axis_label);
    }

    let data = encode_png(&mut surface)?;
    write_png(output_png_path, &data)
}
