// File: crates/plot-cli/src/render.rs
// Summary: Dispatch one resolved PlotJob to the matching plot-core renderer.

use std::path::PathBuf;

use anyhow::Result;
use log::info;

use plot_core::{
    bars_from_scores, render_notice, theme, Axis, Chart, NetworkDiagram, RenderOptions, Series,
    SeriesType,
};

use crate::request::{PlotJob, PlotRequest};

/// Render the job to its output path and return the absolute path written.
pub fn render(job: &PlotJob) -> Result<PathBuf> {
    let opts = RenderOptions::with_size_inches(job.width, job.height, theme::find(&job.theme));

    match &job.request {
        PlotRequest::Scatter { x, actual, predicted, x_label, y_label } => {
            let chart = build_scatter(job, x, actual, predicted, x_label, y_label);
            chart.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::Timeseries { actual, predicted } => {
            let chart = build_timeseries(job, actual.as_deref(), predicted.as_deref());
            chart.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::Residual { predicted, residual } => {
            let chart = build_residual(job, predicted, residual);
            chart.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::Importance { scores } => {
            let chart = build_importance(job, scores.clone());
            chart.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::LearningCurve { sizes, training, validation } => {
            let chart = build_learning_curve(job, sizes, training, validation);
            chart.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::NnArchitecture { layer_sizes } => {
            let diagram = NetworkDiagram::new(job.title.clone(), layer_sizes.clone());
            diagram.render_to_png(&opts, &job.output)?;
        }
        PlotRequest::Tree { structure } => {
            info!("tree structure received ({} bytes); rendering placeholder", structure.len());
            render_notice(
                &job.title,
                "Decision tree rendering is not supported yet.",
                &opts,
                &job.output,
            )?;
        }
    }

    let abs = std::fs::canonicalize(&job.output)
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_default().join(&job.output));
    Ok(abs)
}

/// Endpoints of the perfect-prediction diagonal: the shared minimum and
/// maximum over both the actual and predicted values.
pub fn parity_range(actual: &[f64], predicted: &[f64]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in actual.iter().chain(predicted) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else {
        (lo, hi)
    }
}

fn build_scatter(
    job: &PlotJob,
    x: &Option<Vec<f64>>,
    actual: &[f64],
    predicted: &[f64],
    x_label: &str,
    y_label: &str,
) -> Chart {
    let mut chart = Chart::new();
    chart.title = job.title.clone();

    match x {
        Some(x) => {
            // Model-line variant: actual points over x, prediction line on top.
            chart.x_axis = Axis::new(x_label, 0.0, 1.0);
            chart.y_axis = Axis::new(y_label, 0.0, 1.0);
            chart.add_series(
                Series::with_data(SeriesType::Scatter, zip_xy(x, actual)).named("Actual Data"),
            );
            chart.add_series(
                Series::with_data(SeriesType::Line, zip_xy(x, predicted))
                    .named("Model Prediction")
                    .palette(1),
            );
        }
        None => {
            // Parity variant: predicted against actual.
            chart.x_axis = Axis::new(x_label, 0.0, 1.0);
            chart.y_axis = Axis::new(y_label, 0.0, 1.0);
            chart.add_series(
                Series::with_data(SeriesType::Scatter, zip_xy(actual, predicted))
                    .named("Predictions"),
            );
        }
    }

    let (lo, hi) = parity_range(actual, predicted);
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(lo, lo), (hi, hi)])
            .named("Perfect Prediction")
            .dashed(),
    );

    chart.autoscale_axes(0.02);
    chart
}

fn build_timeseries(job: &PlotJob, actual: Option<&[f64]>, predicted: Option<&[f64]>) -> Chart {
    let mut chart = Chart::new();
    chart.title = job.title.clone();
    chart.x_axis = Axis::new("Time", 0.0, 1.0);
    chart.y_axis = Axis::new("Value", 0.0, 1.0);

    if let Some(actual) = actual {
        chart.add_series(
            Series::with_data(SeriesType::Line, indexed(actual)).named("Actual"),
        );
    }
    if let Some(predicted) = predicted {
        chart.add_series(
            Series::with_data(SeriesType::Line, indexed(predicted))
                .named("Predicted")
                .palette(1),
        );
    }

    chart.autoscale_axes(0.02);
    chart
}

fn build_residual(job: &PlotJob, predicted: &[f64], residual: &[f64]) -> Chart {
    let mut chart = Chart::new();
    chart.title = job.title.clone();
    chart.x_axis = Axis::new("Predicted", 0.0, 1.0);
    chart.y_axis = Axis::new("Residual", 0.0, 1.0);

    chart.add_series(
        Series::with_data(SeriesType::Scatter, zip_xy(predicted, residual)).named("Residuals"),
    );

    // Horizontal zero reference across the predicted range.
    let (lo, hi) = parity_range(predicted, &[]);
    chart.add_series(
        Series::with_data(SeriesType::Line, vec![(lo, 0.0), (hi, 0.0)])
            .named("Zero")
            .dashed(),
    );

    chart.autoscale_axes(0.02);
    chart
}

fn build_importance(job: &PlotJob, scores: Vec<(String, f64)>) -> Chart {
    let (bars, ticks) = bars_from_scores(scores);

    let mut chart = Chart::new();
    chart.title = job.title.clone();
    let (lo, hi) = bars
        .iter()
        .fold((0.0f64, 0.0f64), |(lo, hi), &(v, _)| (lo.min(v), hi.max(v)));
    let span = (hi - lo).max(1e-9);
    chart.x_axis = Axis::new("Importance", lo - span * 0.02, hi + span * 0.05);
    chart.y_axis = Axis::new("Feature", 0.0, bars.len().max(1) as f64);
    chart.y_tick_labels = Some(ticks);
    chart.add_series(Series::with_data(SeriesType::Bars, bars));
    chart
}

fn build_learning_curve(
    job: &PlotJob,
    sizes: &[f64],
    training: &[f64],
    validation: &[f64],
) -> Chart {
    let mut chart = Chart::new();
    chart.title = job.title.clone();
    chart.x_axis = Axis::new("Training Examples", 0.0, 1.0);
    chart.y_axis = Axis::new("Score", 0.0, 1.0);

    chart.add_series(
        Series::with_data(SeriesType::Line, zip_xy(sizes, training)).named("Training Score"),
    );
    chart.add_series(
        Series::with_data(SeriesType::Line, zip_xy(sizes, validation))
            .named("Validation Score")
            .palette(1),
    );

    chart.autoscale_axes(0.02);
    chart
}

fn zip_xy(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().copied().enumerate().map(|(i, v)| (i as f64, v)).collect()
}
