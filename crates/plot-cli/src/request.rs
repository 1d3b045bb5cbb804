// File: crates/plot-cli/src/request.rs
// Summary: PlotRequest union and the resolver that validates and types raw arguments.

use std::path::PathBuf;

use log::{debug, warn};

use crate::args::{Cli, PlotKind};
use crate::dataset::Dataset;
use crate::error::{PlotError, Result};

/// Fallback architecture used when --layer_sizes does not parse: the
/// caller's hidden-layer default "10,10" bracketed by single input and
/// output nodes.
pub const DEFAULT_LAYER_SIZES: [u32; 4] = [1, 10, 10, 1];

/// One validated rendering job. Each variant carries exactly the typed data
/// its renderer needs, so a missing field is a construction-time failure,
/// not a runtime lookup.
pub enum PlotRequest {
    Scatter {
        /// X column in the model-line variant; None for actual-vs-predicted.
        x: Option<Vec<f64>>,
        actual: Vec<f64>,
        predicted: Vec<f64>,
        x_label: String,
        y_label: String,
    },
    Timeseries {
        actual: Option<Vec<f64>>,
        predicted: Option<Vec<f64>>,
    },
    Residual {
        predicted: Vec<f64>,
        residual: Vec<f64>,
    },
    Importance {
        scores: Vec<(String, f64)>,
    },
    LearningCurve {
        sizes: Vec<f64>,
        training: Vec<f64>,
        validation: Vec<f64>,
    },
    NnArchitecture {
        layer_sizes: Vec<u32>,
    },
    Tree {
        structure: String,
    },
}

/// A request plus the job fields shared by every plot type.
pub struct PlotJob {
    pub request: PlotRequest,
    pub title: String,
    pub output: PathBuf,
    pub width: f64,
    pub height: f64,
    pub theme: String,
}

/// Validate the raw arguments for the selected plot type and load every
/// column its renderer needs.
pub fn resolve(cli: &Cli) -> Result<PlotJob> {
    if !(cli.width.is_finite() && cli.width > 0.0 && cli.height.is_finite() && cli.height > 0.0) {
        return Err(PlotError::MalformedInput(format!(
            "width and height must be positive, got {} x {}",
            cli.width, cli.height
        )));
    }

    let request = match cli.plot_type {
        PlotKind::Scatter => resolve_scatter(cli)?,
        PlotKind::Timeseries => resolve_timeseries(cli)?,
        PlotKind::Residual => resolve_residual(cli)?,
        PlotKind::Importance => resolve_importance(cli)?,
        PlotKind::LearningCurve => resolve_learning_curve(cli)?,
        PlotKind::NnArchitecture => resolve_nn_architecture(cli)?,
        PlotKind::Tree => resolve_tree(cli)?,
    };

    Ok(PlotJob {
        request,
        title: cli.title.clone().unwrap_or_else(|| default_title(cli.plot_type).to_string()),
        output: cli.output_file.clone(),
        width: cli.width,
        height: cli.height,
        theme: cli.theme.clone(),
    })
}

fn default_title(kind: PlotKind) -> &'static str {
    match kind {
        PlotKind::Scatter => "Linear Regression Results",
        PlotKind::Timeseries => "Actual vs Predicted",
        PlotKind::Residual => "Residual Plot",
        PlotKind::Importance => "Feature Importance",
        PlotKind::LearningCurve => "Learning Curve",
        PlotKind::NnArchitecture => "Neural Network Architecture",
        PlotKind::Tree => "Decision Tree",
    }
}

fn require<'a, T>(value: &'a Option<T>, flag: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(PlotError::MissingArgument(flag))
}

fn load_data(cli: &Cli) -> Result<Dataset> {
    let path = require(&cli.data_file, "data_file")?;
    Dataset::load(path)
}

fn check_same_length(a_name: &str, a: &[f64], b_name: &str, b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(PlotError::MalformedInput(format!(
            "mismatched column lengths: {}={}, {}={}",
            a_name,
            a.len(),
            b_name,
            b.len()
        )));
    }
    Ok(())
}

fn resolve_scatter(cli: &Cli) -> Result<PlotRequest> {
    let data = load_data(cli)?;

    if let Some(model_path) = &cli.model_file {
        // Model-line variant: x/y from the data file, predictions from the
        // model file's fixed 'predicted' column.
        let x_name = require(&cli.x_column, "x_column")?;
        let y_name = require(&cli.y_column, "y_column")?;
        let x = data.numeric_column(x_name)?;
        let actual = data.numeric_column(y_name)?;
        let model = Dataset::load(model_path)?;
        let predicted = model.numeric_column("predicted")?;
        check_same_length(x_name, &x, y_name, &actual)?;
        check_same_length(y_name, &actual, "predicted", &predicted)?;
        Ok(PlotRequest::Scatter {
            x: Some(x),
            actual,
            predicted,
            x_label: x_name.clone(),
            y_label: y_name.clone(),
        })
    } else {
        // Parity variant: actual and predicted columns from one dataset.
        let a_name = require(&cli.actual_col, "actual_col")?;
        let p_name = require(&cli.predicted_col, "predicted_col")?;
        let actual = data.numeric_column(a_name)?;
        let predicted = data.numeric_column(p_name)?;
        check_same_length(a_name, &actual, p_name, &predicted)?;
        Ok(PlotRequest::Scatter {
            x: None,
            actual,
            predicted,
            x_label: a_name.clone(),
            y_label: p_name.clone(),
        })
    }
}

fn resolve_timeseries(cli: &Cli) -> Result<PlotRequest> {
    let data = load_data(cli)?;
    let a_name = cli.actual_col.as_deref().unwrap_or("actual");
    let p_name = cli.predicted_col.as_deref().unwrap_or("predicted");

    let actual = optional_column(&data, a_name)?;
    let predicted = optional_column(&data, p_name)?;

    match (&actual, &predicted) {
        (None, None) => Err(PlotError::MissingColumns(format!(
            "neither '{}' nor '{}' is present in {}",
            a_name,
            p_name,
            data.path().display()
        ))),
        (Some(a), Some(p)) => {
            check_same_length(a_name, a, p_name, p)?;
            Ok(PlotRequest::Timeseries { actual, predicted })
        }
        _ => {
            // Soft degradation: render whichever series exists.
            debug!("timeseries: rendering only the column that is present");
            Ok(PlotRequest::Timeseries { actual, predicted })
        }
    }
}

fn optional_column(data: &Dataset, name: &str) -> Result<Option<Vec<f64>>> {
    if data.has_column(name) {
        Ok(Some(data.numeric_column(name)?))
    } else {
        Ok(None)
    }
}

fn resolve_residual(cli: &Cli) -> Result<PlotRequest> {
    let data = load_data(cli)?;
    let p_name = cli.predicted_col.as_deref().unwrap_or("predicted");
    let a_name = cli.actual_col.as_deref().unwrap_or("actual");

    let predicted = data.numeric_column(p_name)?;
    let residual = if data.has_column("residual") {
        data.numeric_column("residual")?
    } else if data.has_column(a_name) {
        // Derived in memory, never written back to the source.
        let actual = data.numeric_column(a_name)?;
        check_same_length(a_name, &actual, p_name, &predicted)?;
        derive_residuals(&actual, &predicted)
    } else {
        return Err(PlotError::MissingColumns(format!(
            "no 'residual' column in {} and no '{}' column to derive it from",
            data.path().display(),
            a_name
        )));
    };
    check_same_length(p_name, &predicted, "residual", &residual)?;
    Ok(PlotRequest::Residual { predicted, residual })
}

/// Row-wise actual − predicted.
pub fn derive_residuals(actual: &[f64], predicted: &[f64]) -> Vec<f64> {
    actual.iter().zip(predicted).map(|(a, p)| a - p).collect()
}

fn resolve_importance(cli: &Cli) -> Result<PlotRequest> {
    let scores = if let Some(raw) = &cli.features_json {
        parse_importance_json(raw)?
    } else if cli.data_file.is_some() {
        let data = load_data(cli)?;
        let names = data.string_column("feature")?;
        let values = data.numeric_column("importance")?;
        names.into_iter().zip(values).collect()
    } else {
        return Err(PlotError::MissingArgument("features_json"));
    };
    Ok(PlotRequest::Importance { scores })
}

/// Parse a JSON object mapping feature name to score. Malformed input is
/// reported as an error, never propagated as a crash.
pub fn parse_importance_json(raw: &str) -> Result<Vec<(String, f64)>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| PlotError::MalformedInput(format!("features_json is not valid JSON: {e}")))?;
    let object = value.as_object().ok_or_else(|| {
        PlotError::MalformedInput("features_json must be a JSON object of name: score".to_string())
    })?;
    object
        .iter()
        .map(|(name, score)| {
            score
                .as_f64()
                .map(|s| (name.clone(), s))
                .ok_or_else(|| {
                    PlotError::MalformedInput(format!(
                        "importance score for '{}' is not a number",
                        name
                    ))
                })
        })
        .collect()
}

fn resolve_learning_curve(cli: &Cli) -> Result<PlotRequest> {
    let data = load_data(cli)?;
    let missing: Vec<&str> = ["training_size", "training_score", "validation_score"]
        .into_iter()
        .filter(|c| !data.has_column(c))
        .collect();
    if !missing.is_empty() {
        return Err(PlotError::MissingColumns(format!(
            "{} missing from {}",
            missing.join(", "),
            data.path().display()
        )));
    }
    let sizes = data.numeric_column("training_size")?;
    let training = data.numeric_column("training_score")?;
    let validation = data.numeric_column("validation_score")?;
    check_same_length("training_size", &sizes, "training_score", &training)?;
    check_same_length("training_size", &sizes, "validation_score", &validation)?;
    Ok(PlotRequest::LearningCurve { sizes, training, validation })
}

fn resolve_nn_architecture(cli: &Cli) -> Result<PlotRequest> {
    let raw = require(&cli.layer_sizes, "layer_sizes")?;
    let layer_sizes = match parse_layer_sizes(raw) {
        Ok(sizes) => sizes,
        Err(e) => {
            // Documented soft degradation: a malformed list falls back to
            // the default architecture instead of failing the request.
            warn!("{e}; falling back to default architecture {:?}", DEFAULT_LAYER_SIZES);
            DEFAULT_LAYER_SIZES.to_vec()
        }
    };
    Ok(PlotRequest::NnArchitecture { layer_sizes })
}

/// Parse a comma-delimited list of positive layer sizes. At least two layers,
/// every entry at least one.
pub fn parse_layer_sizes(raw: &str) -> Result<Vec<u32>> {
    let sizes: Vec<u32> = raw
        .split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(n),
                _ => Err(PlotError::MalformedInput(format!(
                    "layer_sizes entry '{}' is not a positive integer",
                    part
                ))),
            }
        })
        .collect::<Result<_>>()?;
    if sizes.len() < 2 {
        return Err(PlotError::MalformedInput(format!(
            "layer_sizes needs at least two layers, got {}",
            sizes.len()
        )));
    }
    Ok(sizes)
}

fn resolve_tree(cli: &Cli) -> Result<PlotRequest> {
    let structure = require(&cli.tree_structure, "tree_structure")?;
    Ok(PlotRequest::Tree { structure: structure.clone() })
}
