// File: crates/plot-cli/src/args.rs
// Summary: CLI argument surface; snake_case flags to match the calling application.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use plot_core::types::{DEFAULT_HEIGHT_IN, DEFAULT_WIDTH_IN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum PlotKind {
    Scatter,
    Timeseries,
    Residual,
    Importance,
    LearningCurve,
    NnArchitecture,
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "modelplot")]
#[command(about = "Render model-diagnostic plots from CSV data to PNG", long_about = None)]
#[command(rename_all = "snake_case")]
pub struct Cli {
    /// Which plot to render
    #[arg(long, value_enum)]
    pub plot_type: PlotKind,

    /// Path to the primary CSV data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Path to a CSV file containing model predictions (column 'predicted')
    #[arg(long)]
    pub model_file: Option<PathBuf>,

    /// Path of the PNG to write
    #[arg(long)]
    pub output_file: PathBuf,

    /// Plot title (defaults per plot type)
    #[arg(long)]
    pub title: Option<String>,

    /// Name of the X column
    #[arg(long)]
    pub x_column: Option<String>,

    /// Name of the Y column
    #[arg(long)]
    pub y_column: Option<String>,

    /// Name of the actual-values column
    #[arg(long)]
    pub actual_col: Option<String>,

    /// Name of the predicted-values column
    #[arg(long)]
    pub predicted_col: Option<String>,

    /// JSON object mapping feature name to importance score
    #[arg(long, visible_alias = "features")]
    pub features_json: Option<String>,

    /// Comma-delimited node counts per layer, e.g. "3,5,2"
    #[arg(long)]
    pub layer_sizes: Option<String>,

    /// Opaque tree-structure description
    #[arg(long)]
    pub tree_structure: Option<String>,

    /// Figure width in plotting inches
    #[arg(long, default_value_t = DEFAULT_WIDTH_IN)]
    pub width: f64,

    /// Figure height in plotting inches
    #[arg(long, default_value_t = DEFAULT_HEIGHT_IN)]
    pub height: f64,

    /// Color theme preset (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
