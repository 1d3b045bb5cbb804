// File: crates/plot-cli/src/lib.rs
// Summary: Library surface of the CLI: argument model, resolver, and renderer dispatch.

pub mod args;
pub mod dataset;
pub mod error;
pub mod render;
pub mod request;

pub use args::{Cli, PlotKind};
pub use error::{PlotError, Result};
pub use request::{resolve, PlotJob, PlotRequest, DEFAULT_LAYER_SIZES};
