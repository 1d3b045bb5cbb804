// File: crates/plot-cli/src/dataset.rs
// Summary: Column-addressed view over a delimited text file with a header row.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{PlotError, Result};

/// An ordered table of named columns loaded from CSV. The source file is
/// never mutated; derived columns live only in the caller's memory.
pub struct Dataset {
    path: PathBuf,
    headers: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for rec in rdr.records() {
            let rec = rec?;
            for (i, field) in rec.iter().enumerate() {
                if i < columns.len() {
                    columns[i].push(field.to_string());
                }
            }
        }
        debug!(
            "loaded {} with {} columns, {} rows",
            path.display(),
            headers.len(),
            columns.first().map_or(0, Vec::len)
        );
        Ok(Self { path: path.to_path_buf(), headers, columns })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw string cells of a column, in row order.
    pub fn string_column(&self, name: &str) -> Result<Vec<String>> {
        let i = self.index_of(name).ok_or_else(|| self.missing(name))?;
        Ok(self.columns[i].clone())
    }

    /// Column parsed as f64; a cell that does not parse fails the request.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let i = self.index_of(name).ok_or_else(|| self.missing(name))?;
        self.columns[i]
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                cell.parse::<f64>().map_err(|_| {
                    PlotError::MalformedInput(format!(
                        "column '{}' row {} in {} is not numeric: '{}'",
                        name,
                        row + 1,
                        self.path.display(),
                        cell
                    ))
                })
            })
            .collect()
    }

    fn missing(&self, name: &str) -> PlotError {
        PlotError::MissingColumns(format!(
            "column '{}' not found in {} (have: {})",
            name,
            self.path.display(),
            self.headers.join(", ")
        ))
    }
}
