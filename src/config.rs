//! JSON configuration for the `boundary-sweep` tool.

use crate::operation::Operation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SweepToolConfig {
    /// JSON file holding the distance matrix as an array of `[x, y]` pairs.
    pub input: PathBuf,
    /// Sample count when rows follow the condensed pair order; enables
    /// sample-index output.
    #[serde(default)]
    pub samples: Option<usize>,
    #[serde(default = "default_threads")]
    pub num_threads: usize,
    pub operation: Operation,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub json: PathBuf,
}

fn default_threads() -> usize {
    1
}

pub fn load_config(path: &Path) -> Result<SweepToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
