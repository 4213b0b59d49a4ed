//! File helpers for the tool: distance matrices in, JSON reports out.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read a distance matrix stored as a JSON array of `[x, y]` pairs.
pub fn load_distance_matrix(path: &Path) -> Result<Vec<[f64; 2]>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read distances {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse distances {}: {e}", path.display()))
}

/// Write a tool report as indented JSON, creating missing directories on the
/// way to `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    create_output_dirs(path)?;
    let file = File::create(path)
        .map_err(|e| format!("Failed to create report {}: {e}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| format!("Failed to encode report {}: {e}", path.display()))?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

fn create_output_dirs(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create output directory {}: {e}", dir.display())),
        _ => Ok(()),
    }
}
