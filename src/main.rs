use boundary_sweep::config::load_config;
use boundary_sweep::diagnostics::{elapsed_ms, RunTiming};
use boundary_sweep::io::{load_distance_matrix, write_json_file};
use boundary_sweep::operation::OperationOutput;
use boundary_sweep::DistanceMatrix;
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let total_start = Instant::now();
    let mut timing = RunTiming::default();

    let pairs = timing.measure("load", || load_distance_matrix(&config.input))?;
    let mut matrix = DistanceMatrix::from_pairs(&pairs);
    if let Some(n) = config.samples {
        matrix = matrix.with_samples(n).map_err(|e| e.to_string())?;
    }

    let label = config.operation.label();
    let result = timing
        .measure(label, || config.operation.run(&matrix, config.num_threads))
        .map_err(|e| e.to_string())?;
    timing.total_ms = elapsed_ms(total_start);

    let summary = RunSummary {
        operation: label,
        rows: matrix.rows(),
        samples: matrix.samples(),
        num_threads: config.num_threads,
        edge_count: result.edge_count(),
        result,
        timing,
    };
    write_json_file(&config.output.json, &summary)?;

    println!(
        "{}: {} of {} pairs connected, saved to {} ({:.3} ms, {:.3} ms total)",
        summary.operation,
        summary.edge_count,
        summary.rows,
        config.output.json.display(),
        summary.timing.phase_ms(label).unwrap_or_default(),
        summary.timing.total_ms
    );
    Ok(())
}

fn usage() -> String {
    "Usage: boundary-sweep <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    operation: &'static str,
    rows: usize,
    samples: Option<usize>,
    num_threads: usize,
    edge_count: usize,
    result: OperationOutput,
    timing: RunTiming,
}
