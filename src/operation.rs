//! Serialisable description of one library call, as driven by the
//! `boundary-sweep` tool.

use crate::assign::assign;
use crate::error::Result;
use crate::geometry::{Slope, SweepLine};
use crate::matrix::DistanceMatrix;
use crate::sweep::{sweep_1d, sweep_2d_threaded, EdgeBatches};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Operation {
    /// Classify every pair against one boundary.
    Assign {
        slope: Slope,
        #[serde(default)]
        x_max: f64,
        #[serde(default)]
        y_max: f64,
    },
    /// Translate a boundary through sorted offsets.
    Sweep1d {
        slope: Slope,
        offsets: Vec<f64>,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    /// Sweep an oblique boundary through sorted `x_max` values.
    Sweep2d { x_max: Vec<f64>, y_max: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OperationOutput {
    #[serde(rename_all = "camelCase")]
    Assign {
        connected: usize,
        membership: Vec<bool>,
    },
    #[serde(rename_all = "camelCase")]
    Sweep {
        step_counts: Vec<usize>,
        edges: EdgeBatches,
    },
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Assign { .. } => "assign",
            Self::Sweep1d { .. } => "sweep1d",
            Self::Sweep2d { .. } => "sweep2d",
        }
    }

    pub fn run(&self, matrix: &DistanceMatrix<'_>, num_threads: usize) -> Result<OperationOutput> {
        match self {
            Self::Assign {
                slope,
                x_max,
                y_max,
            } => {
                let membership = assign(matrix, *slope, *x_max, *y_max, num_threads)?;
                Ok(OperationOutput::Assign {
                    connected: membership.iter().filter(|&&m| m).count(),
                    membership,
                })
            }
            Self::Sweep1d {
                slope,
                offsets,
                x0,
                y0,
                x1,
                y1,
            } => {
                let line = SweepLine::new(*slope, *x0, *y0, *x1, *y1)?;
                let edges = sweep_1d(matrix, offsets, &line, num_threads)?;
                Ok(OperationOutput::sweep(edges))
            }
            Self::Sweep2d { x_max, y_max } => {
                let edges = sweep_2d_threaded(matrix, x_max, *y_max, num_threads)?;
                Ok(OperationOutput::sweep(edges))
            }
        }
    }
}

impl OperationOutput {
    fn sweep(edges: EdgeBatches) -> Self {
        Self::Sweep {
            step_counts: edges.step_counts(),
            edges,
        }
    }

    /// Connected pairs for an assignment, or edges over all steps of a sweep.
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Assign { connected, .. } => *connected,
            Self::Sweep { edges, .. } => edges.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_operations() {
        let op: Operation =
            serde_json::from_str(r#"{"kind":"assign","slope":"vertical","x_max":0.5}"#).unwrap();
        assert_eq!(
            op,
            Operation::Assign {
                slope: Slope::Vertical,
                x_max: 0.5,
                y_max: 0.0
            }
        );

        let op: Operation = serde_json::from_str(
            r#"{"kind":"sweep1d","slope":"oblique","offsets":[0.0,0.8],"x0":0.1,"y0":0.1,"x1":1.0,"y1":1.0}"#,
        )
        .unwrap();
        assert_eq!(op.label(), "sweep1d");

        let op: Operation =
            serde_json::from_str(r#"{"kind":"sweep2d","x_max":[0.2,0.4],"y_max":0.5}"#).unwrap();
        assert_eq!(op.label(), "sweep2d");
    }

    #[test]
    fn runs_sweep_and_counts_edges() {
        let pairs = [[0.1, 0.1], [0.5, 0.5], [0.9, 0.9]];
        let m = DistanceMatrix::from_pairs(&pairs);
        let op = Operation::Sweep1d {
            slope: Slope::Oblique,
            offsets: vec![0.0, 0.8, 1.6],
            x0: 0.1,
            y0: 0.1,
            x1: 1.0,
            y1: 1.0,
        };
        let out = op.run(&m, 2).unwrap();
        assert_eq!(out.edge_count(), 3);
        match out {
            OperationOutput::Sweep { step_counts, .. } => assert_eq!(step_counts, vec![1, 1, 1]),
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn assign_output_serialises_camel_case() {
        let pairs = [[0.1, 0.1], [0.9, 0.9]];
        let m = DistanceMatrix::from_pairs(&pairs);
        let op = Operation::Assign {
            slope: Slope::Vertical,
            x_max: 0.5,
            y_max: 0.0,
        };
        let json = serde_json::to_value(op.run(&m, 1).unwrap()).unwrap();
        assert_eq!(json["kind"], "assign");
        assert_eq!(json["connected"], 1);
        assert_eq!(json["membership"], serde_json::json!([true, false]));
    }
}
