//! Timing report emitted by the `boundary-sweep` tool.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Milliseconds spent in one named phase (matrix load, the operation itself).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTiming {
    pub phase: String,
    pub elapsed_ms: f64,
}

/// Per-phase timings of one tool run, in execution order, plus the wall-clock
/// total.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTiming {
    pub total_ms: f64,
    pub phases: Vec<PhaseTiming>,
}

impl RunTiming {
    pub fn record(&mut self, phase: impl Into<String>, elapsed_ms: f64) {
        self.phases.push(PhaseTiming {
            phase: phase.into(),
            elapsed_ms,
        });
    }

    /// Run `f` and record how long it took under `phase`.
    pub fn measure<T>(&mut self, phase: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let value = f();
        self.record(phase, elapsed_ms(start));
        value
    }

    /// Time of the first phase named `phase`, if it ran.
    pub fn phase_ms(&self, phase: &str) -> Option<f64> {
        self.phases
            .iter()
            .find(|p| p.phase == phase)
            .map(|p| p.elapsed_ms)
    }
}

pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
