//! JSON output types for `--format json`.
//!
//! Big integers and ratios are carried as strings so no precision is lost
//! on the way through a JSON parser.

use serde::Serialize;

use crate::config::Settings;
use crate::driver::{RatioPoint, StopReason};
use crate::selection::SequenceSelection;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
pub struct ConvergenceJsonOutput {
    pub schema_version: u32,
    pub sequence: String,
    pub seeds: [String; 2],
    pub stride: u64,
    pub precision: u32,
    pub iterations: u64,
    pub points: Vec<RatioPointJson>,
    pub stop: StopJson,
}

#[derive(Serialize, Debug)]
pub struct RatioPointJson {
    pub index: u64,
    /// `None` (JSON `null`) when the previous term was zero
    pub ratio: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct StopJson {
    pub reason: &'static str,
    pub index: u64,
}

impl ConvergenceJsonOutput {
    pub fn new(selection: &SequenceSelection, settings: &Settings, stride: u64) -> Self {
        let seeds = selection.seeds();
        Self {
            schema_version: SCHEMA_VERSION,
            sequence: selection.to_string(),
            seeds: [seeds.penultimate.to_string(), seeds.ultimate.to_string()],
            stride,
            precision: settings.precision,
            iterations: settings.iterations,
            points: Vec::new(),
            stop: StopJson {
                reason: "iteration_limit",
                index: 0,
            },
        }
    }

    pub fn push(&mut self, point: &RatioPoint, precision: u32) {
        self.points.push(RatioPointJson {
            index: point.index,
            ratio: point
                .ratio
                .value()
                .map(|_| point.ratio.to_decimal_string(precision)),
        });
    }

    pub fn finish(&mut self, stop: StopReason) {
        self.stop = match stop {
            StopReason::Converged { index } => StopJson {
                reason: "converged",
                index,
            },
            StopReason::IterationLimit { last_index } => StopJson {
                reason: "iteration_limit",
                index: last_index,
            },
        };
    }
}

/// Error document printed in JSON mode.
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
