//! The convergence loop: walk the sequence, emit each ratio, stop once it settles.

use anyhow::Result;
use num_bigint::BigInt;
use num_rational::BigRational;

use lucas_core::LucasSequence;

use crate::config::Settings;
use crate::ratio::{tolerance, Ratio};

/// One emitted data point: the ratio `term(index) / term(index - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioPoint {
    pub index: u64,
    pub ratio: Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Two consecutive ratios differed by less than `10^-precision`.
    Converged { index: u64 },
    /// The iteration bound ran out first. `last_index` is 0 when nothing ran.
    IterationLimit { last_index: u64 },
}

#[derive(Debug)]
pub struct ConvergenceDriver {
    settings: Settings,
    tolerance: BigRational,
}

impl ConvergenceDriver {
    pub fn new(settings: Settings) -> Self {
        Self {
            tolerance: tolerance(settings.precision),
            settings,
        }
    }

    /// Run the loop for `i` in `1..iterations`, handing every point to `emit`.
    ///
    /// The first two iterations never stop the loop. An undefined ratio is
    /// emitted like any other point and never counts as converged.
    pub fn run<F>(&self, sequence: &mut LucasSequence, mut emit: F) -> Result<StopReason>
    where
        F: FnMut(&RatioPoint) -> Result<()>,
    {
        let mut previous: BigInt = sequence.nth(0)?;
        let mut previous_ratio: Option<Ratio> = None;
        let mut last_index = 0;

        for index in 1..self.settings.iterations {
            let current = sequence.nth(index)?;
            let point = RatioPoint {
                index,
                ratio: Ratio::of(&current, &previous),
            };
            emit(&point)?;
            last_index = index;

            let settled = previous_ratio
                .as_ref()
                .is_some_and(|old| point.ratio.is_within(old, &self.tolerance));
            if index > 2 && settled {
                tracing::info!(index, checkpoints = sequence.checkpoints(), "ratio converged");
                return Ok(StopReason::Converged { index });
            }

            previous = current;
            previous_ratio = Some(point.ratio);
        }

        tracing::info!(
            iterations = self.settings.iterations,
            checkpoints = sequence.checkpoints(),
            "iteration limit reached"
        );
        Ok(StopReason::IterationLimit { last_index })
    }
}
