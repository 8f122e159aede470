//! Linear prefix scan.
//!
//! The cost of a tower is the smallest running total of its contributions,
//! taken over every non-empty prefix:
//!
//! ```text
//! cost = min_{t ∈ 1..n} Σ_{i=1..t} min(diff_i, diff_i × i)
//! ```
//!
//! Formula choice and stopping point are independent per index, so the whole
//! search space collapses to one pass with a running sum and running minimum.
//! Towers with fewer than two heights cost 0.

use crate::cost::{contribution_at, validate, Contribution, CostFormula};
use crate::error::{Error, Result};
use crate::height::Height;
use tracing::debug;

/// One step of the scan: a contribution and the running total after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanStep<H> {
    /// Cost charged at this index.
    pub contribution: Contribution<H>,
    /// Sum of all contributions up to and including this index.
    pub running: H,
}

/// Iterator over the running totals of a validated tower.
///
/// Yields one step per index `1..n`. Stops after the first error.
#[derive(Debug, Clone)]
pub struct PrefixScan<'a, H> {
    tower: &'a [H],
    index: usize,
    running: H,
    failed: bool,
}

impl<'a, H: Height> PrefixScan<'a, H> {
    /// Start a scan, rejecting non-finite heights up front.
    pub fn new(tower: &'a [H]) -> Result<Self> {
        validate(tower)?;
        Ok(Self {
            tower,
            index: 1,
            running: H::ZERO,
            failed: false,
        })
    }
}

impl<H: Height> Iterator for PrefixScan<'_, H> {
    type Item = Result<ScanStep<H>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.tower.len() {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let step = contribution_at(self.tower, index).and_then(|contribution| {
            let running = self
                .running
                .checked_sum(contribution.cost)
                .ok_or(Error::Overflow { index })?;
            Ok(ScanStep { contribution, running })
        });

        match step {
            Ok(step) => {
                self.running = step.running;
                Some(Ok(step))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.failed {
            0
        } else {
            self.tower.len().saturating_sub(self.index)
        };
        (0, Some(remaining))
    }
}

/// Minimum total adjustment cost of a tower.
///
/// # Examples
///
/// ```
/// use tower_cost::min_adjustment_cost;
///
/// assert_eq!(min_adjustment_cost(&[1i64, 4, 3, 2, 1]).unwrap(), 4);
/// assert_eq!(min_adjustment_cost(&[10i64, 1, 20]).unwrap(), -8);
/// assert_eq!(min_adjustment_cost::<i64>(&[]).unwrap(), 0);
/// ```
pub fn min_adjustment_cost<H: Height>(tower: &[H]) -> Result<H> {
    let mut best: Option<H> = None;
    for step in PrefixScan::new(tower)? {
        let running = step?.running;
        if best.map_or(true, |b| running < b) {
            best = Some(running);
        }
    }

    let cost = best.unwrap_or(H::ZERO);
    debug!(len = tower.len(), %cost, "evaluated tower");
    Ok(cost)
}

/// Full breakdown of a tower evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjustmentReport<H> {
    /// One entry per index `1..n`.
    pub contributions: Vec<Contribution<H>>,
    /// Running total after each contribution.
    pub prefix_sums: Vec<H>,
    /// Tower index whose prefix is minimal (earliest on ties).
    pub stop_index: Option<usize>,
    /// The minimal prefix sum, 0 for towers shorter than two.
    pub cost: H,
}

impl<H: Height> AdjustmentReport<H> {
    /// Number of indices charged with the scaled formula.
    pub fn scaled_count(&self) -> usize {
        self.contributions
            .iter()
            .filter(|c| c.formula == CostFormula::Scaled)
            .count()
    }

    /// Contributions up to and including the stopping index.
    pub fn charged(&self) -> &[Contribution<H>] {
        match self.stop_index {
            Some(stop) => &self.contributions[..stop],
            None => &[],
        }
    }
}

/// Evaluate a tower and keep every intermediate value.
///
/// `analyze(tower)?.cost` always equals `min_adjustment_cost(tower)?`.
pub fn analyze<H: Height>(tower: &[H]) -> Result<AdjustmentReport<H>> {
    let scan = PrefixScan::new(tower)?;
    let len = tower.len().saturating_sub(1);
    let mut contributions = Vec::with_capacity(len);
    let mut prefix_sums = Vec::with_capacity(len);
    let mut best: Option<(usize, H)> = None;

    for step in scan {
        let ScanStep { contribution, running } = step?;
        if best.map_or(true, |(_, b)| running < b) {
            best = Some((contribution.index, running));
        }
        contributions.push(contribution);
        prefix_sums.push(running);
    }

    let (stop_index, cost) = match best {
        Some((index, cost)) => (Some(index), cost),
        None => (None, H::ZERO),
    };
    debug!(len = tower.len(), ?stop_index, %cost, "analyzed tower");

    Ok(AdjustmentReport {
        contributions,
        prefix_sums,
        stop_index,
        cost,
    })
}
