//! Per-index adjustment cost.
//!
//! Raising position `i` above position `i - 1` requires
//! `diff_i = tower[i] - tower[i - 1] + 1` units. That amount is charged either
//! as a fixed cost (`diff_i`) or scaled by the position (`diff_i * i`), and
//! each index independently takes whichever is smaller:
//!
//! - `diff_i >= 0` → fixed is smaller or equal
//! - `diff_i < 0` → scaled is smaller or equal
//! - `i = 1` → both coincide
//!
//! Ties resolve to [`CostFormula::Fixed`].

use crate::error::{Error, Result};
use crate::height::Height;
use tracing::trace;

/// The two ways an adjustment at one index can be charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CostFormula {
    /// Charge `diff_i`.
    Fixed,
    /// Charge `diff_i * i`.
    Scaled,
}

impl CostFormula {
    /// Both formulas, fixed first.
    pub const ALL: [Self; 2] = [Self::Fixed, Self::Scaled];

    /// Apply this formula to a difference at `index`.
    #[inline]
    pub fn apply<H: Height>(self, diff: H, index: usize) -> Option<H> {
        match self {
            Self::Fixed => Some(diff),
            Self::Scaled => diff.checked_scale(index),
        }
    }
}

impl std::fmt::Display for CostFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::Scaled => f.write_str("scaled"),
        }
    }
}

/// The cost charged for adjusting one tower index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution<H> {
    /// Tower index, always at least 1.
    pub index: usize,
    /// `tower[index] - tower[index - 1] + 1`
    pub diff: H,
    /// Formula that produced the smaller cost.
    pub formula: CostFormula,
    /// The charged cost.
    pub cost: H,
}

/// Reject heights that cannot be compared or summed.
pub fn validate<H: Height>(tower: &[H]) -> Result<()> {
    match tower.iter().position(|h| !h.is_finite()) {
        Some(index) => Err(Error::NonFinite { index }),
        None => Ok(()),
    }
}

/// Cost of adjusting `tower[index]` relative to its predecessor.
///
/// # Examples
///
/// ```
/// use tower_cost::{contribution, CostFormula};
///
/// let c = contribution(&[10i64, 1, 20], 2).unwrap();
/// assert_eq!(c.diff, 20);
/// assert_eq!(c.formula, CostFormula::Fixed);
/// assert_eq!(c.cost, 20);
/// ```
pub fn contribution<H: Height>(tower: &[H], index: usize) -> Result<Contribution<H>> {
    if index == 0 || index >= tower.len() {
        return Err(Error::IndexOutOfRange { index, len: tower.len() });
    }
    for (offset, height) in tower[index - 1..=index].iter().enumerate() {
        if !height.is_finite() {
            return Err(Error::NonFinite { index: index - 1 + offset });
        }
    }
    contribution_at(tower, index)
}

/// Contributions for every index `1..n`, in order.
pub fn contributions<H: Height>(tower: &[H]) -> Result<Vec<Contribution<H>>> {
    validate(tower)?;
    (1..tower.len()).map(|index| contribution_at(tower, index)).collect()
}

/// Evaluate one index of an already validated tower.
pub(crate) fn contribution_at<H: Height>(tower: &[H], index: usize) -> Result<Contribution<H>> {
    let diff = tower[index]
        .checked_diff(tower[index - 1])
        .ok_or(Error::Overflow { index })?;

    let (formula, cost) = match CostFormula::Scaled.apply(diff, index) {
        Some(scaled) if scaled < diff => (CostFormula::Scaled, scaled),
        Some(_) => (CostFormula::Fixed, diff),
        // A non-negative diff scaled out of range is larger than the fixed cost.
        None if diff >= H::ZERO => (CostFormula::Fixed, diff),
        None => return Err(Error::Overflow { index }),
    };

    trace!(index, %diff, %formula, %cost, "contribution");
    Ok(Contribution { index, diff, formula, cost })
}
