//! Exhaustive reference evaluation.
//!
//! Enumerates every formula choice and every stopping point by plain
//! recursion. At each index both formulas are tried; after charging one, the
//! running total is a candidate answer and the recursion continues to the
//! next index as the alternative.
//!
//! The search is `O(2^n)` and exists to cross-check [`crate::min_adjustment_cost`]
//! and to measure it against. Towers longer than [`EXHAUSTIVE_MAX_LEN`] are
//! refused.

use crate::cost::{validate, CostFormula};
use crate::error::{Error, Result};
use crate::height::Height;
use tracing::debug;

/// Longest tower the exhaustive search accepts.
pub const EXHAUSTIVE_MAX_LEN: usize = 20;

/// Minimum adjustment cost by exhaustive search.
///
/// Always agrees with [`crate::min_adjustment_cost`].
///
/// # Examples
///
/// ```
/// use tower_cost::min_adjustment_cost_exhaustive;
///
/// assert_eq!(min_adjustment_cost_exhaustive(&[2i64, 5, 6, 9, 8]).unwrap(), 4);
/// ```
pub fn min_adjustment_cost_exhaustive<H: Height>(tower: &[H]) -> Result<H> {
    if tower.len() > EXHAUSTIVE_MAX_LEN {
        return Err(Error::TooLongForExhaustive {
            len: tower.len(),
            max: EXHAUSTIVE_MAX_LEN,
        });
    }
    validate(tower)?;
    if tower.len() < 2 {
        return Ok(H::ZERO);
    }

    // The cheapest path reaches every index, so it always yields a total.
    let cost = descend(tower, 1, H::ZERO, true)?.ok_or(Error::Overflow { index: 1 })?;
    debug!(len = tower.len(), %cost, "exhaustive evaluation");
    Ok(cost)
}

/// Best total reachable from `index` having already charged `changes`.
///
/// `cheapest` marks the path that takes the smaller formula at every index.
/// Its running totals are the lower bound at each depth and are exactly the
/// totals the linear scan sees, so an overflow there is an error. Any other
/// branch whose total grows past the height type is dominated by the
/// cheapest path and is dropped (`None`). The cheapest branch is explored
/// first so its errors surface before any other branch is charged.
fn descend<H: Height>(
    tower: &[H],
    index: usize,
    changes: H,
    cheapest: bool,
) -> Result<Option<H>> {
    if index == tower.len() {
        return Ok(Some(changes));
    }

    let diff = tower[index]
        .checked_diff(tower[index - 1])
        .ok_or(Error::Overflow { index })?;

    let costs = match CostFormula::Scaled.apply(diff, index) {
        Some(scaled) if scaled < diff => [Some(scaled), Some(diff)],
        Some(scaled) => [Some(diff), Some(scaled)],
        // A non-negative diff scaled out of range can never be the cheaper choice.
        None if diff >= H::ZERO => [Some(diff), None],
        None => return Err(Error::Overflow { index }),
    };

    let mut best = None;
    for (rank, cost) in costs.into_iter().enumerate() {
        let Some(cost) = cost else {
            continue;
        };
        let on_cheapest = cheapest && rank == 0;
        let charged = match changes.checked_sum(cost) {
            Some(total) => total,
            None if on_cheapest || cost < H::ZERO => return Err(Error::Overflow { index }),
            None => continue,
        };
        let candidate = match descend(tower, index + 1, charged, on_cheapest)? {
            Some(rest) if rest < charged => rest,
            _ => charged,
        };
        best = Some(match best {
            Some(b) if b <= candidate => b,
            _ => candidate,
        });
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::min_adjustment_cost;

    #[test]
    fn documented_scenarios() {
        assert_eq!(min_adjustment_cost_exhaustive(&[1i64, 4, 3, 2, 1]).unwrap(), 4);
        assert_eq!(min_adjustment_cost_exhaustive(&[2i64, 5, 6, 9, 8]).unwrap(), 4);
        assert_eq!(min_adjustment_cost_exhaustive(&[1i64]).unwrap(), 0);
        assert_eq!(min_adjustment_cost_exhaustive::<i64>(&[]).unwrap(), 0);
        assert_eq!(min_adjustment_cost_exhaustive(&[5i64, 1]).unwrap(), -3);
        assert_eq!(min_adjustment_cost_exhaustive(&[10i64, 1, 20]).unwrap(), -8);
    }

    #[test]
    fn mixed_signs_agree_with_linear_scan() {
        let towers: [&[i64]; 4] = [
            &[0, 3, 0, -3],
            &[9, -4, 7, 7, -20, 3, 1],
            &[-5, -5, -5, -5, -5],
            &[100, 1, 200, 2, 300, 3],
        ];
        for tower in towers {
            assert_eq!(
                min_adjustment_cost_exhaustive(tower).unwrap(),
                min_adjustment_cost(tower).unwrap(),
                "tower {:?}",
                tower
            );
        }
    }

    #[test]
    fn long_towers_are_refused() {
        let tower = vec![0i64; EXHAUSTIVE_MAX_LEN + 1];
        assert_eq!(
            min_adjustment_cost_exhaustive(&tower),
            Err(Error::TooLongForExhaustive {
                len: EXHAUSTIVE_MAX_LEN + 1,
                max: EXHAUSTIVE_MAX_LEN,
            })
        );
        assert!(min_adjustment_cost_exhaustive(&tower[..EXHAUSTIVE_MAX_LEN]).is_ok());
    }

    #[test]
    fn dominated_overflowing_branches_are_dropped() {
        // Scaling diff_2 = MAX overflows but the fixed branch is exact.
        let tower = [0i64, -1, i64::MAX - 2];
        assert_eq!(
            min_adjustment_cost_exhaustive(&tower).unwrap(),
            min_adjustment_cost(&tower).unwrap()
        );
    }

    #[test]
    fn running_sum_overflow_matches_linear_scan() {
        // diff_1 = MAX, diff_2 = 1 pushes every path past MAX
        let tower = [0i32, i32::MAX - 1, i32::MAX - 1];
        assert_eq!(
            min_adjustment_cost_exhaustive(&tower),
            Err(Error::Overflow { index: 2 })
        );

        // A later negative step does not rescue an overflowed total.
        let tower = [0i32, i32::MAX - 1, i32::MAX - 1, (i32::MAX - 2) - i32::MAX / 3];
        assert_eq!(
            min_adjustment_cost_exhaustive(&tower),
            Err(Error::Overflow { index: 2 })
        );
        assert_eq!(
            min_adjustment_cost_exhaustive(&tower),
            min_adjustment_cost(&tower)
        );
    }

    #[test]
    fn costlier_branch_overflow_is_dropped() {
        // diff_1 = 1.2e9, diff_2 = 5e8: the fixed path fits, the scaled one does not.
        let tower = [0i32, 1_199_999_999, 1_699_999_998];
        assert_eq!(min_adjustment_cost(&tower).unwrap(), 1_200_000_000);
        assert_eq!(min_adjustment_cost_exhaustive(&tower).unwrap(), 1_200_000_000);
    }

    #[test]
    fn non_finite_heights_are_rejected() {
        assert_eq!(
            min_adjustment_cost_exhaustive(&[f64::NEG_INFINITY, 1.0]),
            Err(Error::NonFinite { index: 0 })
        );
    }
}
