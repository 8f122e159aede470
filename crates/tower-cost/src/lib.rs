//! Tower Adjustment Cost
//!
//! Minimum cost of raising a sequence of tower heights toward a strictly
//! increasing profile.
//!
//! # Cost Model
//!
//! For every index `i ≥ 1` the required raise over the previous height is
//!
//! ```text
//! diff_i = tower[i] - tower[i-1] + 1
//! ```
//!
//! and it can be charged two ways:
//! - **Fixed**: `diff_i`
//! - **Scaled**: `diff_i × i`
//!
//! Each index takes the cheaper formula independently.
//!
//! # Early Termination
//!
//! Adjustments may stop after any index `t ≥ 1`. The cost of a tower is the
//! smallest running total over all non-empty prefixes, so a single linear
//! scan suffices. The literal two-branch search is kept in [`exhaustive`] as
//! a reference.
//!
//! ```
//! use tower_cost::{analyze, min_adjustment_cost};
//!
//! assert_eq!(min_adjustment_cost(&[2i64, 5, 6, 9, 8]).unwrap(), 4);
//!
//! let report = analyze(&[10i64, 1, 20]).unwrap();
//! assert_eq!(report.prefix_sums, vec![-8, 12]);
//! assert_eq!(report.stop_index, Some(1));
//! ```

mod cost;
mod error;
pub mod exhaustive;
mod height;
mod scan;

pub use cost::{contribution, contributions, validate, Contribution, CostFormula};
pub use error::{Error, Result};
pub use exhaustive::{min_adjustment_cost_exhaustive, EXHAUSTIVE_MAX_LEN};
pub use height::Height;
pub use scan::{analyze, min_adjustment_cost, AdjustmentReport, PrefixScan, ScanStep};

/// Illustrative towers, each with its expected cost.
pub const SAMPLE_TOWERS: [(&[i64], i64); 2] = [(&[1, 4, 3, 2, 1], 4), (&[2, 5, 6, 9, 8], 4)];
