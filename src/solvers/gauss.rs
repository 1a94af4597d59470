use num_traits::Zero;

use crate::{
    config::SolverConfig,
    error::Result,
    extended::Standard,
    matrix::{IntervalMatrix, IntervalVector},
};

use super::DirectSolver;

/// Gaussian elimination with partial pivoting.
///
/// Pivot candidates are ranked by [`Interval::magnitude`](crate::interval::Interval::magnitude),
/// `max(|lo|, |hi|)`, rather than by interval order. A column that is exactly
/// zero from the diagonal down is left unreduced.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gauss;

impl DirectSolver for Gauss {
    fn name(&self) -> &'static str {
        "gauss"
    }

    fn triangularize(
        &self,
        a: &mut IntervalMatrix,
        b: &mut IntervalVector,
        config: &SolverConfig,
    ) -> Result<Vec<usize>> {
        let n = b.len();
        let mut skipped = Vec::new();
        for k in 0..n.saturating_sub(1) {
            let pivot = pivot_row(a, k);
            if a[[pivot, k]].is_zero() {
                tracing::debug!(column = k, "skipping zero column");
                skipped.push(k);
                continue;
            }
            if pivot != k {
                tracing::debug!(column = k, row = pivot, "swapping pivot row");
                swap_rows(a, k, pivot);
                b.swap(k, pivot);
            }
            for i in k + 1..n {
                let factor = config.divide::<Standard>(a[[i, k]], a[[k, k]])?;
                for j in k..n {
                    let update = factor * a[[k, j]];
                    a[[i, j]] -= update;
                }
                let update = factor * b[k];
                b[i] -= update;
            }
        }
        Ok(skipped)
    }
}

/// Row at or below `k` whose entry in column `k` has the largest magnitude.
/// Ties keep the upper row.
fn pivot_row(a: &IntervalMatrix, k: usize) -> usize {
    let mut best = k;
    for i in k + 1..a.nrows() {
        if a[[i, k]].magnitude() > a[[best, k]].magnitude() {
            best = i;
        }
    }
    best
}

fn swap_rows(a: &mut IntervalMatrix, i: usize, j: usize) {
    for col in 0..a.ncols() {
        a.swap([i, col], [j, col]);
    }
}
