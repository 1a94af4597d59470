use crate::{
    config::SolverConfig,
    error::Result,
    extended::Standard,
    matrix::{IntervalMatrix, IntervalVector},
};

use super::DirectSolver;

/// QR triangularization by Givens rotations.
///
/// Every subdiagonal entry `(i, j)` is eliminated by rotating rows `j` and
/// `i` with `c = a[j][j] / r`, `s = -a[i][j] / r`, `r = hypot(a[j][j], a[i][j])`.
/// A rotation whose `r` has a lower bound below the threshold is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Givens;

impl DirectSolver for Givens {
    fn name(&self) -> &'static str {
        "givens"
    }

    fn triangularize(
        &self,
        a: &mut IntervalMatrix,
        b: &mut IntervalVector,
        config: &SolverConfig,
    ) -> Result<Vec<usize>> {
        let n = b.len();
        let mut skipped = Vec::new();
        for j in 0..n {
            for i in j + 1..n {
                let r = a[[j, j]].hypot(&a[[i, j]]);
                if r.lo < config.threshold {
                    tracing::debug!(column = j, row = i, radius = %r, "skipping degenerate rotation");
                    if skipped.last() != Some(&j) {
                        skipped.push(j);
                    }
                    continue;
                }
                let c = config.divide::<Standard>(a[[j, j]], r)?;
                let s = -config.divide::<Standard>(a[[i, j]], r)?;

                for k in 0..n {
                    let (top, bottom) = (a[[j, k]], a[[i, k]]);
                    a[[j, k]] = c * top - s * bottom;
                    a[[i, k]] = s * top + c * bottom;
                }
                let (top, bottom) = (b[j], b[i]);
                b[j] = c * top - s * bottom;
                b[i] = s * top + c * bottom;
            }
        }
        Ok(skipped)
    }
}
