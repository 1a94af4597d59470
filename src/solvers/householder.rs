use ndarray::{s, Axis};

use crate::{
    config::SolverConfig,
    error::Result,
    extended::Standard,
    interval::Interval,
    matrix::{self, IntervalMatrix, IntervalVector},
};

use super::DirectSolver;

/// QR triangularization by Householder reflections.
///
/// For column `k` the reflection vector is `v = x + sign(x[0]) * |x| e_1`,
/// where `x` is the column from the diagonal down, normalized by its own norm.
/// A column whose `|v|` has a lower bound below the threshold is skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Householder;

impl DirectSolver for Householder {
    fn name(&self) -> &'static str {
        "householder"
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
            let x = a.slice(s![k.., k]);
            let x_norm = matrix::norm(x);
            let mut v = x.to_owned();
            v[0] += if x[0].lo >= 0.0 { x_norm } else { -x_norm };

            let v_norm = matrix::norm(v.view());
            if v_norm.lo < config.threshold {
                tracing::debug!(column = k, norm = %v_norm, "skipping degenerate column");
                skipped.push(k);
                continue;
            }
            for vi in &mut v {
                *vi = config.divide::<Standard>(*vi, v_norm)?;
            }

            for column in a.slice_mut(s![k.., k..]).axis_iter_mut(Axis(1)) {
                reflect(&v, column);
            }
            reflect(&v, b.slice_mut(s![k..]));
        }
        Ok(skipped)
    }
}

/// `y <- y - v * (2 * (v . y))`
fn reflect(v: &IntervalVector, mut y: ndarray::ArrayViewMut1<Interval>) {
    let d = matrix::dot(v.view(), y.view()) * 2.0;
    for (yi, &vi) in y.iter_mut().zip(v) {
        *yi -= vi * d;
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::solvers::tests::{points, sample_system, scalar_solve};

    #[test]
    fn reflection_zeroes_the_subdiagonal() {
        let (a, b) = sample_system();
        let (mut ia, mut ib) = points(&a, &b);
        let skipped = Householder
            .triangularize(&mut ia, &mut ib, &SolverConfig::default())
            .unwrap();
        assert!(skipped.is_empty());
        for i in 0..4 {
            for j in 0..i {
                assert!(ia[[i, j]].magnitude() < 1e-12, "{i},{j}: {}", ia[[i, j]]);
            }
        }
    }

    #[test]
    fn reflecting_a_simple_column() {
        // x = [3, 4], |x| = 5, v = [8, 4] / sqrt(80)
        let mut a = array![
            [Interval::point(3.0), Interval::point(1.0)],
            [Interval::point(4.0), Interval::point(2.0)]
        ];
        let mut b = array![Interval::point(1.0), Interval::point(1.0)];
        Householder
            .triangularize(&mut a, &mut b, &SolverConfig::default())
            .unwrap();
        assert!((a[[0, 0]].lo + 5.0).abs() < 1e-12);
        assert!(a[[1, 0]].magnitude() < 1e-12);
        assert!((a[[0, 1]].lo + 2.2).abs() < 1e-12);
        assert!((a[[1, 1]].lo - 0.4).abs() < 1e-12);
    }

    #[test]
    fn zero_column_is_skipped() {
        let a = array![[0.0, 1.0, 0.0], [0.0, 2.0, 1.0], [0.0, 0.0, 3.0]];
        let b = array![1.0, 2.0, 3.0];
        let (mut ia, mut ib) = points(&a, &b);
        let skipped = Householder
            .triangularize(&mut ia, &mut ib, &SolverConfig::default())
            .unwrap();
        assert_eq!(skipped, vec![0]);
    }

    #[test]
    fn threshold_is_configurable() {
        let a = array![[1e-8, 1.0], [0.0, 1.0]];
        let b = array![1.0, 1.0];
        let (mut ia, mut ib) = points(&a, &b);
        let config = SolverConfig::default().with_threshold(1e-6);
        let skipped = Householder.triangularize(&mut ia, &mut ib, &config).unwrap();
        assert_eq!(skipped, vec![0]);
    }

    #[test]
    fn interval_solution_contains_point_solution() {
        let (a, b) = sample_system();
        let expected = scalar_solve(&a, &b);
        let ia = matrix::from_midpoints(a.view(), 1e-5);
        let ib = matrix::vector_from_midpoints(b.view(), 1e-5);
        let solution = Householder
            .solve(&ia, &ib, &SolverConfig::default())
            .unwrap();
        for (x, e) in solution.x.iter().zip(&expected) {
            assert!(x.contains(*e), "{x} does not contain {e}");
        }
    }
}
