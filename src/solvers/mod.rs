//! Direct solvers for dense interval systems.
//!
//! Each solver reduces a working copy of `(A, b)` to upper-triangular form
//! and then runs the shared [`back_substitute`]. The caller's matrix and
//! vector are only borrowed, so the residual is always taken against the
//! original system.

pub mod gauss;
pub mod givens;
pub mod householder;
pub mod tridiagonal;

use std::fmt::{Display, Formatter};

use ndarray::{ArrayView1, ArrayView2};
use num_traits::Zero;

use crate::{
    config::SolverConfig,
    error::{Error, Result},
    interval::Interval,
    matrix::{self, IntervalMatrix, IntervalVector},
};

pub use gauss::Gauss;
pub use givens::Givens;
pub use householder::Householder;

/// Output of a dense solve.
#[derive(Clone, Debug)]
pub struct Solution {
    pub x: IntervalVector,
    /// `A * x - b` against the original system.
    pub residual: IntervalVector,
    /// The working matrix after triangularization.
    pub triangular: IntervalMatrix,
    /// The working right-hand side after triangularization.
    pub rhs: IntervalVector,
    /// Columns left unreduced because their reflection norm or rotation radius was too small.
    pub skipped_columns: Vec<usize>,
}

impl Solution {
    pub fn widths(&self) -> ndarray::Array1<f64> {
        matrix::widths(self.x.view())
    }
}

pub trait DirectSolver {
    fn name(&self) -> &'static str;

    /// Reduces `a` to upper-triangular form in place, applying the same
    /// transformation to `b`. Returns the skipped columns.
    fn triangularize(
        &self,
        a: &mut IntervalMatrix,
        b: &mut IntervalVector,
        config: &SolverConfig,
    ) -> Result<Vec<usize>>;

    fn solve(
        &self,
        a: &IntervalMatrix,
        b: &IntervalVector,
        config: &SolverConfig,
    ) -> Result<Solution> {
        let n = matrix::check_square(a.view(), b.view())?;
        let _span = tracing::debug_span!("solve", solver = self.name(), n).entered();
        let mut triangular = a.clone();
        let mut rhs = b.clone();
        let skipped_columns = self.triangularize(&mut triangular, &mut rhs, config)?;
        let x = back_substitute(triangular.view(), rhs.view())?;
        let residual = matrix::residual(a.view(), x.view(), b.view())?;
        Ok(Solution {
            x,
            residual,
            triangular,
            rhs,
            skipped_columns,
        })
    }
}

/// Solves an upper-triangular system from the last row up.
///
/// A diagonal entry containing zero fails with [`Error::SingularSystem`]
/// regardless of the division policy.
pub fn back_substitute(u: ArrayView2<Interval>, y: ArrayView1<Interval>) -> Result<IntervalVector> {
    let n = matrix::check_square(u, y)?;
    let mut x = IntervalVector::from_elem(n, Interval::zero());
    for i in (0..n).rev() {
        let sum = matrix::dot(u.slice(ndarray::s![i, i + 1..]), x.slice(ndarray::s![i + 1..]));
        let diagonal = u[[i, i]];
        if diagonal.straddles_zero() {
            return Err(Error::SingularSystem { row: i });
        }
        x[i] = (y[i] - sum).checked_div(diagonal)?;
    }
    Ok(x)
}

/// Selects one of the dense solvers by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Gauss,
    Householder,
    Givens,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Gauss, Method::Householder, Method::Givens];

    pub fn solver(self) -> &'static dyn DirectSolver {
        match self {
            Method::Gauss => &Gauss,
            Method::Householder => &Householder,
            Method::Givens => &Givens,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.solver().name())
    }
}
