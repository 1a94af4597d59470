//! Dense interval vectors and matrices on top of `ndarray`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};
use num_traits::Zero;

use crate::{
    error::{Error, Result},
    interval::Interval,
};

pub type IntervalMatrix = Array2<Interval>;
pub type IntervalVector = Array1<Interval>;

/// Packs midpoints into intervals of the given radius.
pub fn from_midpoints(mid: ArrayView2<f64>, radius: f64) -> IntervalMatrix {
    mid.map(|&m| Interval::from_mid_rad(m, radius))
}

/// Vector counterpart of [`from_midpoints`].
pub fn vector_from_midpoints(mid: ArrayView1<f64>, radius: f64) -> IntervalVector {
    mid.map(|&m| Interval::from_mid_rad(m, radius))
}

/// `sum(u[i] * v[i])`, starting from `[0, 0]`.
pub fn dot(u: ArrayView1<Interval>, v: ArrayView1<Interval>) -> Interval {
    Zip::from(u)
        .and(v)
        .fold(Interval::zero(), |acc, &x, &y| acc + x * y)
}

/// Euclidean norm: square root of both endpoints of `dot(v, v)`.
///
/// A squared component straddling zero can drag the lower bound below zero;
/// [`Interval::sqrt`] clamps that to zero.
pub fn norm(v: ArrayView1<Interval>) -> Interval {
    dot(v, v).sqrt()
}

/// `A * x`, row by row.
pub fn mat_vec(a: ArrayView2<Interval>, x: ArrayView1<Interval>) -> Result<IntervalVector> {
    if a.ncols() != x.len() {
        return Err(Error::DimensionMismatch {
            expected: a.ncols(),
            got: x.len(),
        });
    }
    Ok(a.rows().into_iter().map(|row| dot(row, x)).collect())
}

/// `A * x - b` with standard subtraction.
pub fn residual(
    a: ArrayView2<Interval>,
    x: ArrayView1<Interval>,
    b: ArrayView1<Interval>,
) -> Result<IntervalVector> {
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            got: b.len(),
        });
    }
    let ax = mat_vec(a, x)?;
    Ok(Zip::from(&ax).and(b).map_collect(|&l, &r| l - r))
}

pub fn widths(x: ArrayView1<Interval>) -> Array1<f64> {
    x.map(Interval::width)
}

pub fn midpoints(x: ArrayView1<Interval>) -> Array1<f64> {
    x.map(Interval::midpoint)
}

/// Checks that `a` is square and `b` matches it; returns the dimension.
pub(crate) fn check_square(a: ArrayView2<Interval>, b: ArrayView1<Interval>) -> Result<usize> {
    let n = a.nrows();
    if n == 0 {
        return Err(Error::EmptySystem);
    }
    if a.ncols() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(n)
}
