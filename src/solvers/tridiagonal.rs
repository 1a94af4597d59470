//! Tridiagonal systems solved by the double-sweep (Thomas) algorithm.
//!
//! Equation `i` reads `a[i] x[i-1] + b[i] x[i] + c[i] x[i+1] = d[i]`; `a[0]`
//! and `c[m-1]` do not take part. Two variants are provided and they do not
//! agree in general:
//!
//! * [`TridiagonalSystem::solve_envelope`] runs the scalar sweep twice with
//!   coefficient bounds chosen to push `x` down and up. The result is an
//!   approximation and carries no enclosure guarantee.
//! * [`TridiagonalSystem::solve_interval`] runs one sweep in interval
//!   arithmetic with either operator set.

use num_traits::Zero;

use crate::{
    config::SolverConfig,
    error::{Error, Result},
    extended::Arithmetic,
    interval::Interval,
    matrix::IntervalMatrix,
};

#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem {
    /// Subdiagonal; `a[0]` is ignored.
    pub a: Vec<Interval>,
    /// Main diagonal.
    pub b: Vec<Interval>,
    /// Superdiagonal; the last entry is ignored.
    pub c: Vec<Interval>,
    /// Right-hand side.
    pub d: Vec<Interval>,
}

#[derive(Clone, Debug)]
pub struct TridiagonalSolution {
    pub x: Vec<Interval>,
    pub residual: Vec<Interval>,
}

/// Which endpoint of each coefficient one scalar sweep reads.
#[derive(Clone, Copy, Debug)]
enum Bound {
    Lower,
    Upper,
}

impl Bound {
    fn of(self, iv: Interval) -> f64 {
        match self {
            Bound::Lower => iv.lo,
            Bound::Upper => iv.hi,
        }
    }
}

/// Endpoint choices for one scalar sweep.
#[derive(Clone, Copy, Debug)]
struct Selection {
    /// `a` inside the denominator `b + a * alpha`.
    a_denom: Bound,
    /// `a` inside the numerator `d - a * beta`.
    a_numer: Bound,
    b: Bound,
    c: Bound,
    d: Bound,
}

/// Pushes `x` down: `B.hi`, `C.hi`, `D.lo`.
const MINIMIZE: Selection = Selection {
    a_denom: Bound::Upper,
    a_numer: Bound::Lower,
    b: Bound::Upper,
    c: Bound::Upper,
    d: Bound::Lower,
};

/// Pushes `x` up: `B.lo`, `C.lo`, `D.hi`.
const MAXIMIZE: Selection = Selection {
    a_denom: Bound::Lower,
    a_numer: Bound::Upper,
    b: Bound::Lower,
    c: Bound::Lower,
    d: Bound::Upper,
};

impl TridiagonalSystem {
    pub fn new(
        a: Vec<Interval>,
        b: Vec<Interval>,
        c: Vec<Interval>,
        d: Vec<Interval>,
    ) -> Result<Self> {
        let system = Self { a, b, c, d };
        system.check()?;
        Ok(system)
    }

    pub fn len(&self) -> usize {
        self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Expands the bands into a dense matrix and right-hand side.
    pub fn to_dense(&self) -> (IntervalMatrix, ndarray::Array1<Interval>) {
        let m = self.len();
        let mut dense = IntervalMatrix::from_elem((m, m), Interval::zero());
        for i in 0..m {
            if i > 0 {
                dense[[i, i - 1]] = self.a[i];
            }
            dense[[i, i]] = self.b[i];
            if i + 1 < m {
                dense[[i, i + 1]] = self.c[i];
            }
        }
        (dense, ndarray::Array1::from(self.d.clone()))
    }

    /// Two scalar sweeps, one per bound selection, combined per component
    /// as `[min(x_min, x_max), max(x_min, x_max)]`.
    ///
    /// The residual is the envelope of the two bound-selected residuals:
    /// lower coefficients with `x_min` against `D.hi`, upper coefficients
    /// with `x_max` against `D.lo`.
    pub fn solve_envelope(&self) -> Result<TridiagonalSolution> {
        let x_min = self.scalar_sweep(MINIMIZE)?;
        let x_max = self.scalar_sweep(MAXIMIZE)?;
        let x = x_min
            .iter()
            .zip(&x_max)
            .map(|(&lo, &hi)| Interval::hull(lo, hi))
            .collect();
        let residual = (0..self.len())
            .map(|i| {
                let low = self.scalar_row(i, &x_min, Bound::Lower) - self.d[i].hi;
                let high = self.scalar_row(i, &x_max, Bound::Upper) - self.d[i].lo;
                Interval::hull(low, high)
            })
            .collect();
        Ok(TridiagonalSolution { x, residual })
    }

    /// One sweep in interval arithmetic with the operator set `A`.
    ///
    /// The residual `a x[i-1] + b x[i] + c x[i+1] - d` uses `A`'s subtraction.
    pub fn solve_interval<A: Arithmetic>(
        &self,
        config: &SolverConfig,
    ) -> Result<TridiagonalSolution> {
        self.check()?;
        let m = self.len();
        let _span = tracing::debug_span!("interval_sweep", operators = A::NAME, m).entered();
        let mut alpha = vec![Interval::zero(); m];
        let mut beta = vec![Interval::zero(); m];
        for i in 0..m {
            let (denom, numer) = if i == 0 {
                (self.b[0], self.d[0])
            } else {
                (
                    self.b[i] + self.a[i] * alpha[i - 1],
                    A::sub(self.d[i], self.a[i] * beta[i - 1]),
                )
            };
            if i + 1 < m {
                alpha[i] = config.divide::<A>(-self.c[i], denom)?;
            }
            beta[i] = config.divide::<A>(numer, denom)?;
        }

        let mut x = beta;
        for i in (0..m.saturating_sub(1)).rev() {
            x[i] = alpha[i] * x[i + 1] + x[i];
        }

        let residual = (0..m)
            .map(|i| A::sub(self.interval_row(i, &x), self.d[i]))
            .collect();
        Ok(TridiagonalSolution { x, residual })
    }

    fn check(&self) -> Result<()> {
        let m = self.len();
        if m == 0 {
            return Err(Error::EmptySystem);
        }
        for band in [&self.a, &self.c, &self.d] {
            if band.len() != m {
                return Err(Error::DimensionMismatch {
                    expected: m,
                    got: band.len(),
                });
            }
        }
        Ok(())
    }

    fn scalar_sweep(&self, sel: Selection) -> Result<Vec<f64>> {
        self.check()?;
        let m = self.len();
        let mut alpha = vec![0.0; m];
        let mut beta = vec![0.0; m];
        for i in 0..m {
            let (denom, numer) = if i == 0 {
                (sel.b.of(self.b[0]), sel.d.of(self.d[0]))
            } else {
                (
                    sel.b.of(self.b[i]) + sel.a_denom.of(self.a[i]) * alpha[i - 1],
                    sel.d.of(self.d[i]) - sel.a_numer.of(self.a[i]) * beta[i - 1],
                )
            };
            if denom == 0.0 {
                return Err(Error::SingularSystem { row: i });
            }
            if i + 1 < m {
                alpha[i] = -sel.c.of(self.c[i]) / denom;
            }
            beta[i] = numer / denom;
        }

        let mut x = beta;
        for i in (0..m.saturating_sub(1)).rev() {
            x[i] = alpha[i] * x[i + 1] + x[i];
        }
        Ok(x)
    }

    /// Left-hand side of equation `i` with every coefficient at `bound`.
    fn scalar_row(&self, i: usize, x: &[f64], bound: Bound) -> f64 {
        let mut sum = bound.of(self.b[i]) * x[i];
        if i > 0 {
            sum += bound.of(self.a[i]) * x[i - 1];
        }
        if i + 1 < self.len() {
            sum += bound.of(self.c[i]) * x[i + 1];
        }
        sum
    }

    fn interval_row(&self, i: usize, x: &[Interval]) -> Interval {
        let mut sum = self.b[i] * x[i];
        if i > 0 {
            sum = self.a[i] * x[i - 1] + sum;
        }
        if i + 1 < self.len() {
            sum += self.c[i] * x[i + 1];
        }
        sum
    }
}
