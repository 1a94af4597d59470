//! Plain-text rendering of intervals and solutions.

use std::fmt::Write;

use ndarray::ArrayView2;

use crate::{
    interval::Interval,
    solvers::{tridiagonal::TridiagonalSolution, Solution},
};

/// Fixed-point layout for interval endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalFormat {
    /// Minimum field width of each endpoint.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for IntervalFormat {
    fn default() -> Self {
        Self {
            width: 0,
            precision: 6,
        }
    }
}

impl IntervalFormat {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn interval(&self, iv: Interval) -> String {
        format!(
            "[{:>w$.p$}, {:>w$.p$}]",
            iv.lo,
            iv.hi,
            w = self.width,
            p = self.precision
        )
    }

    pub fn scalar(&self, value: f64) -> String {
        format!("{:>w$.p$}", value, w = self.width, p = self.precision)
    }

    /// One line per entry, `name[i] = [lo, hi]`, counting from 1.
    pub fn vector<'a>(
        &self,
        out: &mut String,
        name: &str,
        values: impl IntoIterator<Item = &'a Interval>,
    ) {
        for (i, &iv) in values.into_iter().enumerate() {
            writeln!(out, "  {name}[{}] = {}", i + 1, self.interval(iv)).unwrap();
        }
    }

    pub fn matrix(&self, out: &mut String, m: ArrayView2<Interval>) {
        for row in m.rows() {
            let cells = row
                .iter()
                .map(|&iv| self.interval(iv))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "  {cells}").unwrap();
        }
    }

    fn widths<'a>(&self, out: &mut String, values: impl IntoIterator<Item = &'a Interval>) {
        for (i, iv) in values.into_iter().enumerate() {
            writeln!(out, "  wid(x[{}]) = {}", i + 1, self.scalar(iv.width())).unwrap();
        }
    }
}

/// Renders a dense solve: optionally the triangularized system, then the
/// solution, its widths and the residual.
pub fn dense_report(
    method: &str,
    solution: &Solution,
    format: &IntervalFormat,
    print_triangular: bool,
) -> String {
    let mut out = String::new();
    writeln!(out, "method: {method}").unwrap();
    if !solution.skipped_columns.is_empty() {
        let columns = solution
            .skipped_columns
            .iter()
            .map(|k| (k + 1).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "skipped columns: {columns}").unwrap();
    }
    if print_triangular {
        out.push_str("triangular matrix:\n");
        format.matrix(&mut out, solution.triangular.view());
        out.push_str("transformed right-hand side:\n");
        format.vector(&mut out, "b", &solution.rhs);
    }
    out.push_str("solution:\n");
    format.vector(&mut out, "x", &solution.x);
    out.push_str("widths:\n");
    format.widths(&mut out, &solution.x);
    out.push_str("residual:\n");
    format.vector(&mut out, "r", &solution.residual);
    out
}

pub fn tridiagonal_report(
    method: &str,
    solution: &TridiagonalSolution,
    format: &IntervalFormat,
) -> String {
    let mut out = String::new();
    writeln!(out, "method: {method}").unwrap();
    out.push_str("solution:\n");
    format.vector(&mut out, "x", &solution.x);
    out.push_str("widths:\n");
    format.widths(&mut out, &solution.x);
    out.push_str("residual:\n");
    format.vector(&mut out, "r", &solution.residual);
    out
}
