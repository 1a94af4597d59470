use thiserror::Error;

use crate::interval::Interval;

/// Errors raised by the interval kernel and the solvers built on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Standard division by an interval that contains zero.
    #[error("division of {dividend} by {divisor}, which contains zero")]
    DegenerateDivisor { dividend: Interval, divisor: Interval },

    /// The sign configuration of the operands matches no row of the non-standard division table.
    #[error("non-standard division of {dividend} by {divisor} is undefined")]
    UndefinedIntervalDivision { dividend: Interval, divisor: Interval },

    /// Back-substitution (or a sweep) hit a zero or zero-containing divisor in the given row.
    #[error("system is singular: zero divisor in row {row}")]
    SingularSystem { row: usize },

    /// Operand shapes do not fit together.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("system has no equations")]
    EmptySystem,
}

pub type Result<T> = std::result::Result<T, Error>;
