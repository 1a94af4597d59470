#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::needless_range_loop)]
#![expect(clippy::must_use_candidate)]
#![expect(clippy::return_self_not_must_use)]
#![expect(clippy::missing_errors_doc)]
#![expect(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod extended;
pub mod interval;
pub mod matrix;
pub mod parser;
mod proptests;
pub mod report;
pub mod solvers;

pub use config::{DivisionPolicy, SolverConfig};
pub use error::{Error, Result};
pub use extended::{Arithmetic, Nonstandard, Standard};
pub use interval::Interval;
pub use solvers::{
    tridiagonal::{TridiagonalSolution, TridiagonalSystem},
    DirectSolver, Gauss, Givens, Householder, Method, Solution,
};
