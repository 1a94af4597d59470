#![warn(clippy::pedantic)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ivsolve::{
    parser::{self, System},
    report::{self, IntervalFormat},
    DivisionPolicy, Method, Nonstandard, SolverConfig, Standard,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// Gaussian elimination with partial pivoting
    Gauss,
    /// Householder reflections
    Householder,
    /// Givens rotations
    Givens,
    /// Min/max double sweep on endpoint coefficients (tridiagonal only)
    Sweep,
    /// Double sweep in interval arithmetic (tridiagonal only)
    IntervalSweep,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// The file containing the interval system
    file_name: PathBuf,
    /// The solution method
    ///
    /// Defaults to `gauss` for dense systems and `sweep` for tridiagonal ones.
    /// The dense methods also accept tridiagonal systems.
    #[arg(short, long, value_enum)]
    method: Option<MethodArg>,
    /// Use non-standard subtraction and division in the interval sweep
    ///
    /// Only valid together with `--method interval-sweep`.
    #[arg(long)]
    nonstandard: bool,
    /// Replace quotients by zero-containing intervals with [-1e10, 1e10] instead of failing
    #[arg(long)]
    legacy_division: bool,
    /// Skip reflections and rotations whose norm has a lower bound below this value
    #[arg(long, default_value_t = ivsolve::config::DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Digits after the decimal point in the output
    #[arg(short, long, default_value_t = 6)]
    precision: usize,
    /// Minimum field width of each printed endpoint
    #[arg(short, long, default_value_t = 0)]
    width: usize,
    /// Print the triangularized matrix and right-hand side
    #[arg(long)]
    print_triangular: bool,
    /// Log solver steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Runs a dense solver; tridiagonal systems are expanded first.
fn solve_dense(
    method: Method,
    system: System,
    config: &SolverConfig,
    format: &IntervalFormat,
    args: &CliArgs,
) -> anyhow::Result<String> {
    let (a, b) = match system {
        System::Dense { a, b } => (a, b),
        System::Tridiagonal(system) => system.to_dense(),
    };
    let solution = method.solver().solve(&a, &b, config)?;
    Ok(report::dense_report(
        &method.to_string(),
        &solution,
        format,
        args.print_triangular,
    ))
}

pub fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let system = parser::parse_file(&args.file_name)
        .with_context(|| format!("failed to read {}", args.file_name.display()))?;
    let config = SolverConfig::default()
        .with_threshold(args.threshold)
        .with_division_policy(if args.legacy_division {
            DivisionPolicy::Legacy
        } else {
            DivisionPolicy::Strict
        });
    let format = IntervalFormat::default()
        .with_width(args.width)
        .with_precision(args.precision);

    let method = args.method.unwrap_or(match system {
        System::Dense { .. } => MethodArg::Gauss,
        System::Tridiagonal(_) => MethodArg::Sweep,
    });
    if args.nonstandard && method != MethodArg::IntervalSweep {
        bail!("--nonstandard only applies to --method interval-sweep");
    }
    let output = match (method, system) {
        (MethodArg::Sweep, System::Tridiagonal(system)) => {
            let solution = system.solve_envelope()?;
            report::tridiagonal_report("sweep", &solution, &format)
        }
        (MethodArg::IntervalSweep, System::Tridiagonal(system)) => {
            let (name, solution) = if args.nonstandard {
                (
                    "interval sweep (non-standard)",
                    system.solve_interval::<Nonstandard>(&config)?,
                )
            } else {
                (
                    "interval sweep (standard)",
                    system.solve_interval::<Standard>(&config)?,
                )
            };
            report::tridiagonal_report(name, &solution, &format)
        }
        (MethodArg::Sweep | MethodArg::IntervalSweep, System::Dense { .. }) => {
            bail!("the sweep methods need a tridiagonal system")
        }
        (MethodArg::Gauss, system) => solve_dense(Method::Gauss, system, &config, &format, &args)?,
        (MethodArg::Householder, system) => {
            solve_dense(Method::Householder, system, &config, &format, &args)?
        }
        (MethodArg::Givens, system) => solve_dense(Method::Givens, system, &config, &format, &args)?,
    };
    print!("{output}");
    Ok(())
}
