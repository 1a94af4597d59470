use crate::{
    error::{Error, Result},
    extended::Arithmetic,
    interval::Interval,
};

/// Columns whose reflection norm or rotation radius has a lower bound below this are skipped.
pub const DEFAULT_THRESHOLD: f64 = 1e-12;

/// Stand-in for a quotient by a zero-containing divisor under [`DivisionPolicy::Legacy`].
pub const LEGACY_SENTINEL: Interval = Interval::new(-1e10, 1e10);

/// What a solver does when an elimination or rotation step divides by an
/// interval that contains zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Fail with [`Error::DegenerateDivisor`].
    #[default]
    Strict,
    /// Log a warning and continue with [`LEGACY_SENTINEL`].
    Legacy,
}

#[derive(Clone, Debug)]
pub struct SolverConfig {
    pub threshold: f64,
    pub division: DivisionPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            division: DivisionPolicy::Strict,
        }
    }
}

impl SolverConfig {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_division_policy(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }

    /// Divides with the operator set `A`, applying the division policy.
    pub fn divide<A: Arithmetic>(&self, a: Interval, b: Interval) -> Result<Interval> {
        match A::div(a, b) {
            Err(Error::DegenerateDivisor { dividend, divisor })
                if self.division == DivisionPolicy::Legacy =>
            {
                tracing::warn!(
                    %dividend,
                    %divisor,
                    "division by an interval containing zero; substituting {LEGACY_SENTINEL}"
                );
                Ok(LEGACY_SENTINEL)
            }
            result => result,
        }
    }
}
