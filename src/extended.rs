//! Non-standard interval operations and the operator sets that select between them.
//!
//! The non-standard subtraction and division pick endpoint combinations
//! instead of forming inclusion-isotone hulls. They are kept apart from the
//! `std::ops` implementations on [`Interval`], which are always standard.

use crate::{
    error::{Error, Result},
    interval::Interval,
};

/// `[min(a.lo - b.lo, a.hi - b.hi), max(a.lo - b.lo, a.hi - b.hi)]`.
#[inline]
pub fn sub_nonstandard(a: Interval, b: Interval) -> Interval {
    Interval::hull(a.lo - b.lo, a.hi - b.hi)
}

/// Non-standard division, chosen by the signs of both operands.
///
/// Each case takes two of the four corner quotients and returns their hull.
/// When the divisor contains zero the branch depends on how lopsided the two
/// operands are: `|a.hi| - |a.lo|` against `|b.hi| - |b.lo|`. These branches
/// have no derivation behind them and are kept exactly as they are.
///
/// NaN endpoints fall outside the table, and a selected quotient may divide
/// by a zero endpoint of a mixed divisor. Both yield
/// [`Error::UndefinedIntervalDivision`] rather than a non-finite bound.
pub fn div_nonstandard(a: Interval, b: Interval) -> Result<Interval> {
    let a_pos = a.lo > 0.0;
    let a_neg = a.hi < 0.0;
    let a_mixed = a.lo <= 0.0 && 0.0 <= a.hi;
    let b_pos = b.lo > 0.0;
    let b_neg = b.hi < 0.0;
    let b_mixed = b.lo <= 0.0 && 0.0 <= b.hi;
    let a_skew = a.hi.abs() - a.lo.abs();
    let b_skew = b.hi.abs() - b.lo.abs();

    let (x, y) = if a_pos && b_pos {
        (a.lo / b.lo, a.hi / b.hi)
    } else if a_neg && b_neg {
        (a.lo / b.lo, a.hi / b.hi)
    } else if a_pos && b_neg {
        (a.lo / b.hi, a.hi / b.lo)
    } else if a_neg && b_pos {
        (a.lo / b.hi, a.hi / b.lo)
    } else if a_mixed && b_pos {
        (a.lo / b.hi, a.hi / b.hi)
    } else if a_mixed && b_neg {
        (a.lo / b.lo, a.hi / b.lo)
    } else if a_pos && b_mixed && a_skew > b_skew {
        (a.lo / b.lo, a.hi / b.hi)
    } else if a_pos && b_mixed {
        (a.lo / b.lo, a.lo / b.hi)
    } else if a_neg && b_mixed && a_skew > b_skew {
        (a.lo / b.lo, a.hi / b.hi)
    } else if a_neg && b_mixed {
        (a.hi / b.lo, a.hi / b.hi)
    } else if a_mixed && b_mixed && a_skew >= b_skew {
        (a.hi / b.lo, a.hi / b.hi)
    } else if a_mixed && b_mixed && a_skew < b_skew {
        (a.hi / b.lo, a.lo / b.lo)
    } else {
        return Err(Error::UndefinedIntervalDivision {
            dividend: a,
            divisor: b,
        });
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::UndefinedIntervalDivision {
            dividend: a,
            divisor: b,
        });
    }
    Ok(Interval::hull(x, y))
}

/// An interval operator set. Addition and multiplication are shared; only
/// subtraction and division vary.
pub trait Arithmetic {
    const NAME: &'static str;

    fn sub(a: Interval, b: Interval) -> Interval;

    fn div(a: Interval, b: Interval) -> Result<Interval>;
}

/// Inclusion-isotone operators, as implemented on [`Interval`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Standard;

impl Arithmetic for Standard {
    const NAME: &'static str = "standard";

    #[inline]
    fn sub(a: Interval, b: Interval) -> Interval {
        a - b
    }

    #[inline]
    fn div(a: Interval, b: Interval) -> Result<Interval> {
        a.checked_div(b)
    }
}

/// [`sub_nonstandard`] and [`div_nonstandard`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Nonstandard;

impl Arithmetic for Nonstandard {
    const NAME: &'static str = "non-standard";

    #[inline]
    fn sub(a: Interval, b: Interval) -> Interval {
        sub_nonstandard(a, b)
    }

    #[inline]
    fn div(a: Interval, b: Interval) -> Result<Interval> {
        div_nonstandard(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lo: f64, hi: f64) -> Interval {
        Interval::new(lo, hi)
    }

    #[test]
    fn nonstandard_subtraction_is_componentwise() {
        assert_eq!(sub_nonstandard(iv(1.0, 5.0), iv(0.0, 2.0)), iv(1.0, 3.0));
        assert_eq!(sub_nonstandard(iv(1.0, 2.0), iv(0.0, 4.0)), iv(-2.0, 1.0));
        // the standard difference is wider
        assert_eq!(iv(1.0, 5.0) - iv(0.0, 2.0), iv(-1.0, 5.0));
    }

    #[test]
    fn both_positive() {
        assert_eq!(div_nonstandard(iv(2.0, 8.0), iv(1.0, 4.0)), Ok(iv(2.0, 2.0)));
        assert_eq!(div_nonstandard(iv(1.0, 2.0), iv(4.0, 5.0)), Ok(iv(0.25, 0.4)));
    }

    #[test]
    fn both_negative() {
        assert_eq!(
            div_nonstandard(iv(-8.0, -2.0), iv(-4.0, -1.0)),
            Ok(iv(2.0, 2.0))
        );
        assert_eq!(
            div_nonstandard(iv(-6.0, -1.0), iv(-2.0, -1.0)),
            Ok(iv(1.0, 3.0))
        );
    }

    #[test]
    fn opposite_signs() {
        // a.lo / b.hi, a.hi / b.lo
        assert_eq!(
            div_nonstandard(iv(2.0, 8.0), iv(-4.0, -1.0)),
            Ok(iv(-2.0, -2.0))
        );
        assert_eq!(
            div_nonstandard(iv(-8.0, -2.0), iv(1.0, 2.0)),
            Ok(iv(-4.0, -2.0))
        );
    }

    #[test]
    fn mixed_dividend() {
        // a.lo / b.hi, a.hi / b.hi
        assert_eq!(
            div_nonstandard(iv(-2.0, 4.0), iv(1.0, 2.0)),
            Ok(iv(-1.0, 2.0))
        );
        // a.lo / b.lo, a.hi / b.lo
        assert_eq!(
            div_nonstandard(iv(-2.0, 4.0), iv(-2.0, -1.0)),
            Ok(iv(-2.0, 1.0))
        );
    }

    #[test]
    fn positive_dividend_mixed_divisor() {
        // skew(a) = 3 > skew(b) = 1: a.lo / b.lo, a.hi / b.hi
        assert_eq!(
            div_nonstandard(iv(1.0, 4.0), iv(-1.0, 2.0)),
            Ok(iv(-1.0, 2.0))
        );
        // skew(a) = 1 <= skew(b) = 3: a.lo / b.lo, a.lo / b.hi
        assert_eq!(
            div_nonstandard(iv(1.0, 2.0), iv(-1.0, 4.0)),
            Ok(iv(-1.0, 0.25))
        );
    }

    #[test]
    fn negative_dividend_mixed_divisor() {
        // skew(a) = 2 - 4 = -2 > skew(b) = 1 - 4 = -3: a.lo / b.lo, a.hi / b.hi
        assert_eq!(
            div_nonstandard(iv(-4.0, -2.0), iv(-4.0, 1.0)),
            Ok(iv(-2.0, 1.0))
        );
        // skew(a) = -2 <= skew(b) = 1: a.hi / b.lo, a.hi / b.hi
        assert_eq!(
            div_nonstandard(iv(-4.0, -2.0), iv(-1.0, 2.0)),
            Ok(iv(-1.0, 2.0))
        );
    }

    #[test]
    fn both_mixed() {
        // skew(a) = 2 >= skew(b) = 1: a.hi / b.lo, a.hi / b.hi
        assert_eq!(
            div_nonstandard(iv(-1.0, 3.0), iv(-1.0, 2.0)),
            Ok(iv(-3.0, 1.5))
        );
        // equal skew takes the same branch
        assert_eq!(
            div_nonstandard(iv(-1.0, 2.0), iv(-2.0, 3.0)),
            Ok(iv(-1.0, 2.0 / 3.0))
        );
        // skew(a) = 1 < skew(b) = 3: a.hi / b.lo, a.lo / b.lo
        assert_eq!(
            div_nonstandard(iv(-1.0, 2.0), iv(-1.0, 4.0)),
            Ok(iv(-2.0, 1.0))
        );
    }

    #[test]
    fn nan_is_undefined() {
        let a = iv(f64::NAN, 1.0);
        let b = iv(1.0, 2.0);
        assert!(matches!(
            div_nonstandard(a, b),
            Err(Error::UndefinedIntervalDivision { .. })
        ));
    }

    #[test]
    fn zero_divisor_endpoint_is_undefined() {
        for (a, b) in [
            (iv(0.0, 1.0), iv(0.0, 1.0)),
            (iv(-1.0, 1.0), iv(0.0, 1.0)),
            (iv(1.0, 2.0), iv(-1.0, 0.0)),
            (iv(0.0, 0.0), iv(0.0, 0.0)),
        ] {
            assert_eq!(
                div_nonstandard(a, b),
                Err(Error::UndefinedIntervalDivision {
                    dividend: a,
                    divisor: b
                }),
                "{a} / {b}"
            );
        }
    }

    #[test]
    fn matches_standard_division_for_point_divisors() {
        let divisors = [iv(2.0, 2.0), iv(-0.5, -0.5), iv(3.0, 3.0)];
        let dividends = [iv(1.0, 2.0), iv(-3.0, -1.0), iv(-1.0, 4.0), iv(0.5, 0.5)];
        for b in divisors {
            for a in dividends {
                assert_eq!(div_nonstandard(a, b), a.checked_div(b), "{a} / {b}");
            }
        }
    }

    #[test]
    fn nonstandard_quotient_lies_inside_standard_quotient() {
        let divisors = [iv(1.0, 3.0), iv(-4.0, -0.5), iv(0.25, 8.0)];
        let dividends = [iv(1.0, 2.0), iv(-3.0, -1.0), iv(-1.0, 4.0), iv(-2.0, 0.5)];
        for b in divisors {
            for a in dividends {
                let outer = a.checked_div(b).unwrap();
                let inner = div_nonstandard(a, b).unwrap();
                assert!(
                    outer.lo <= inner.lo && inner.hi <= outer.hi,
                    "{a} / {b}: {inner} not inside {outer}"
                );
            }
        }
    }

    #[test]
    fn operator_sets() {
        let a = iv(1.0, 5.0);
        let b = iv(0.0, 2.0);
        assert_eq!(Standard::sub(a, b), a - b);
        assert_eq!(Nonstandard::sub(a, b), sub_nonstandard(a, b));
        assert!(Standard::div(a, b).is_err());
        assert!(Nonstandard::div(a, b).is_ok());
    }
}
