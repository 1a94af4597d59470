use std::{
    cmp::Ordering,
    f64::consts::{FRAC_PI_2, PI},
    fmt::{Display, Formatter},
    iter::Sum,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, RangeInclusive, Sub, SubAssign},
};

use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// A closed real interval `[lo, hi]`.
///
/// Nothing checks `lo <= hi` on construction. Correct arithmetic on valid
/// operands never produces an inverted interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The degenerate interval `[x, x]`.
    #[inline]
    pub const fn point(x: f64) -> Self {
        Self::new(x, x)
    }

    /// The interval `[mid - radius, mid + radius]`.
    #[inline]
    pub fn from_mid_rad(mid: f64, radius: f64) -> Self {
        Self::new(mid - radius, mid + radius)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// Half the width.
    #[inline]
    pub fn radius(&self) -> f64 {
        (self.hi - self.lo) / 2.0
    }

    /// The `(mid, radius)` pair that [`Interval::from_mid_rad`] accepts.
    #[inline]
    pub fn to_mid_rad(&self) -> (f64, f64) {
        (self.midpoint(), self.radius())
    }

    /// Real-valued size proxy `max(|lo|, |hi|)`, used to rank pivot candidates.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.lo.abs().max(self.hi.abs())
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    #[inline]
    pub fn straddles_zero(&self) -> bool {
        self.contains(0.0)
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.lo.is_nan() || self.hi.is_nan()
    }

    /// Smallest interval spanning two values, in either order.
    #[inline]
    pub(crate) fn hull(x: f64, y: f64) -> Self {
        Self::new(x.min(y), x.max(y))
    }

    /// Smallest interval spanning all four corner values.
    #[inline]
    pub(crate) fn hull4(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(a.min(b).min(c).min(d), a.max(b).max(c).max(d))
    }

    /// Standard division: the hull of the four corner quotients.
    ///
    /// Fails with [`Error::DegenerateDivisor`] when `rhs` contains zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.straddles_zero() {
            return Err(Error::DegenerateDivisor {
                dividend: self,
                divisor: rhs,
            });
        }
        Ok(Self::hull4(
            self.lo / rhs.lo,
            self.lo / rhs.hi,
            self.hi / rhs.lo,
            self.hi / rhs.hi,
        ))
    }

    /// `self^exp` by repeated multiplication, so `a^1 = a` and `a^0 = [1, 1]`.
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let mut result = *self;
        for _ in 1..exp {
            result = result * *self;
        }
        result
    }

    /// Square root of both endpoints; a negative lower bound is clamped to zero.
    pub fn sqrt(&self) -> Self {
        let lo = if self.lo < 0.0 { 0.0 } else { self.lo.sqrt() };
        Self::new(lo, self.hi.sqrt())
    }

    /// Tangent, or the whole real line when a pole `π/2 + kπ` lies in the interval.
    ///
    /// Between two consecutive poles `tan` is increasing, so the endpoint images bound it.
    pub fn tan(&self) -> Self {
        let k = ((self.lo - FRAC_PI_2) / PI).floor() + 1.0;
        let pole = FRAC_PI_2 + PI * k;
        if self.contains(pole) {
            return Self::new(f64::NEG_INFINITY, f64::INFINITY);
        }
        Self::hull(self.lo.tan(), self.hi.tan())
    }

    /// Hull of `hypot` over the four corner pairs.
    pub fn hypot(&self, other: &Self) -> Self {
        Self::hull4(
            self.lo.hypot(other.lo),
            self.lo.hypot(other.hi),
            self.hi.hypot(other.lo),
            self.hi.hypot(other.hi),
        )
    }
}

/// Sorts intervals so that `a < b` (disjoint, `a` left of `b`) implies `a` comes first.
///
/// Overlapping intervals are unordered under `<`; they end up sorted by lower then upper bound.
pub fn sort_intervals(intervals: &mut [Interval]) {
    intervals.sort_by(|a, b| a.lo.total_cmp(&b.lo).then(a.hi.total_cmp(&b.hi)));
}

impl From<f64> for Interval {
    #[inline]
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}

impl From<RangeInclusive<f64>> for Interval {
    #[inline]
    fn from(range: RangeInclusive<f64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl Zero for Interval {
    #[inline]
    fn zero() -> Self {
        Self::point(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.lo == 0.0 && self.hi == 0.0
    }
}

impl One for Interval {
    #[inline]
    fn one() -> Self {
        Self::point(1.0)
    }
}

impl Neg for Interval {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.hi, -self.lo)
    }
}

impl Add for Interval {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.lo + rhs.lo, self.hi + rhs.hi)
    }
}

impl AddAssign for Interval {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Interval {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.lo - rhs.hi, self.hi - rhs.lo)
    }
}

impl SubAssign for Interval {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Interval {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::hull4(
            self.lo * rhs.lo,
            self.lo * rhs.hi,
            self.hi * rhs.lo,
            self.hi * rhs.hi,
        )
    }
}

impl MulAssign for Interval {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f64> for Interval {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        if rhs >= 0.0 {
            Self::new(self.lo * rhs, self.hi * rhs)
        } else {
            Self::new(self.hi * rhs, self.lo * rhs)
        }
    }
}

impl Mul<Interval> for f64 {
    type Output = Interval;

    #[inline]
    fn mul(self, rhs: Interval) -> Self::Output {
        rhs * self
    }
}

impl MulAssign<f64> for Interval {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Sum for Interval {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Interval> for Interval {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut lo = ryu::Buffer::new();
        let mut hi = ryu::Buffer::new();
        write!(f, "[{}, {}]", lo.format(self.lo), hi.format(self.hi))
    }
}

/// `a < b` iff `a.hi < b.lo`; overlapping distinct intervals are incomparable.
impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.hi < other.lo {
            Some(Ordering::Less)
        } else if self.lo > other.hi {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
