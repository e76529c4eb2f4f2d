//! Rational number and canonical frame rate types.
//!
//! Frame rates are kept as exact rationals so that visually similar rates
//! (24 vs 23.976) are never conflated by a float tolerance, and so that
//! frame arithmetic stays exact across multi-hour timelines.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A rational number represented as a numerator and denominator.
///
/// Used for precise representation of frame rates and time bases.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    /// Numerator.
    pub num: i64,
    /// Denominator (kept positive).
    pub den: i64,
}

impl Rational {
    /// Create a new rational number.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero. Fallible construction for
    /// externally supplied values goes through [`FrameRate::from_rational`].
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Denominator cannot be zero");
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        Self { num, den }
    }

    /// Create a rational from an integer.
    pub const fn from_int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// A zero rational.
    pub const fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    /// Check if this rational is zero.
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Check if this rational is positive.
    pub fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Reduce the rational to its simplest form.
    pub fn reduce(&self) -> Self {
        if self.num == 0 {
            return Self { num: 0, den: 1 };
        }
        let g = gcd(self.num.unsigned_abs(), self.den.unsigned_abs());
        Self {
            num: self.num / g as i64,
            den: self.den / g as i64,
        }
    }

    /// Convert to f64.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Get the reciprocal of this rational.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is zero.
    pub fn recip(&self) -> Self {
        assert!(self.num != 0, "Cannot take reciprocal of zero");
        Self::new(self.den, self.num)
    }

    /// Rescale an integer count of `self`-sized units into `target`-sized
    /// units, truncating toward zero. Intermediate math runs in `i128` so
    /// long timelines cannot overflow.
    pub fn rescale(&self, value: i64, target: Rational) -> i64 {
        let num = value as i128 * self.num as i128 * target.den as i128;
        let den = self.den as i128 * target.num as i128;
        (num / den) as i64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let num = self.num * rhs.den + rhs.num * self.den;
        let den = self.den * rhs.den;
        Self::new(num, den).reduce()
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let num = self.num * rhs.den - rhs.num * self.den;
        let den = self.den * rhs.den;
        Self::new(num, den).reduce()
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.num * rhs.num, self.den * rhs.den).reduce()
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(self.num * rhs.den, self.den * rhs.num).reduce()
    }
}

/// Calculate the greatest common divisor using the Euclidean algorithm.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Absolute tolerance used only while *canonicalizing* a float input to a
/// rational. Once canonical, all comparisons are exact.
const CANONICALIZE_EPSILON: f64 = 1e-3;

/// Denominator used for the generic (non-broadcast) float fallback.
const GENERIC_DENOMINATOR: i64 = 1_000_000;

/// A canonical, always-reduced rational frame rate.
///
/// Equality is exact rational equality: `FrameRate::from_float(24.0)` and
/// `FrameRate::from_float(23.976)` compare unequal even though their float
/// renderings round to similar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate(Rational);

impl FrameRate {
    /// Create a frame rate from a rational pair.
    ///
    /// Returns an error if either component is non-positive.
    pub fn from_rational(numerator: i64, denominator: i64) -> Result<Self> {
        if numerator <= 0 || denominator <= 0 {
            return Err(Error::invalid_frame_rate(numerator, denominator));
        }
        Ok(Self(Rational::new(numerator, denominator).reduce()))
    }

    /// Canonicalize a floating-point frame rate to its exact rational.
    ///
    /// Integer rates map to `(n, 1)`; NTSC-family rates map to
    /// `(n*1000, 1001)` (23.976 becomes 24000/1001, 29.97 becomes
    /// 30000/1001, 59.94 becomes 60000/1001); anything else is captured
    /// generically at micro precision and reduced. No allow-list is
    /// consulted, so non-broadcast rates are accepted as-is.
    pub fn from_float(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(Error::InvalidFrameRateValue {
                value: format!("{fps}"),
            });
        }

        let nearest = fps.round();
        if (fps - nearest).abs() < CANONICALIZE_EPSILON {
            return Self::from_rational(nearest as i64, 1);
        }

        let ntsc_base = (fps * 1001.0 / 1000.0).round();
        if ntsc_base > 0.0 && (fps - ntsc_base * 1000.0 / 1001.0).abs() < CANONICALIZE_EPSILON {
            return Self::from_rational(ntsc_base as i64 * 1000, 1001);
        }

        Self::from_rational(
            (fps * GENERIC_DENOMINATOR as f64).round() as i64,
            GENERIC_DENOMINATOR,
        )
    }

    /// The canonical rational behind this frame rate.
    pub fn as_rational(&self) -> Rational {
        self.0
    }

    /// Numerator of the reduced rational.
    pub fn numerator(&self) -> i64 {
        self.0.num
    }

    /// Denominator of the reduced rational.
    pub fn denominator(&self) -> i64 {
        self.0.den
    }

    /// Frames per second as a float, for display and approximate timing only.
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Strict compatibility check: true only when both rates reduce to the
    /// identical rational. Never a float comparison.
    pub fn is_compatible(&self, other: &FrameRate) -> bool {
        self.0 == other.0
    }

    /// Nominal integer frame base for timecode display, `ceil(num/den)`.
    ///
    /// 24000/1001 has base 24; 30000/1001 has base 30.
    pub fn frame_base(&self) -> u32 {
        ((self.0.num + self.0.den - 1) / self.0.den) as u32
    }

    /// Whether this rate belongs to the NTSC 1/1001 family.
    pub fn is_ntsc_family(&self) -> bool {
        self.0.den == 1001
    }

    /// Whether drop-frame timecode is meaningful for this rate.
    ///
    /// Drop-frame counting exists for NTSC-family rates whose nominal base
    /// is a multiple of 30 (29.97, 59.94, 119.88, ...). 23.976 is NTSC but
    /// never uses drop-frame.
    pub fn supports_drop_frame(&self) -> bool {
        self.is_ntsc_family() && self.frame_base() % 30 == 0
    }

    /// Integer timescale for downstream lossless time math.
    ///
    /// Favors exact denominators: ticks per second is the reduced
    /// numerator, so one frame is exactly `denominator()` ticks.
    /// 24000/1001 yields timescale 24000 with 1001-tick frames.
    pub fn timescale(&self) -> i64 {
        self.0.num
    }

    /// Human-readable description including the exact rational,
    /// e.g. `"23.976fps (24000/1001) drop-frame"`.
    pub fn describe(&self, drop_frame: bool) -> String {
        let mode = if drop_frame { "drop-frame" } else { "non-drop" };
        if self.0.den == 1 {
            format!("{}fps ({}/1) {}", self.0.num, self.0.num, mode)
        } else {
            format!(
                "{:.3}fps ({}/{}) {}",
                self.as_f64(),
                self.0.num,
                self.0.den,
                mode
            )
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.den == 1 {
            write!(f, "{}", self.0.num)
        } else {
            write!(f, "{:.3}", self.as_f64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rational_new() {
        let r = Rational::new(1, 2);
        assert_eq!(r.num, 1);
        assert_eq!(r.den, 2);
    }

    #[test]
    fn test_rational_negative_den() {
        let r = Rational::new(1, -2);
        assert_eq!(r.num, -1);
        assert_eq!(r.den, 2);
    }

    #[test]
    fn test_rational_reduce() {
        let r = Rational::new(24000, 2002).reduce();
        assert_eq!(r, Rational::new(12000, 1001));
    }

    #[test]
    fn test_rational_ord_exact() {
        // 24000/1001 < 24/1 even though both round to "24-ish"
        assert!(Rational::new(24000, 1001) < Rational::new(24, 1));
    }

    #[test]
    fn test_rational_arithmetic() {
        let a = Rational::new(1, 2);
        let b = Rational::new(1, 3);
        assert_eq!(a + b, Rational::new(5, 6));
        assert_eq!(a - b, Rational::new(1, 6));
        assert_eq!(a * b, Rational::new(1, 6));
        assert_eq!(a / b, Rational::new(3, 2));
    }

    #[test]
    fn test_rescale() {
        // 100 frames of 1/24s into 1/48s units
        let frame_24 = Rational::new(1, 24);
        let frame_48 = Rational::new(1, 48);
        assert_eq!(frame_24.rescale(100, frame_48), 200);
    }

    #[test]
    fn test_from_float_integer_rates() {
        assert_eq!(
            FrameRate::from_float(24.0).unwrap(),
            FrameRate::from_rational(24, 1).unwrap()
        );
        assert_eq!(
            FrameRate::from_float(25.0).unwrap(),
            FrameRate::from_rational(25, 1).unwrap()
        );
        assert_eq!(
            FrameRate::from_float(60.0).unwrap(),
            FrameRate::from_rational(60, 1).unwrap()
        );
    }

    #[test]
    fn test_from_float_ntsc_rates() {
        assert_eq!(
            FrameRate::from_float(23.976).unwrap(),
            FrameRate::from_rational(24000, 1001).unwrap()
        );
        // Longer float renderings canonicalize to the same rational
        assert_eq!(
            FrameRate::from_float(23.976_025).unwrap(),
            FrameRate::from_rational(24000, 1001).unwrap()
        );
        assert_eq!(
            FrameRate::from_float(29.97).unwrap(),
            FrameRate::from_rational(30000, 1001).unwrap()
        );
        assert_eq!(
            FrameRate::from_float(59.94).unwrap(),
            FrameRate::from_rational(60000, 1001).unwrap()
        );
    }

    #[test]
    fn test_from_float_generic_rate() {
        // Non-broadcast rates are accepted without an allow-list
        let rate = FrameRate::from_float(15.5).unwrap();
        assert_eq!(rate, FrameRate::from_rational(31, 2).unwrap());
    }

    #[test]
    fn test_from_float_rejects_non_positive() {
        assert!(FrameRate::from_float(0.0).is_err());
        assert!(FrameRate::from_float(-24.0).is_err());
        assert!(FrameRate::from_float(f64::NAN).is_err());
    }

    #[test]
    fn test_from_rational_rejects_zero_den() {
        assert!(FrameRate::from_rational(24, 0).is_err());
        assert!(FrameRate::from_rational(0, 1).is_err());
        assert!(FrameRate::from_rational(-30000, 1001).is_err());
    }

    #[test]
    fn test_strict_compatibility() {
        let film = FrameRate::from_float(24.0).unwrap();
        let ntsc_film = FrameRate::from_float(23.976).unwrap();

        assert!(!film.is_compatible(&ntsc_film));
        assert!(!ntsc_film.is_compatible(&film));
        assert!(ntsc_film.is_compatible(&FrameRate::from_float(23.976).unwrap()));
        assert!(film.is_compatible(&FrameRate::from_rational(48, 2).unwrap()));
    }

    #[test]
    fn test_frame_base() {
        assert_eq!(FrameRate::from_rational(24, 1).unwrap().frame_base(), 24);
        assert_eq!(
            FrameRate::from_rational(24000, 1001).unwrap().frame_base(),
            24
        );
        assert_eq!(
            FrameRate::from_rational(30000, 1001).unwrap().frame_base(),
            30
        );
        assert_eq!(
            FrameRate::from_rational(60000, 1001).unwrap().frame_base(),
            60
        );
    }

    #[test]
    fn test_supports_drop_frame() {
        assert!(FrameRate::from_float(29.97).unwrap().supports_drop_frame());
        assert!(FrameRate::from_float(59.94).unwrap().supports_drop_frame());
        assert!(!FrameRate::from_float(23.976).unwrap().supports_drop_frame());
        assert!(!FrameRate::from_float(30.0).unwrap().supports_drop_frame());
    }

    #[test]
    fn test_timescale() {
        assert_eq!(FrameRate::from_float(23.976).unwrap().timescale(), 24000);
        assert_eq!(FrameRate::from_float(25.0).unwrap().timescale(), 25);
    }

    #[test]
    fn test_describe() {
        let rate = FrameRate::from_float(23.976).unwrap();
        assert_eq!(rate.describe(false), "23.976fps (24000/1001) non-drop");

        let rate = FrameRate::from_float(29.97).unwrap();
        assert_eq!(rate.describe(true), "29.970fps (30000/1001) drop-frame");

        let rate = FrameRate::from_float(24.0).unwrap();
        assert_eq!(rate.describe(false), "24fps (24/1) non-drop");
    }

    #[test]
    fn test_frame_rate_serialization() {
        let rate = FrameRate::from_float(59.94).unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let decoded: FrameRate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate, decoded);
    }
}
