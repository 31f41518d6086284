/*
 * Vector Module
 *
 * This module defines Vector2, the 2D value type every other part of the
 * simulation is built on. All public operations are pure: they take the
 * vector by value and return a new one. The compound assignment operators
 * (`+=`, `-=`, `*=`, `/=`) are the in-place fast path used by the integrator.
 *
 * Equality and hashing compare components rounded half-up to 8 decimal
 * places, so vectors that drifted apart through repeated normalize/resize
 * calls still compare equal. Rounding works on the shortest decimal form of
 * each component, not on its binary value.
 */

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Squared sizes below this are treated as the zero vector.
pub const ZERO_EPSILON: f64 = 1e-12;

/// Squared sizes within this distance of 1 are treated as unit vectors.
pub const UNIT_EPSILON: f64 = 1e-9;

const EQ_DIGITS: i64 = 8;

/// A vector in 2D coordinate space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

/// Shorthand constructor.
#[inline]
pub const fn vec2(x: f64, y: f64) -> Vector2 {
    Vector2 { x, y }
}

impl Vector2 {
    pub const ZERO: Vector2 = vec2(0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn by_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Vector of length `size` pointing at `angle` radians.
    pub fn by_angle_size(angle: f64, size: f64) -> Self {
        Self::by_angle(angle) * size
    }

    /// Same as [`Vector2::by_angle`], taking degrees.
    pub fn by_degrees(degrees: f64) -> Self {
        Self::by_angle(degrees * PI / 180.0)
    }

    #[inline]
    pub fn size_sqr(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn size(self) -> f64 {
        self.size_sqr().sqrt()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.size_sqr() < ZERO_EPSILON
    }

    pub fn is_unit(self) -> bool {
        (self.size_sqr() - 1.0).abs() < UNIT_EPSILON
    }

    /// Heading of this vector, `atan2(y, x)`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector with the same heading. The zero vector is returned unchanged.
    pub fn normalize(self) -> Self {
        if self.is_zero() {
            self
        } else {
            self / self.size()
        }
    }

    /// Same heading, new length. Equivalent to `normalize() * new_size`.
    pub fn resize(self, new_size: f64) -> Self {
        self.normalize() * new_size
    }

    /// Clamps the length to `max_size`, keeping the heading.
    ///
    /// This is the single clamping primitive used for forces and speeds.
    pub fn truncate(self, max_size: f64) -> Self {
        if self.size_sqr() <= max_size * max_size {
            self
        } else {
            self.normalize() * max_size
        }
    }

    /// Each component raised to `exponent`.
    pub fn pow(self, exponent: f64) -> Self {
        Self::new(self.x.powf(exponent), self.y.powf(exponent))
    }

    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// This vector rotated by 90 degrees: `(x, y) -> (-y, x)`.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The 2D cross product, `perp(self) . other`.
    pub fn perp_dot(self, other: Vector2) -> f64 {
        self.perp().dot(other)
    }

    pub fn rotate(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    pub fn distance_sqr(self, other: Vector2) -> f64 {
        (self - other).size_sqr()
    }

    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).size()
    }

    /// Reflects `ray` over `normal`: `ray - normal * (2 * ray . normal)`.
    pub fn reflect(ray: Vector2, normal: Vector2) -> Self {
        ray - normal * (2.0 * ray.dot(normal))
    }
}

/// A component rounded half-up to `EQ_DIGITS` fractional digits, kept exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Quantized {
    NegInfinity,
    /// Magnitude times 10^8 as decimal digits without leading zeros ("" is zero).
    Finite { negative: bool, scaled: Vec<u8> },
    PosInfinity,
}

fn quantize(v: f64) -> Quantized {
    if v.is_nan() {
        return Quantized::Finite { negative: false, scaled: Vec::new() };
    }
    if v.is_infinite() {
        return if v > 0.0 { Quantized::PosInfinity } else { Quantized::NegInfinity };
    }

    // Shortest round-trip form, e.g. "1.5e-8" or "3.0000000000000004e-1"
    let repr = format!("{:e}", v.abs());
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();

    let shift = exponent + EQ_DIGITS - (digits.len() as i64 - 1);
    if shift >= 0 {
        digits.resize(digits.len() + shift as usize, 0);
    } else {
        let dropped = shift.unsigned_abs() as usize;
        if dropped > digits.len() {
            digits.clear();
        } else {
            let keep = digits.len() - dropped;
            let round_up = digits[keep] >= 5;
            digits.truncate(keep);
            if round_up {
                increment(&mut digits);
            }
        }
    }

    let first = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    digits.drain(..first);
    Quantized::Finite {
        negative: v < 0.0 && !digits.is_empty(),
        scaled: digits,
    }
}

// Adds one to a big-endian decimal digit string.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        quantize(self.x) == quantize(other.x) && quantize(self.y) == quantize(other.y)
    }
}

impl Eq for Vector2 {}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x).hash(state);
        quantize(self.y).hash(state);
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

// Division is multiplication by the reciprocal, so a zero divisor yields
// infinite or NaN components rather than a panic.
impl Div<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn div(self, scalar: f64) -> Vector2 {
        self * (1.0 / scalar)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f64> for Vector2 {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        *self *= 1.0 / scalar;
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, |acc, v| acc + v)
    }
}
