//! The complex number value type and its named operations
//!
//! Every operation here is a closed-form formula over the two `f64`
//! components. Nothing is normalized: signed zeros, infinities and NaN
//! propagate exactly as IEEE-754 dictates.

use bytemuck::{Pod, Zeroable};
use num_traits::Float;

/// A complex number with double-precision real and imaginary parts
///
/// The layout is fixed (`repr(C)`, real part first) so slices of
/// `Complex` can be viewed as interleaved `f64` pairs.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit `0 + 1i`
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a complex number from its components
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number with a zero imaginary part
    pub const fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Real part
    pub const fn real(&self) -> f64 {
        self.re
    }

    /// Imaginary part
    pub const fn imaginary(&self) -> f64 {
        self.im
    }

    /// Overwrite both components
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Overwrite the real part and clear the imaginary part
    pub fn set_real(&mut self, re: f64) {
        self.set(re, 0.0);
    }

    /// Magnitude `sqrt(re² + im²)`
    ///
    /// Computed with the plain formula rather than `hypot`, so values whose
    /// squares overflow yield `+inf`.
    pub fn abs(&self) -> f64 {
        Float::sqrt(self.re * self.re + self.im * self.im)
    }

    /// Explicit conversion to a real scalar: the magnitude
    pub fn to_scalar(&self) -> f64 {
        self.abs()
    }

    /// `self + other`
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    /// `self - other`
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    /// `self * other`
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// `self + value`, with `value` taken as `value + 0i`
    ///
    /// Like the other scalar operations this works per component: only the
    /// real part changes, so the imaginary part (including `-0.0`) is kept
    /// as is.
    pub fn add_scalar(self, value: f64) -> Self {
        Self::new(self.re + value, self.im)
    }

    /// `self - value`, with `value` taken as `value + 0i`
    pub fn subtract_scalar(self, value: f64) -> Self {
        Self::new(self.re - value, self.im)
    }

    /// `self * value`, scaling both components
    ///
    /// No `0 * inf` cross terms arise, so `(inf, 1) * 2` is `(inf, 2)`
    /// rather than the `(inf, NaN)` the full complex product would give.
    pub fn multiply_scalar(self, value: f64) -> Self {
        Self::new(self.re * value, self.im * value)
    }

    /// `self / value`, dividing both components
    ///
    /// Division by zero is not checked: the components become infinite or
    /// NaN as the IEEE-754 quotient dictates.
    pub fn divide_scalar(self, value: f64) -> Self {
        Self::new(self.re / value, self.im / value)
    }

    /// In-place `self += other`, returning `self` for chaining
    #[allow(clippy::should_implement_trait)]
    pub fn add_assign(&mut self, other: Self) -> &mut Self {
        *self = Complex::add(*self, other);
        self
    }

    /// In-place `self -= other`
    pub fn subtract_assign(&mut self, other: Self) -> &mut Self {
        *self = self.subtract(other);
        self
    }

    /// In-place `self *= other`
    pub fn multiply_assign(&mut self, other: Self) -> &mut Self {
        *self = self.multiply(other);
        self
    }

    /// In-place `self += value`
    pub fn add_assign_scalar(&mut self, value: f64) -> &mut Self {
        *self = self.add_scalar(value);
        self
    }

    /// In-place `self -= value`
    pub fn subtract_assign_scalar(&mut self, value: f64) -> &mut Self {
        *self = self.subtract_scalar(value);
        self
    }

    /// In-place `self *= value`
    pub fn multiply_assign_scalar(&mut self, value: f64) -> &mut Self {
        *self = self.multiply_scalar(value);
        self
    }

    /// In-place `self /= value`
    pub fn divide_assign_scalar(&mut self, value: f64) -> &mut Self {
        *self = self.divide_scalar(value);
        self
    }

    /// Overwrite `self` with `other`
    pub fn assign(&mut self, other: Self) -> &mut Self {
        *self = other;
        self
    }

    /// Overwrite `self` with `value + 0i`
    pub fn assign_scalar(&mut self, value: f64) -> &mut Self {
        self.set_real(value);
        self
    }
}

/// `value + c`
pub fn scalar_add(value: f64, c: Complex) -> Complex {
    Complex::new(value + c.re, c.im)
}

/// `value - c`, which is `(value - re, -im)`
pub fn scalar_subtract(value: f64, c: Complex) -> Complex {
    Complex::new(value - c.re, -c.im)
}

/// `value * c`
pub fn scalar_multiply(value: f64, c: Complex) -> Complex {
    c.multiply_scalar(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let c = Complex::new(1.5, -2.0);
        assert_eq!(c.real(), 1.5);
        assert_eq!(c.imaginary(), -2.0);

        assert_eq!(Complex::default(), Complex::ZERO);
        assert_eq!(Complex::from_real(4.0), Complex::new(4.0, 0.0));

        // Copies are independent values
        let copy = c;
        let mut other = copy;
        other.set(9.0, 9.0);
        assert_eq!(copy, c);
        assert_ne!(other, c);
    }

    #[test]
    fn test_set() {
        let mut c = Complex::new(1.0, 2.0);
        c.set(-3.0, 0.5);
        assert_eq!(c, Complex::new(-3.0, 0.5));

        c.set_real(7.0);
        assert_eq!(c, Complex::new(7.0, 0.0));
    }

    #[test]
    fn test_abs() {
        assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
        assert_eq!(Complex::new(-3.0, -4.0).abs(), 5.0);
        assert_eq!(Complex::ZERO.abs(), 0.0);
        assert_eq!(Complex::default().abs(), 0.0);
        assert_eq!(Complex::new(3.0, 4.0).to_scalar(), 5.0);

        // No hypot scaling: squares overflow to infinity
        assert_eq!(Complex::new(1e200, 1e200).abs(), f64::INFINITY);
        assert!(Complex::new(f64::NAN, 1.0).abs().is_nan());
    }

    #[test]
    fn test_complex_arithmetic() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);

        assert_eq!(a.add(b), Complex::new(4.0, 6.0));
        assert_eq!(a.subtract(b), Complex::new(2.0, 2.0));
        assert_eq!(a.multiply(b), Complex::new(-5.0, 10.0));
        assert_eq!(Complex::I.multiply(Complex::I), Complex::new(-1.0, 0.0));
        assert_eq!(a.add(b).subtract(b), a);
    }

    #[test]
    fn test_scalar_arithmetic() {
        let c = Complex::new(3.0, 4.0);

        assert_eq!(c.add_scalar(2.0), Complex::new(5.0, 4.0));
        assert_eq!(c.subtract_scalar(2.0), Complex::new(1.0, 4.0));
        assert_eq!(c.multiply_scalar(2.0), Complex::new(6.0, 8.0));
        assert_eq!(c.divide_scalar(2.0), Complex::new(1.5, 2.0));

        assert_eq!(scalar_add(2.0, c), c.add_scalar(2.0));
        assert_eq!(scalar_multiply(2.0, c), c.multiply_scalar(2.0));
        assert_eq!(scalar_subtract(2.0, c), Complex::new(-1.0, -4.0));
    }

    #[test]
    fn test_scalar_operations_work_per_component() {
        // Infinite components do not meet a zero cross term
        let c = Complex::new(f64::INFINITY, 1.0);
        assert_eq!(c.multiply_scalar(2.0), Complex::new(f64::INFINITY, 2.0));
        assert_eq!(c.add_scalar(1.0), Complex::new(f64::INFINITY, 1.0));
        assert_eq!(scalar_multiply(2.0, c), Complex::new(f64::INFINITY, 2.0));
        assert_eq!(c.divide_scalar(2.0), Complex::new(f64::INFINITY, 0.5));

        let c = Complex::new(1.0, f64::NEG_INFINITY);
        let shifted = c.add_scalar(1.0);
        assert_eq!(shifted.re, 2.0);
        assert_eq!(shifted.im, f64::NEG_INFINITY);

        // A negative zero imaginary part survives every scalar operation
        let c = Complex::new(1.0, -0.0);
        for result in [
            c.add_scalar(1.0),
            c.subtract_scalar(1.0),
            c.multiply_scalar(2.0),
            c.divide_scalar(2.0),
            scalar_add(1.0, c),
        ] {
            assert_eq!(result.im, 0.0);
            assert!(result.im.is_sign_negative());
        }
        assert!(!scalar_subtract(1.0, c).im.is_sign_negative());
    }

    #[test]
    fn test_scalar_subtract_is_negated_subtract_scalar() {
        let c = Complex::new(3.0, 4.0);
        let forward = c.subtract_scalar(10.0);
        let reversed = scalar_subtract(10.0, c);
        assert_eq!(reversed.re, -forward.re);
        assert_eq!(reversed.im, -forward.im);
    }

    #[test]
    fn test_divide_by_zero() {
        let c = Complex::new(1.0, -1.0).divide_scalar(0.0);
        assert_eq!(c.re, f64::INFINITY);
        assert_eq!(c.im, f64::NEG_INFINITY);

        let z = Complex::ZERO.divide_scalar(0.0);
        assert!(z.re.is_nan());
        assert!(z.im.is_nan());
    }

    #[test]
    fn test_compound_assignment_chains() {
        let x = Complex::new(1.0, 1.0);
        let y = Complex::new(2.0, -3.0);
        let z = Complex::new(-0.5, 4.0);

        let mut chained = x;
        let result = *chained.add_assign(y).add_assign(z);
        assert_eq!(result, x.add(y).add(z));
        assert_eq!(chained, result);

        let mut c = Complex::new(3.0, 4.0);
        c.subtract_assign(Complex::new(1.0, 1.0))
            .multiply_assign(Complex::I);
        assert_eq!(c, Complex::new(-3.0, 2.0));
    }

    #[test]
    fn test_scalar_compound_assignment() {
        let mut c = Complex::new(3.0, 4.0);
        c.add_assign_scalar(1.0);
        assert_eq!(c, Complex::new(4.0, 4.0));
        c.subtract_assign_scalar(2.0);
        assert_eq!(c, Complex::new(2.0, 4.0));
        c.multiply_assign_scalar(3.0);
        assert_eq!(c, Complex::new(6.0, 12.0));
        c.divide_assign_scalar(6.0);
        assert_eq!(c, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_assign() {
        let mut c = Complex::new(3.0, 4.0);
        c.assign(Complex::new(-1.0, 8.0));
        assert_eq!(c, Complex::new(-1.0, 8.0));

        c.assign_scalar(2.5);
        assert_eq!(c, Complex::new(2.5, 0.0));
    }

    #[test]
    fn test_signed_zero_is_preserved() {
        let c = Complex::new(-0.0, -0.0);
        assert!(c.re.is_sign_negative());
        assert!(c.add(Complex::new(-0.0, -0.0)).im.is_sign_negative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = Complex::new(1.25, -8.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"re":1.25,"im":-8.0}"#);

        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
