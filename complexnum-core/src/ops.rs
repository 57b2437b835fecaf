//! Operator bindings over the named operations
//!
//! Each impl here forwards to a method on [`Complex`] or to one of the
//! `scalar_*` functions, so the operator and the named form always agree.
//! There is intentionally no `Complex / Complex`.

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::complex::{scalar_add, scalar_multiply, scalar_subtract, Complex};

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        self.subtract(rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    fn add(self, rhs: f64) -> Complex {
        self.add_scalar(rhs)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    fn sub(self, rhs: f64) -> Complex {
        self.subtract_scalar(rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Complex {
        self.multiply_scalar(rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    fn div(self, rhs: f64) -> Complex {
        self.divide_scalar(rhs)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        scalar_add(self, rhs)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        scalar_subtract(self, rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        scalar_multiply(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        Complex::add_assign(self, rhs);
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        self.subtract_assign(rhs);
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Complex) {
        self.multiply_assign(rhs);
    }
}

impl AddAssign<f64> for Complex {
    fn add_assign(&mut self, rhs: f64) {
        self.add_assign_scalar(rhs);
    }
}

impl SubAssign<f64> for Complex {
    fn sub_assign(&mut self, rhs: f64) {
        self.subtract_assign_scalar(rhs);
    }
}

impl MulAssign<f64> for Complex {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_assign_scalar(rhs);
    }
}

impl DivAssign<f64> for Complex {
    fn div_assign(&mut self, rhs: f64) {
        self.divide_assign_scalar(rhs);
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Complex::from_real(value)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(c: Complex) -> Self {
        (c.re, c.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, Complex::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, c| Complex::add(acc, *c))
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, Complex::multiply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_match_named_methods() {
        let a = Complex::new(3.0, 4.0);
        let b = Complex::new(1.0, 2.0);

        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(a * b, a.multiply(b));
        assert_eq!(a * b, Complex::new(-5.0, 10.0));

        assert_eq!(a + 2.0, a.add_scalar(2.0));
        assert_eq!(a - 2.0, a.subtract_scalar(2.0));
        assert_eq!(a * 2.0, a.multiply_scalar(2.0));
        assert_eq!(a / 2.0, a.divide_scalar(2.0));
    }

    #[test]
    fn test_reversed_scalar_operators() {
        let c = Complex::new(3.0, 4.0);

        assert_eq!(2.0 + c, c + 2.0);
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!(10.0 - c, Complex::new(7.0, -4.0));
        assert_eq!(10.0 - c, -(c - 10.0));
    }

    #[test]
    fn test_compound_operators() {
        let mut c = Complex::new(1.0, 1.0);
        c += Complex::new(1.0, 2.0);
        assert_eq!(c, Complex::new(2.0, 3.0));
        c -= Complex::new(1.0, 1.0);
        assert_eq!(c, Complex::new(1.0, 2.0));
        c *= Complex::new(3.0, 4.0);
        assert_eq!(c, Complex::new(-5.0, 10.0));

        c += 5.0;
        assert_eq!(c, Complex::new(0.0, 10.0));
        c -= 1.0;
        assert_eq!(c, Complex::new(-1.0, 10.0));
        c *= 2.0;
        assert_eq!(c, Complex::new(-2.0, 20.0));
        c /= 4.0;
        assert_eq!(c, Complex::new(-0.5, 5.0));
    }

    #[test]
    fn test_division_by_zero_operator() {
        let c = Complex::new(2.0, 0.0) / 0.0;
        assert!(c.re.is_infinite());
        assert!(c.im.is_nan());
    }

    #[test]
    fn test_conversions() {
        let c: Complex = 2.5.into();
        assert_eq!(c, Complex::new(2.5, 0.0));

        let c: Complex = (1.0, -1.0).into();
        assert_eq!(c, Complex::new(1.0, -1.0));

        let pair: (f64, f64) = c.into();
        assert_eq!(pair, (1.0, -1.0));
    }

    #[test]
    fn test_zero_one() {
        assert!(Complex::zero().is_zero());
        assert!(Complex::new(-0.0, 0.0).is_zero());
        assert!(!Complex::I.is_zero());
        assert_eq!(Complex::one() * Complex::I, Complex::I);
    }

    #[test]
    fn test_sum_and_product() {
        let values = [
            Complex::new(1.0, 2.0),
            Complex::new(3.0, -1.0),
            Complex::new(-2.0, 0.5),
        ];

        let sum: Complex = values.iter().sum();
        assert_eq!(sum, Complex::new(2.0, 1.5));

        let product: Complex = [Complex::I, Complex::I].into_iter().product();
        assert_eq!(product, Complex::new(-1.0, 0.0));

        let empty: [Complex; 0] = [];
        assert_eq!(empty.iter().sum::<Complex>(), Complex::ZERO);
    }
}
