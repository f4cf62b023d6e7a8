//! Arithmetic on [`Vector`]s.
//!
//! The named methods are the primary API; the `std::ops` impls are sugar over
//! them. Elementwise operators between two vectors panic on a dimension
//! mismatch, mirroring slice indexing; use [`Vector::try_add`] and
//! [`Vector::try_sub`] to get a [`LinalgError::DimensionMismatch`] instead.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use super::Vector;
use crate::error::{LinalgError, Result};

impl<T: Float> Vector<T> {
    fn zip_with(&self, other: &Self, op: &str, f: impl Fn(T, T) -> T) -> Result<Self> {
        if self.len() != other.len() {
            return Err(LinalgError::vector_op(op));
        }
        Ok(self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect())
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        self.iter().map(|&e| f(e)).collect()
    }

    /// Elementwise sum.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Elementwise difference.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: T) -> Self {
        self.map(|e| k * e)
    }

    /// Divide every element by `k`.
    pub fn divide(&self, k: T) -> Self {
        self.map(|e| e / k)
    }

    /// Divide every element by `k`, rounding each quotient toward negative infinity.
    ///
    /// The quotient is derived from the exact remainder, so `1.0 // 0.1` is `9.0`
    /// (since `0.1` is slightly above one tenth), not `(1.0 / 0.1).floor() == 10.0`.
    pub fn floor_divide(&self, k: T) -> Self {
        self.map(|e| floor_div(e, k))
    }

    pub fn negate(&self) -> Self {
        self.scale(-T::one())
    }
}

/// Floor division with the remainder taking the sign of the divisor.
fn floor_div<T: Float>(x: T, k: T) -> T {
    if k == T::zero() {
        return x / k;
    }
    let rem = x % k;
    let mut div = (x - rem) / k;
    if rem != T::zero() && (k < T::zero()) != (rem < T::zero()) {
        div = div - T::one();
    }
    if div == T::zero() {
        return T::zero().copysign(x / k);
    }
    let mut floored = div.floor();
    if div - floored > T::from(0.5).unwrap_or_else(T::one) {
        floored = floored + T::one();
    }
    floored
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Float> $trait<&Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            /// # Panics
            /// Panics if the two vectors have different dimensions.
            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                match self.$checked(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<T: Float> $trait<Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Float> $trait<&Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                (&self).$method(rhs)
            }
        }
    };
}

impl_binop!(Add, add, try_add);
impl_binop!(Sub, sub, try_sub);

impl<T: Float> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.negate()
    }
}

impl<T: Float> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.negate()
    }
}

impl<T: Float> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.scale(k)
    }
}

impl<T: Float> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, k: T) -> Vector<T> {
        self.scale(k)
    }
}

impl<T: Float> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, k: T) -> Vector<T> {
        self.divide(k)
    }
}

impl<T: Float> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, k: T) -> Vector<T> {
        self.divide(k)
    }
}

// Scalar on the left: `2.0 * v`.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<&Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, v: &Vector<$t>) -> Vector<$t> {
                v.scale(self)
            }
        }

        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, v: Vector<$t>) -> Vector<$t> {
                v.scale(self)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
