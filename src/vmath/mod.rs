//! Vector algorithms: inner products, projections and Gram-Schmidt.

use num_traits::Float;

use crate::core::traits::InnerProduct;
use crate::error::{LinalgError, Result};
use crate::vector::Vector;

pub mod gram_schmidt;
pub use gram_schmidt::{gs, gs_with};

/// Dot product `u · v`.
pub fn dot<T: Float>(u: &Vector<T>, v: &Vector<T>) -> Result<T> {
    if u.len() != v.len() {
        return Err(LinalgError::vector_op("take the dot product of"));
    }
    Ok(u.iter()
        .zip(v.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// Euclidean length ‖v‖₂.
pub fn magnitude<T: Float>(v: &Vector<T>) -> T {
    v.iter().fold(T::zero(), |acc, &e| acc + e * e).sqrt()
}

/// `v / ‖v‖`. The zero vector has no direction and is rejected.
pub fn normalize<T: Float>(v: &Vector<T>) -> Result<Vector<T>> {
    if v.is_zero() {
        return Err(LinalgError::Unsupported("cannot normalize the zero vector"));
    }
    Ok(v.divide(magnitude(v)))
}

/// Orthogonal projection of `v` onto the line spanned by `onto`.
pub fn project<T: Float>(v: &Vector<T>, onto: &Vector<T>) -> Result<Vector<T>> {
    if onto.is_zero() {
        return Err(LinalgError::Unsupported("cannot project onto the zero vector"));
    }
    let coeff = dot(v, onto)? / dot(onto, onto)?;
    Ok(onto.scale(coeff))
}

impl<T: Float> InnerProduct for Vector<T> {
    type Scalar = T;

    fn dot(&self, other: &Self) -> Result<T> {
        dot(self, other)
    }

    fn norm(&self) -> T {
        magnitude(self)
    }
}
