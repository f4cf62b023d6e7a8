//! Immutable Euclidean vectors.
//!
//! A [`Vector`] owns a fixed-length sequence of real elements. Nothing in its
//! public API mutates those elements: every arithmetic operation returns a new
//! vector, so vectors can be shared freely between threads and matrices.
//!
//! # Construction
//! - [`Vector::from_elements`] and the `From<Vec<T>>` / `From<[T; N]>` impls take explicit elements.
//! - [`FromIterator`] collects any iterator of scalars.
//! - [`Vector::zeros`] builds the zero vector of a given dimension.
//! - [`Clone`] copies another vector.
//!
//! Arithmetic lives in [`ops`].

use std::fmt;
use std::ops::Index;

use num_traits::Float;

use crate::config::{DISPLAY_PRECISION, DISPLAY_WIDTH, ZERO_TOL};

pub mod ops;

/// An immutable vector of real numbers.
///
/// Besides the elements, a vector caches whether it is non-zero: `true` iff any
/// element differs from 0 by more than [`ZERO_TOL`]. Equality, by contrast, is
/// exact and elementwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    elements: Vec<T>,
    non_zero: bool,
}

impl<T: Float> Vector<T> {
    /// Build a vector from an explicit list of elements.
    pub fn from_elements(elements: Vec<T>) -> Self {
        let tol = T::from(ZERO_TOL).unwrap_or_else(T::epsilon);
        let non_zero = elements.iter().any(|e| e.abs() > tol);
        Vector { elements, non_zero }
    }

    /// The all-zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Vector {
            elements: vec![T::zero(); n],
            non_zero: false,
        }
    }

    /// `true` iff every element is within [`ZERO_TOL`] of zero.
    pub fn is_zero(&self) -> bool {
        !self.non_zero
    }

    /// Truth value of the vector: `false` only for the (near-)zero vector.
    pub fn non_zero(&self) -> bool {
        self.non_zero
    }

    /// `true` if `value` is exactly equal to one of the elements.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    pub fn dimension(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consume the vector, returning its elements.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Float> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        Vector::from_elements(elements)
    }
}

impl<T: Float, const N: usize> From<[T; N]> for Vector<T> {
    fn from(elements: [T; N]) -> Self {
        Vector::from_elements(elements.to_vec())
    }
}

impl<T: Float> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_elements(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Render a single element: rounded, zero-snapped, sign-spaced and right-aligned.
pub(crate) fn format_element<T: Float>(value: T) -> String {
    let value = value.to_f64().unwrap_or(f64::NAN);
    let scale = 10f64.powi(DISPLAY_PRECISION as i32);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        // -0.0 renders as 0.0
        rounded = 0.0;
    }
    let text = if rounded.is_sign_negative() {
        format!("{:.*}", DISPLAY_PRECISION, rounded)
    } else {
        format!(" {:.*}", DISPLAY_PRECISION, rounded)
    };
    format!("{:>width$}", text, width = DISPLAY_WIDTH)
}

impl<T: Float> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.elements {
            f.write_str(&format_element(*e))?;
        }
        Ok(())
    }
}
