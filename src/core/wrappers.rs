//! Interop with `faer` and `approx`.
//!
//! - [`Matrix::to_faer`] / [`Matrix::from_faer`] convert to and from `faer`'s dense matrices,
//!   so results can be cross-checked against (or handed to) faer's own solvers.
//! - [`approx::AbsDiffEq`] and [`approx::RelativeEq`] are implemented for [`Vector`] and
//!   [`Matrix`], comparing elementwise. Values of different dimension are never approximately equal.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [approx crate documentation](https://docs.rs/approx)

use approx::{AbsDiffEq, RelativeEq};
use faer::{Mat, MatRef};
use num_traits::Float;

use crate::matrix::Matrix;
use crate::vector::Vector;

impl<T: Float> Matrix<T> {
    /// Copy into a `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }

    /// Copy out of a `faer` matrix view.
    pub fn from_faer(m: MatRef<'_, T>) -> Self {
        Matrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Float> From<&Matrix<T>> for Mat<T> {
    fn from(m: &Matrix<T>) -> Self {
        m.to_faer()
    }
}

impl<T: Float> From<&Mat<T>> for Matrix<T> {
    fn from(m: &Mat<T>) -> Self {
        Matrix::from_faer(m.as_ref())
    }
}

impl<T> AbsDiffEq for Vector<T>
where
    T: Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Vector<T>
where
    T: Float + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.dim() == other.dim()
            && self
                .rows()
                .iter()
                .zip(other.rows())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix<T>
where
    T: Float + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.dim() == other.dim()
            && self
                .rows()
                .iter()
                .zip(other.rows())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
