//! Core linear-algebra traits for vecmat.

use crate::error::Result;
use crate::vector::Vector;

/// Matrix–vector product: y = A x.
pub trait MatVec<V> {
    /// Compute y = A · x, failing when the column count of A differs from the length of x.
    fn matvec(&self, x: &V) -> Result<V>;
}

/// Inner products & norms.
pub trait InnerProduct {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(self, other).
    fn dot(&self, other: &Self) -> Result<Self::Scalar>;
    /// Compute ‖self‖₂.
    fn norm(&self) -> Self::Scalar;
}

/// Anything that can be appended to a matrix as a block of columns.
///
/// A [`Vector`] is a single column; a [`Matrix`](crate::matrix::Matrix) contributes all of its columns.
pub trait ColumnBlock<T> {
    /// The columns, in order.
    fn column_vectors(&self) -> &[Vector<T>];
    /// Number of rows each column has.
    fn row_count(&self) -> usize;
    /// Number of columns in the block.
    fn width(&self) -> usize {
        self.column_vectors().len()
    }
}
