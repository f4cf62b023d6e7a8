//! Matrix algebra built from [`Vector`] and [`Matrix`] primitives.
//!
//! Every function here returns new values; its inputs are left untouched.
//!
//! - [`transpose`], [`trace`]
//! - [`augment`] / [`deaugment`] for appending and splitting off columns
//! - [`factorize`] for QR factorization via Gram-Schmidt
//! - [`row_swap`], [`row_add`], [`row_multiply`] for elementary row operations

use num_traits::Float;

use crate::core::traits::ColumnBlock;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

pub mod factorize;
pub mod row_ops;

pub use factorize::factorize;
pub use row_ops::{row_add, row_multiply, row_swap};

/// Columns split off a matrix by [`deaugment`].
#[derive(Clone, Debug, PartialEq)]
pub enum Block<T> {
    /// A single column.
    Vector(Vector<T>),
    /// Two or more columns.
    Matrix(Matrix<T>),
}

impl<T> Block<T> {
    pub fn width(&self) -> usize {
        match self {
            Block::Vector(_) => 1,
            Block::Matrix(m) => m.ncols(),
        }
    }

    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Block::Vector(v) => Some(v),
            Block::Matrix(_) => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Block::Matrix(m) => Some(m),
            Block::Vector(_) => None,
        }
    }
}

impl<T> From<Vector<T>> for Block<T> {
    fn from(v: Vector<T>) -> Self {
        Block::Vector(v)
    }
}

impl<T> From<Matrix<T>> for Block<T> {
    fn from(m: Matrix<T>) -> Self {
        Block::Matrix(m)
    }
}

/// Transpose of `a`: its columns become the rows of the result.
pub fn transpose<T: Float>(a: &Matrix<T>) -> Matrix<T> {
    Matrix::from_fn(a.ncols(), a.nrows(), |i, j| a.columns()[i][j])
}

/// Sum of the leading diagonal, over the first `min(rows, columns)` entries.
pub fn trace<T: Float>(a: &Matrix<T>) -> T {
    let dim = a.dim();
    (0..dim.rows.min(dim.columns)).fold(T::zero(), |acc, i| acc + a[i][i])
}

/// Append the columns of `b` (a single [`Vector`] or a whole [`Matrix`]) to `a`.
///
/// Fails with [`LinalgError::DimensionMismatch`] when `b` has a different number of rows.
pub fn augment<T: Float, B: ColumnBlock<T> + ?Sized>(a: &Matrix<T>, b: &B) -> Result<Matrix<T>> {
    if b.row_count() != a.nrows() {
        return Err(LinalgError::DimensionMismatch(format!(
            "cannot augment a matrix with {} rows by columns with {} rows",
            a.nrows(),
            b.row_count()
        )));
    }
    let columns: Vec<Vector<T>> = a
        .columns()
        .iter()
        .chain(b.column_vectors())
        .cloned()
        .collect();
    Matrix::from_columns(columns)
}

/// Split the last `n` columns off `a`.
///
/// Returns the remaining matrix together with the split-off columns, as a
/// [`Block::Vector`] when `n == 1` and a [`Block::Matrix`] otherwise. `n` must
/// leave at least one column behind: `n == 0` or `n >= columns` fails with
/// [`LinalgError::InvalidSplit`].
pub fn deaugment<T: Float>(a: &Matrix<T>, n: usize) -> Result<(Matrix<T>, Block<T>)> {
    let columns = a.ncols();
    if n == 0 || n >= columns {
        return Err(LinalgError::InvalidSplit { n, columns });
    }
    let (left, right) = a.columns().split_at(columns - n);
    let remainder = Matrix::from_columns(left.to_vec())?;
    let block = match right {
        [single] => Block::Vector(single.clone()),
        _ => Block::Matrix(Matrix::from_columns(right.to_vec())?),
    };
    Ok((remainder, block))
}
