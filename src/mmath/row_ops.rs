//! Elementary row operations.
//!
//! Each operation copies the row list, replaces the affected row(s), and builds
//! a fresh [`Matrix`]. Row indices outside the matrix fail with
//! [`LinalgError::IndexOutOfBounds`].

use num_traits::Float;

use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

fn rebuild<T: Float>(
    a: &Matrix<T>,
    edit: impl FnOnce(&mut [Vector<T>]) -> Result<()>,
) -> Result<Matrix<T>> {
    let mut rows = a.rows().to_vec();
    edit(&mut rows)?;
    Matrix::from_rows(rows)
}

/// Exchange rows `i` and `j`.
pub fn row_swap<T: Float>(a: &Matrix<T>, i: usize, j: usize) -> Result<Matrix<T>> {
    LinalgError::check_index(i, a.nrows())?;
    LinalgError::check_index(j, a.nrows())?;
    rebuild(a, |rows| {
        rows.swap(i, j);
        Ok(())
    })
}

/// Replace row `j` with `row[i] + row[j]`; row `i` is unchanged.
pub fn row_add<T: Float>(a: &Matrix<T>, i: usize, j: usize) -> Result<Matrix<T>> {
    LinalgError::check_index(i, a.nrows())?;
    LinalgError::check_index(j, a.nrows())?;
    rebuild(a, |rows| {
        rows[j] = rows[i].try_add(&rows[j])?;
        Ok(())
    })
}

/// Scale row `i` by `k`.
pub fn row_multiply<T: Float>(a: &Matrix<T>, i: usize, k: T) -> Result<Matrix<T>> {
    LinalgError::check_index(i, a.nrows())?;
    rebuild(a, |rows| {
        rows[i] = rows[i].scale(k);
        Ok(())
    })
}
