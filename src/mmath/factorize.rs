//! QR factorization via Gram-Schmidt orthogonalization.
//!
//! For a square invertible `A`, the columns of `A` are orthonormalized in order
//! to give `Q`, and `R = Qᵀ A`. Because column `k` of `A` lies in the span of
//! the first `k` columns of `Q`, `R` is upper-triangular, with a positive
//! diagonal under the unit-length convention used here.
//!
//! Singularity is detected through Gram-Schmidt itself: a column that reduces
//! to the zero vector (within [`ZERO_TOL`](crate::config::ZERO_TOL)) is dropped,
//! which leaves `Q` narrower than `A`.

use log::debug;
use num_traits::Float;

use super::transpose;
use crate::error::{LinalgError, Result};
use crate::matrix::Matrix;
use crate::vmath::gs;

/// Factor a square invertible matrix into `(Q, R)` with `A = Q R`.
///
/// # Errors
/// - [`LinalgError::DimensionMismatch`] ("Matrix A must be square") if `A` is not square.
/// - [`LinalgError::DimensionMismatch`] ("Matrix A must be invertible") if its columns
///   are linearly dependent.
pub fn factorize<T: Float + Send + Sync>(a: &Matrix<T>) -> Result<(Matrix<T>, Matrix<T>)> {
    if !a.is_square() {
        debug!("factorize: rejecting non-square {} matrix", a.dim());
        return Err(LinalgError::DimensionMismatch("Matrix A must be square".into()));
    }

    let basis = gs(a.columns())?;
    let q = if basis.is_empty() {
        Matrix::zeros(a.nrows(), 0)
    } else {
        Matrix::from_columns(basis)?
    };

    // Dropped columns leave Q narrower than A
    if q.dim() != a.dim() {
        debug!(
            "factorize: {} of {} columns are linearly dependent",
            a.ncols() - q.ncols(),
            a.ncols()
        );
        return Err(LinalgError::DimensionMismatch("Matrix A must be invertible".into()));
    }

    let r = transpose(&q).try_mul(a)?;
    Ok((q, r))
}
