//! Gram-Schmidt orthogonalization with dependency detection.
//!
//! Vectors are processed strictly in input order. Each one has its projection
//! onto every previously accepted vector removed (modified Gram-Schmidt: the
//! projections are taken from the running residual, and always against the
//! unnormalized accepted residuals). A residual whose elements all lie within
//! the tolerance of zero means the input vector depends linearly on its
//! predecessors; it is discarded and does not appear in the output.
//!
//! The output is therefore never longer than the input, and a shorter output is
//! how callers such as [`factorize`](crate::mmath::factorize) detect singularity.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §5.2.8
//! - https://en.wikipedia.org/wiki/Gram%E2%80%93Schmidt_process

use log::{debug, trace};
use num_traits::Float;

use super::dot;
use crate::config::{GsOptions, Normalization};
use crate::error::{LinalgError, Result};
use crate::vector::Vector;

/// Orthonormalize `vectors` with the default options ([`ZERO_TOL`](crate::config::ZERO_TOL), unit length).
pub fn gs<T: Float>(vectors: &[Vector<T>]) -> Result<Vec<Vector<T>>> {
    gs_with(vectors, &GsOptions::default())
}

/// Orthogonalize `vectors`, dropping any that reduce to the zero vector.
///
/// Projections are always taken against the raw orthogonal residuals, never
/// their normalized copies, so a repeated or scaled input column projects to
/// exactly itself and leaves an exactly-zero residual.
///
/// Fails with [`LinalgError::DimensionMismatch`] if the inputs differ in dimension.
pub fn gs_with<T: Float>(vectors: &[Vector<T>], opts: &GsOptions) -> Result<Vec<Vector<T>>> {
    let n = vectors.first().map_or(0, Vector::len);
    let tol = T::from(opts.tol).unwrap_or_else(T::epsilon);
    // (residual, residual · residual)
    let mut basis: Vec<(Vector<T>, T)> = Vec::with_capacity(vectors.len());

    for (k, v) in vectors.iter().enumerate() {
        if v.len() != n {
            return Err(LinalgError::vector_op("orthogonalize"));
        }
        let mut residual = v.clone();
        for (u, uu) in &basis {
            if *uu == T::zero() {
                continue;
            }
            let coeff = dot(&residual, u)? / *uu;
            residual = residual.try_sub(&u.scale(coeff))?;
        }
        if residual.iter().all(|e| e.abs() <= tol) {
            debug!("gram-schmidt: vector {k} is linearly dependent on its predecessors; dropped");
            continue;
        }
        let uu = dot(&residual, &residual)?;
        basis.push((residual, uu));
    }

    trace!("gram-schmidt: kept {} of {} vectors", basis.len(), vectors.len());
    Ok(basis
        .into_iter()
        .map(|(u, uu)| match opts.normalization {
            Normalization::Unit => u.divide(uu.sqrt()),
            Normalization::None => u,
        })
        .collect())
}
