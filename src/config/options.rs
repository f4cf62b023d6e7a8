//! Tuning options for Gram-Schmidt orthogonalization.
//!
//! [`GsOptions`] carries the dependency tolerance and the normalization
//! convention used by [`gs_with`](crate::vmath::gs_with). The defaults match
//! what [`gs`](crate::vmath::gs) and [`factorize`](crate::mmath::factorize) use.

use super::ZERO_TOL;

/// Whether accepted Gram-Schmidt vectors are scaled to unit length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Emit orthonormal vectors.
    #[default]
    Unit,
    /// Emit the raw orthogonal residuals.
    None,
}

/// Gram-Schmidt parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GsOptions {
    /// Absolute tolerance below which a residual counts as the zero vector
    pub tol: f64,

    /// Normalization convention for accepted vectors
    pub normalization: Normalization,
}

impl Default for GsOptions {
    fn default() -> Self {
        Self {
            tol: ZERO_TOL,
            normalization: Normalization::Unit,
        }
    }
}

impl GsOptions {
    /// Set the dependency tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the normalization convention.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}
