//! Shared numeric configuration.

pub mod options;
pub use options::{GsOptions, Normalization};

/// Absolute tolerance for zero detection.
///
/// A vector is the zero vector when every element lies within `ZERO_TOL` of 0.
/// Gram-Schmidt applies the same test to each residual, so this threshold also
/// decides which columns count as linearly dependent (and therefore which
/// matrices [`factorize`](crate::mmath::factorize) rejects as singular).
pub const ZERO_TOL: f64 = 1e-15;

/// Fixed column width used when rendering vector and matrix elements.
pub const DISPLAY_WIDTH: usize = 10;

/// Decimal places kept when rendering elements.
pub const DISPLAY_PRECISION: usize = 4;
