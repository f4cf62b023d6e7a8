//! vecmat: immutable dense vectors and matrices with Gram-Schmidt QR
//!
//! This crate provides exact, side-effect-free linear-algebra primitives for small to
//! medium dense problems: a [`Vector`] and [`Matrix`] value type, Gram-Schmidt
//! orthogonalization, QR factorization, transpose/trace, augmentation and elementary
//! row operations. Interop with `faer` is available for cross-checking or hand-off.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod mmath;
pub mod vector;
pub mod vmath;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use mmath::*;
pub use vector::Vector;
pub use vmath::*;
