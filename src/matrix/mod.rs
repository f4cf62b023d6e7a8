//! Matrix module: the dense [`Matrix`] type and its dimension pair.

pub mod dense;
pub use dense::{Dim, Matrix, Orientation};
