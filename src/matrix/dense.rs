//! Dense, immutable matrix built from row or column [`Vector`]s.
//!
//! A [`Matrix`] keeps both its row vectors and its column vectors. Since it is
//! never mutated after construction the two views cannot drift apart, and
//! algorithms can borrow whichever orientation they need without copying.

use std::fmt;
use std::ops::{Index, Mul};

use num_traits::Float;

use crate::core::traits::{ColumnBlock, MatVec};
use crate::error::{LinalgError, Result};
use crate::vector::{Vector, format_element};
use crate::vmath::dot;

/// Matrix dimension pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dim {
    pub rows: usize,
    pub columns: usize,
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// How a list of vectors is laid out when building a [`Matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Rows,
    Columns,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    dim: Dim,
    rows: Vec<Vector<T>>,
    columns: Vec<Vector<T>>,
}

/// Transpose a list of equally sized vectors.
fn transpose_vectors<T: Float>(vectors: &[Vector<T>], len: usize) -> Vec<Vector<T>> {
    (0..len)
        .map(|i| vectors.iter().map(|v| v[i]).collect())
        .collect()
}

fn check_uniform<T>(vectors: &[Vector<T>], what: &str) -> Result<usize> {
    let len = vectors.first().map_or(0, Vector::len);
    match vectors.iter().position(|v| v.len() != len) {
        Some(k) => Err(LinalgError::DimensionMismatch(format!(
            "{what} {k} has {} elements, expected {len}",
            vectors[k].len()
        ))),
        None => Ok(len),
    }
}

impl<T: Float> Matrix<T> {
    /// Build a matrix whose rows are `rows`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] when the rows are ragged.
    /// An empty list yields the 0x0 matrix.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self> {
        let columns = check_uniform(&rows, "row")?;
        let dim = Dim {
            rows: rows.len(),
            columns,
        };
        Ok(Matrix {
            columns: transpose_vectors(&rows, columns),
            rows,
            dim,
        })
    }

    /// Build a matrix whose columns are `columns`.
    pub fn from_columns(columns: Vec<Vector<T>>) -> Result<Self> {
        let rows = check_uniform(&columns, "column")?;
        let dim = Dim {
            rows,
            columns: columns.len(),
        };
        Ok(Matrix {
            rows: transpose_vectors(&columns, rows),
            columns,
            dim,
        })
    }

    pub fn from_vectors(vectors: Vec<Vector<T>>, orientation: Orientation) -> Result<Self> {
        match orientation {
            Orientation::Rows => Self::from_rows(vectors),
            Orientation::Columns => Self::from_columns(vectors),
        }
    }

    /// Build a `rows x columns` matrix from `f(i, j)`.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let row_vectors: Vec<Vector<T>> = (0..rows)
            .map(|i| (0..columns).map(|j| f(i, j)).collect())
            .collect();
        Matrix {
            columns: transpose_vectors(&row_vectors, columns),
            rows: row_vectors,
            dim: Dim { rows, columns },
        }
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::from_fn(rows, columns, |_, _| T::zero())
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.rows.get(i).and_then(|r| r.get(j)).copied()
    }

    /// Matrix product `self * rhs`.
    ///
    /// With the `rayon` feature the output rows are computed in parallel; each
    /// entry is still a sequential dot product, so the result does not depend
    /// on scheduling.
    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>>
    where
        T: Send + Sync,
    {
        if self.dim.columns != rhs.dim.rows {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot multiply a {} matrix by a {} matrix",
                self.dim, rhs.dim
            )));
        }
        let product_row = |row: &Vector<T>| -> Result<Vector<T>> {
            rhs.columns.iter().map(|c| dot(row, c)).collect()
        };
        #[cfg(feature = "rayon")]
        let rows = {
            use rayon::prelude::*;
            self.rows
                .par_iter()
                .map(product_row)
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "rayon"))]
        let rows = self
            .rows
            .iter()
            .map(product_row)
            .collect::<Result<Vec<_>>>()?;
        if rows.is_empty() {
            return Ok(Matrix::zeros(0, rhs.dim.columns));
        }
        Matrix::from_rows(rows)
    }
}

impl<T> Matrix<T> {
    pub fn dim(&self) -> Dim {
        self.dim
    }

    pub fn nrows(&self) -> usize {
        self.dim.rows
    }

    pub fn ncols(&self) -> usize {
        self.dim.columns
    }

    pub fn is_square(&self) -> bool {
        self.dim.rows == self.dim.columns
    }

    /// Row vectors, top to bottom.
    pub fn rows(&self) -> &[Vector<T>] {
        &self.rows
    }

    /// Column vectors, left to right.
    pub fn columns(&self) -> &[Vector<T>] {
        &self.columns
    }

    pub fn row(&self, i: usize) -> Option<&Vector<T>> {
        self.rows.get(i)
    }

    pub fn column(&self, j: usize) -> Option<&Vector<T>> {
        self.columns.get(j)
    }
}

/// `A[i]` is row `i`.
impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, i: usize) -> &Vector<T> {
        &self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.rows[i][j]
    }
}

impl<T: Float + Send + Sync> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    /// Panics if the inner dimensions disagree.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Float + Send + Sync> Mul<Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Float> MatVec<Vector<T>> for Matrix<T> {
    fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>> {
        if self.dim.columns != x.len() {
            return Err(LinalgError::DimensionMismatch(format!(
                "cannot multiply a {} matrix by a vector of dimension {}",
                self.dim,
                x.len()
            )));
        }
        self.rows.iter().map(|r| dot(r, x)).collect()
    }
}

impl<T: Float> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    fn mul(self, x: &Vector<T>) -> Vector<T> {
        match self.matvec(x) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> ColumnBlock<T> for Matrix<T> {
    fn column_vectors(&self) -> &[Vector<T>] {
        &self.columns
    }

    fn row_count(&self) -> usize {
        self.dim.rows
    }
}

impl<T> ColumnBlock<T> for Vector<T> {
    fn column_vectors(&self) -> &[Vector<T>] {
        std::slice::from_ref(self)
    }

    fn row_count(&self) -> usize {
        self.len()
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for e in row {
                f.write_str(&format_element(*e))?;
            }
        }
        Ok(())
    }
}
