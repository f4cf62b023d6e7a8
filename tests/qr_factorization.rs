//! Tests for QR factorization via Gram-Schmidt on fixed and random matrices.
//!
//! Random matrices are made diagonally dominant (A = M + n·I with |M_ij| < 1) so
//! they are invertible. Each factorization is checked for reconstruction
//! (Q R ≈ A), orthonormal columns of Q, and an upper-triangular R. The product is
//! also recomputed with faer as an independent check.

use approx::assert_abs_diff_eq;
use rand::Rng;
use vecmat::{LinalgError, Matrix, Vector, dot, factorize, magnitude, transpose};

const TOL: f64 = 1e-9;

fn random_invertible(n: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    Matrix::from_fn(n, n, |i, j| {
        let noise: f64 = rng.gen_range(-1.0..1.0);
        if i == j { noise + n as f64 } else { noise }
    })
}

fn check_factorization(a: &Matrix<f64>) {
    let (q, r) = factorize(a).unwrap();
    let n = a.nrows();
    assert_eq!(q.dim(), a.dim());
    assert_eq!(r.dim(), a.dim());

    assert_abs_diff_eq!(&q * &r, *a, epsilon = TOL);

    for i in 0..n {
        assert_abs_diff_eq!(magnitude(&q.columns()[i]), 1.0, epsilon = TOL);
        for j in (i + 1)..n {
            let d = dot(&q.columns()[i], &q.columns()[j]).unwrap();
            assert_abs_diff_eq!(d, 0.0, epsilon = TOL);
        }
        for j in 0..i {
            assert_abs_diff_eq!(r[(i, j)], 0.0, epsilon = TOL);
        }
        assert!(r[(i, i)] > 0.0);
    }

    // QᵀQ = I
    assert_abs_diff_eq!(&transpose(&q) * &q, Matrix::identity(n), epsilon = TOL);
}

#[test]
fn identity_factors_to_identity() {
    let i = Matrix::<f64>::identity(2);
    assert_eq!(factorize(&i).unwrap(), (i.clone(), i));
}

#[test]
fn random_invertible_matrices() {
    for n in [1, 2, 3, 5, 8] {
        check_factorization(&random_invertible(n));
    }
}

#[test]
fn permutation_matrix() {
    let p = Matrix::from_rows(vec![
        Vector::from([0.0, 1.0, 0.0]),
        Vector::from([0.0, 0.0, 1.0]),
        Vector::from([1.0, 0.0, 0.0]),
    ])
    .unwrap();
    let (q, r) = factorize(&p).unwrap();
    assert_eq!(q, p);
    assert_eq!(r, Matrix::identity(3));
}

#[test]
fn product_agrees_with_faer() {
    let a = random_invertible(6);
    let (q, r) = factorize(&a).unwrap();
    let qr = &q.to_faer() * &r.to_faer();
    assert_abs_diff_eq!(Matrix::from(&qr), a, epsilon = TOL);
}

#[test]
fn singular_matrices_are_rejected() {
    // zero column
    let mut a = random_invertible(4);
    let columns: Vec<Vector<f64>> = a
        .columns()
        .iter()
        .enumerate()
        .map(|(j, c)| if j == 2 { Vector::zeros(4) } else { c.clone() })
        .collect();
    a = Matrix::from_columns(columns).unwrap();
    let err = factorize(&a).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch(ref m) if m.contains("invertible")));

    // duplicated column
    let b = random_invertible(3);
    let c0 = b.columns()[0].clone();
    let dup = Matrix::from_columns(vec![c0.clone(), b.columns()[1].clone(), c0]).unwrap();
    let err = factorize(&dup).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch(ref m) if m.contains("invertible")));
}

fn assert_singular(a: &Matrix<f64>) {
    let err = factorize(a).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch(ref m) if m.contains("invertible")));
}

/// Repeated columns with entries well above 1 must still be caught.
#[test]
fn repeated_large_columns_are_rejected() {
    let c0 = Vector::from([10.0, 20.0, 30.0]);
    let e1 = Vector::from([1.0, 0.0, 0.0]);
    assert_singular(&Matrix::from_columns(vec![c0.clone(), e1.clone(), c0.clone()]).unwrap());
    assert_singular(&Matrix::from_columns(vec![c0.clone(), e1, c0.scale(2.0)]).unwrap());
}

/// Every random matrix with a copied or doubled column is rejected, not just most.
#[test]
fn repeated_random_columns_are_always_rejected() {
    for n in [2, 3, 5] {
        for _ in 0..500 {
            let a = random_invertible(n);
            let cols = a.columns();
            let mut copied = cols.to_vec();
            copied[n - 1] = cols[0].clone();
            assert_singular(&Matrix::from_columns(copied).unwrap());

            let mut doubled = cols.to_vec();
            doubled[n - 1] = cols[n - 2].scale(2.0);
            assert_singular(&Matrix::from_columns(doubled).unwrap());
        }
    }
}

#[test]
fn non_square_matrices_are_rejected() {
    for (r, c) in [(2, 3), (3, 2), (1, 4)] {
        let err = factorize(&Matrix::<f64>::zeros(r, c)).unwrap_err();
        assert!(matches!(err, LinalgError::DimensionMismatch(ref m) if m.contains("square")));
    }
}
