//! Tests for the structural matrix transforms: transpose, trace, augmentation
//! and elementary row operations.

use rand::Rng;
use vecmat::{
    Block, Dim, LinalgError, Matrix, Vector, augment, deaugment, row_add, row_multiply, row_swap,
    trace, transpose,
};

fn random_matrix(rng: &mut impl Rng, rows: usize, columns: usize) -> Matrix<f64> {
    Matrix::from_fn(rows, columns, |_, _| rng.gen_range(-5.0..5.0))
}

fn from_rows(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows.iter().map(|r| Vector::from(r.to_vec())).collect()).unwrap()
}

/// transpose(transpose(A)) == A for rectangular A.
#[test]
fn transpose_is_an_involution() {
    let mut rng = rand::thread_rng();
    for (r, c) in [(1, 1), (2, 5), (4, 3), (6, 6)] {
        let a = random_matrix(&mut rng, r, c);
        let t = transpose(&a);
        assert_eq!(t.dim(), Dim { rows: c, columns: r });
        assert_eq!(t.rows(), a.columns());
        assert_eq!(transpose(&t), a);
    }
}

#[test]
fn trace_of_identity_is_its_size() {
    for n in 0..7 {
        assert_eq!(trace(&Matrix::<f64>::identity(n)), n as f64);
    }
}

/// deaugment(augment(A, B), width(B)) == (A, B).
#[test]
fn augment_deaugment_round_trip() {
    let mut rng = rand::thread_rng();
    let a = random_matrix(&mut rng, 4, 3);

    let v: Vector<f64> = (0..4).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let (rest, block) = deaugment(&augment(&a, &v).unwrap(), 1).unwrap();
    assert_eq!(rest, a);
    assert_eq!(block, Block::Vector(v));

    let b = random_matrix(&mut rng, 4, 2);
    let joined = augment(&a, &b).unwrap();
    assert_eq!(joined.dim(), Dim { rows: 4, columns: 5 });
    let (rest, block) = deaugment(&joined, 2).unwrap();
    assert_eq!(rest, a);
    assert_eq!(block, Block::Matrix(b));
}

#[test]
fn augment_requires_matching_rows() {
    let a = Matrix::<f64>::zeros(3, 2);
    assert!(matches!(
        augment(&a, &Vector::zeros(2)),
        Err(LinalgError::DimensionMismatch(_))
    ));
}

#[test]
fn deaugment_must_leave_a_column() {
    let a = Matrix::<f64>::identity(3);
    assert_eq!(
        deaugment(&a, 3).unwrap_err(),
        LinalgError::InvalidSplit { n: 3, columns: 3 }
    );
}

#[test]
fn row_operations_on_two_by_two() {
    let a = from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
    assert_eq!(row_swap(&a, 0, 1).unwrap(), from_rows(&[&[3.0, 4.0], &[1.0, 2.0]]));
    assert_eq!(row_add(&a, 0, 1).unwrap(), from_rows(&[&[1.0, 2.0], &[4.0, 6.0]]));
    assert_eq!(row_multiply(&a, 0, 2.0).unwrap(), from_rows(&[&[2.0, 4.0], &[3.0, 4.0]]));
}

/// Row-reducing [A | b] to [I | x] with only the three elementary operations.
#[test]
fn row_operations_solve_a_small_system() {
    // 2x + y = 5, x + 3y = 10  =>  x = 1, y = 3
    let a = from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]);
    let aug = augment(&a, &Vector::from([5.0, 10.0])).unwrap();

    let m = row_swap(&aug, 0, 1).unwrap(); // [1 3 10], [2 1 5]
    let m = row_multiply(&m, 0, -2.0).unwrap(); // [-2 -6 -20]
    let m = row_add(&m, 0, 1).unwrap(); // row1 = [0 -5 -15]
    let m = row_multiply(&m, 0, -0.5).unwrap(); // [1 3 10]
    let m = row_multiply(&m, 1, -0.2).unwrap(); // [0 1 3]
    let m = row_multiply(&m, 1, -3.0).unwrap(); // [0 -3 -9]
    let m = row_add(&m, 1, 0).unwrap(); // row0 = [1 0 1]
    let m = row_multiply(&m, 1, -1.0 / 3.0).unwrap(); // [0 1 3]

    let (lhs, rhs) = deaugment(&m, 1).unwrap();
    assert_eq!(lhs, Matrix::identity(2));
    let x = rhs.into_vector().unwrap();
    assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 3.0).abs() < 1e-12);
}
