use vecmat::{Matrix, Vector, augment, deaugment, factorize, row_add, row_multiply, row_swap};

fn main() -> Result<(), vecmat::LinalgError> {
    let a = Matrix::from_rows(vec![
        Vector::from([12.0, -51.0, 4.0]),
        Vector::from([6.0, 167.0, -68.0]),
        Vector::from([-4.0, 24.0, -41.0]),
    ])?;

    let (q, r) = factorize(&a)?;
    println!("A =\n{a}\n");
    println!("Q =\n{q}\n");
    println!("R =\n{r}\n");
    println!("Q * R =\n{}\n", &q * &r);

    // Elementary row operations on [A | b]
    let aug = augment(&a, &Vector::from([1.0, 2.0, 3.0]))?;
    let reduced = row_add(&row_multiply(&row_swap(&aug, 0, 2)?, 0, 1.5)?, 0, 1)?;
    let (lhs, rhs) = deaugment(&reduced, 1)?;
    println!("row-reduced A =\n{lhs}\nrhs = {:?}", rhs);
    Ok(())
}
