use elastica::linalg::{is_finite, is_symmetric, relative_asymmetry, try_invert_spd, SpectralBounds};
use matrixcompare::{assert_matrix_eq, assert_scalar_eq};
use nalgebra::{Matrix6, Vector6};

/// A symmetric positive definite matrix with a non-trivial sparsity pattern.
fn spd_matrix() -> Matrix6<f64> {
    let mut a = Matrix6::from_diagonal(&Vector6::new(4.0, 5.0, 6.0, 2.0, 3.0, 1.0));
    a[(0, 1)] = -1.0;
    a[(1, 0)] = -1.0;
    a[(1, 2)] = 0.5;
    a[(2, 1)] = 0.5;
    a[(0, 5)] = 0.25;
    a[(5, 0)] = 0.25;
    a
}

#[test]
fn relative_asymmetry_of_symmetric_matrix_is_zero() {
    assert_eq!(relative_asymmetry(&spd_matrix()), 0.0);
    assert_eq!(relative_asymmetry(&Matrix6::<f64>::zeros()), 0.0);
    assert!(is_symmetric(&spd_matrix(), 0.0));
}

#[test]
fn relative_asymmetry_is_scaled_by_largest_entry() {
    let mut a = spd_matrix();
    a[(3, 1)] = 0.06;
    // Largest entry is 6.0, largest asymmetry is 0.06
    assert_scalar_eq!(relative_asymmetry(&a), 0.01, comp = abs, tol = 1e-15);
    assert!(!is_symmetric(&a, 1e-10));
    assert!(is_symmetric(&a, 0.02));
}

#[test]
fn spectral_bounds_of_diagonal_matrix() {
    let a = Matrix6::from_diagonal(&Vector6::new(3.0, 0.5, 2.0, 8.0, 1.0, 4.0));
    let bounds = SpectralBounds::of_symmetric(&a);
    assert_scalar_eq!(bounds.min, 0.5, comp = abs, tol = 1e-14);
    assert_scalar_eq!(bounds.max, 8.0, comp = abs, tol = 1e-14);
    assert!(bounds.is_positive_definite());
    assert_scalar_eq!(bounds.reciprocal_condition_number(), 0.0625, comp = abs, tol = 1e-14);
}

#[test]
fn spectral_bounds_detect_indefinite_matrix() {
    let mut a = Matrix6::identity();
    a[(0, 1)] = 2.0;
    a[(1, 0)] = 2.0;
    let bounds = SpectralBounds::of_symmetric(&a);
    assert_scalar_eq!(bounds.min, -1.0, comp = abs, tol = 1e-14);
    assert!(!bounds.is_positive_definite());
}

#[test]
fn invert_spd_matrix() {
    let a = spd_matrix();
    let a_inv = try_invert_spd(&a).unwrap();
    assert_matrix_eq!(a * a_inv, Matrix6::<f64>::identity(), comp = abs, tol = 1e-13);
    assert!(is_finite(&a_inv));
}

#[test]
fn invert_indefinite_matrix_fails() {
    let mut a = Matrix6::identity();
    a[(2, 2)] = -1.0;
    assert!(try_invert_spd(&a).is_none());
}

#[test]
fn is_finite_detects_nan() {
    let mut a = spd_matrix();
    assert!(is_finite(&a));
    a[(4, 2)] = f64::NAN;
    assert!(!is_finite(&a));
}
