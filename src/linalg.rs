//! Small dense linear algebra for 6x6 material matrices.
use crate::Real;
use nalgebra::{Cholesky, Matrix6, SymmetricEigen};

/// Smallest and largest eigenvalue of a symmetric matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpectralBounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Real> SpectralBounds<T> {
    /// Computes the spectral bounds of a symmetric matrix.
    ///
    /// Only the lower triangle of the matrix is used.
    pub fn of_symmetric(matrix: &Matrix6<T>) -> Self {
        let eigenvalues = SymmetricEigen::new(*matrix).eigenvalues;
        Self {
            min: eigenvalues.min(),
            max: eigenvalues.max(),
        }
    }

    pub fn is_positive_definite(&self) -> bool {
        self.min > T::zero()
    }

    /// The reciprocal of the spectral condition number, $\lambda_{min} / \lambda_{max}$.
    ///
    /// Only meaningful for positive definite matrices.
    pub fn reciprocal_condition_number(&self) -> T {
        self.min / self.max
    }
}

/// Returns the largest asymmetry $\max_{ij} |A_{ij} - A_{ji}|$ relative to the largest
/// absolute entry of the matrix.
///
/// Returns zero for the zero matrix.
pub fn relative_asymmetry<T: Real>(matrix: &Matrix6<T>) -> T {
    let scale = matrix.amax();
    if scale == T::zero() {
        return T::zero();
    }

    let mut max_diff = T::zero();
    for j in 0..6 {
        for i in (j + 1)..6 {
            max_diff = max_diff.max((matrix[(i, j)] - matrix[(j, i)]).abs());
        }
    }
    max_diff / scale
}

/// Determines whether the matrix is symmetric to within the given relative tolerance.
pub fn is_symmetric<T: Real>(matrix: &Matrix6<T>, rel_tol: T) -> bool {
    relative_asymmetry(matrix) <= rel_tol
}

/// Determines whether every entry of the matrix is finite.
pub fn is_finite<T: Real>(matrix: &Matrix6<T>) -> bool {
    matrix.iter().all(|x| x.is_finite())
}

/// Inverts a symmetric positive definite matrix by Cholesky factorization.
///
/// Returns `None` if the factorization fails, which happens when the matrix is not
/// (numerically) positive definite.
pub fn try_invert_spd<T: Real>(matrix: &Matrix6<T>) -> Option<Matrix6<T>> {
    Cholesky::new(*matrix).map(|cholesky| cholesky.inverse())
}
