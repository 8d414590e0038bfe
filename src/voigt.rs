//! Conversions between symmetric tensors and Voigt vectors.
//!
//! Strain vectors store engineering shear strains, so the off-diagonal tensor entries are
//! doubled when going from tensor to vector and halved in the opposite direction. Stress
//! vectors store the off-diagonal entries as they are. The two conventions are chosen so that
//! $\vec \sigma \cdot \vec \epsilon$ in Voigt form equals the double contraction
//! $\vec \sigma : \vec \epsilon$ of the tensors.
use crate::error::DimensionError;
use crate::Real;
use nalgebra::{Matrix2, Matrix3, Vector3, Vector6};
use numeric_literals::replace_float_literals;

/// Number of independent components of a symmetric 3x3 tensor.
pub const VOIGT_DIM: usize = 6;

/// Tensor indices $(i, j)$ associated with each Voigt component.
pub const VOIGT_INDICES: [(usize, usize); VOIGT_DIM] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Computes the Voigt strain vector of the infinitesimal strain associated with the given
/// displacement gradient.
///
/// The entries of `u_grad` are $\pd{u_i}{x_j}$ at index `(i, j)`. Since only the symmetric part
/// of the gradient enters the strain, the transposed convention gives the same result.
///
/// The returned vector is
/// $$
/// \vec \epsilon = (u_{1,1}, u_{2,2}, u_{3,3}, u_{2,3} + u_{3,2}, u_{1,3} + u_{3,1}, u_{2,1} + u_{1,2}).
/// $$
pub fn strain_from_displacement_gradient<T: Real>(u_grad: &Matrix3<T>) -> Vector6<T> {
    let g = u_grad;
    Vector6::new(
        g[(0, 0)],
        g[(1, 1)],
        g[(2, 2)],
        g[(1, 2)] + g[(2, 1)],
        g[(0, 2)] + g[(2, 0)],
        g[(0, 1)] + g[(1, 0)],
    )
}

/// Computes the in-plane Voigt strain $(u_{1,1}, u_{2,2}, u_{1,2} + u_{2,1})$ of a
/// two-dimensional displacement gradient.
pub fn strain_from_displacement_gradient_2d<T: Real>(u_grad: &Matrix2<T>) -> Vector3<T> {
    let g = u_grad;
    Vector3::new(g[(0, 0)], g[(1, 1)], g[(0, 1)] + g[(1, 0)])
}

/// Converts a symmetric strain tensor to a Voigt strain vector with engineering shear strains.
///
/// Only the upper triangle of the tensor is read.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn strain_vector_from_tensor<T: Real>(strain: &Matrix3<T>) -> Vector6<T> {
    Vector6::from_fn(|k, _| {
        let (i, j) = VOIGT_INDICES[k];
        if i == j {
            strain[(i, j)]
        } else {
            2.0 * strain[(i, j)]
        }
    })
}

/// Converts a Voigt strain vector with engineering shear strains to a symmetric strain tensor.
#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
pub fn strain_tensor_from_vector<T: Real>(strain: &Vector6<T>) -> Matrix3<T> {
    let mut tensor = Matrix3::zeros();
    for (k, &(i, j)) in VOIGT_INDICES.iter().enumerate() {
        if i == j {
            tensor[(i, j)] = strain[k];
        } else {
            tensor[(i, j)] = 0.5 * strain[k];
            tensor[(j, i)] = 0.5 * strain[k];
        }
    }
    tensor
}

/// Converts a symmetric stress tensor to a Voigt stress vector.
///
/// Only the upper triangle of the tensor is read.
pub fn stress_vector_from_tensor<T: Real>(stress: &Matrix3<T>) -> Vector6<T> {
    Vector6::from_fn(|k, _| {
        let (i, j) = VOIGT_INDICES[k];
        stress[(i, j)]
    })
}

/// Converts a Voigt stress vector to a symmetric stress tensor.
pub fn stress_tensor_from_vector<T: Real>(stress: &Vector6<T>) -> Matrix3<T> {
    let mut tensor = Matrix3::zeros();
    for (k, &(i, j)) in VOIGT_INDICES.iter().enumerate() {
        tensor[(i, j)] = stress[k];
        tensor[(j, i)] = stress[k];
    }
    tensor
}

/// Interprets a slice as a Voigt vector.
///
/// Returns an error if the slice does not have exactly six components.
pub fn voigt_vector_from_slice<T: Real>(components: &[T]) -> Result<Vector6<T>, DimensionError> {
    if components.len() == VOIGT_DIM {
        Ok(Vector6::from_column_slice(components))
    } else {
        Err(DimensionError::new(VOIGT_DIM, components.len()))
    }
}

/// Interprets a slice as a Voigt strain vector with engineering shear strains.
///
/// This is the checked entry point for strains that come from dynamically sized storage.
pub fn strain_from_slice<T: Real>(strain: &[T]) -> Result<Vector6<T>, DimensionError> {
    voigt_vector_from_slice(strain)
}
