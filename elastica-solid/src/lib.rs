//! Linear elastic material models for `elastica`.
//!
//! The central abstraction is [`LinearElasticMaterial`], which maps Voigt strain vectors to
//! Voigt stress vectors through a constant stiffness matrix. Materials are immutable once
//! constructed, so a single instance can be shared by any number of threads evaluating
//! stresses at quadrature points.
use elastica::nalgebra::{Matrix3, Matrix6, Vector6};
use elastica::voigt::{strain_from_displacement_gradient, stress_tensor_from_vector};
use elastica::Real;

pub mod batch;
pub mod materials;
pub mod regions;

#[cfg(feature = "proptest")]
pub mod proptest;

/// A linear elastic material with stiffness matrix $\vec C$ in Voigt notation.
///
/// Strain vectors use engineering shear strains, stress vectors use tensorial shear stresses.
pub trait LinearElasticMaterial<T: Real> {
    /// The $6 \times 6$ stiffness matrix $\vec C$ relating strain to stress.
    fn stiffness_matrix(&self) -> Matrix6<T>;

    /// Compute the Voigt stress vector $\vec \sigma = \vec C \vec \epsilon$.
    fn compute_stress(&self, strain: &Vector6<T>) -> Vector6<T> {
        self.stiffness_matrix() * strain
    }

    /// Compute the strain energy density $\psi = \frac{1}{2} \vec \epsilon^T \vec C \vec \epsilon$.
    fn compute_energy_density(&self, strain: &Vector6<T>) -> T {
        let half = T::from_f64(0.5).expect("literal must fit in T");
        half * strain.dot(&self.compute_stress(strain))
    }

    /// Compute the Cauchy stress tensor associated with the given displacement gradient.
    ///
    /// See [`strain_from_displacement_gradient`] for the gradient convention.
    fn compute_stress_tensor(&self, u_grad: &Matrix3<T>) -> Matrix3<T> {
        let strain = strain_from_displacement_gradient(u_grad);
        stress_tensor_from_vector(&self.compute_stress(&strain))
    }
}
