//! Strategies for strain states, for use in property-based tests.
use ::proptest::prelude::*;
use nalgebra::{Matrix3, Vector6};

fn small_component() -> impl Strategy<Value = f64> {
    // Infinitesimal strain theory only makes sense for small gradients, and moderate values
    // also keep round-off errors in products with stiff materials in check
    -1e-2..1e-2
}

/// Voigt strain vectors with small components.
pub fn strain_vector() -> impl Strategy<Value = Vector6<f64>> {
    prop::array::uniform6(small_component()).prop_map(|components| Vector6::from_column_slice(&components))
}

/// Displacement gradients with small entries.
pub fn displacement_gradient() -> impl Strategy<Value = Matrix3<f64>> {
    prop::array::uniform9(small_component()).prop_map(|entries| Matrix3::from_row_slice(&entries))
}
