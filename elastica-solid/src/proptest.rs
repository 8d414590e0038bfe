//! Strategies for admissible material constants, for use in property-based tests.
use crate::materials::{OrthotropicMaterial, OrthotropicParameters};
use ::proptest::prelude::*;

/// Orthotropic constants whose compliance matrix is guaranteed to be positive definite.
///
/// With $a_{ij} = \nu_{ij} \sqrt{E_j / E_i}$, the normal block of the compliance matrix is congruent
/// to the matrix with unit diagonal and off-diagonal entries $-a_{ij}$. Keeping $|a_{ij}| < 1/2$
/// makes that matrix strictly diagonally dominant, hence positive definite.
pub fn orthotropic_parameters() -> impl Strategy<Value = OrthotropicParameters<f64>> {
    let modulus = 0.01f64..10.0;
    let coupling = -0.45f64..0.45;
    (
        [modulus.clone(), modulus.clone(), modulus.clone()],
        [coupling.clone(), coupling.clone(), coupling],
        [modulus.clone(), modulus.clone(), modulus],
    )
        .prop_map(|([e1, e2, e3], [a12, a13, a23], [g23, g13, g12])| OrthotropicParameters {
            e1,
            e2,
            e3,
            nu12: a12 * (e1 / e2).sqrt(),
            nu13: a13 * (e1 / e3).sqrt(),
            nu23: a23 * (e2 / e3).sqrt(),
            g23,
            g13,
            g12,
        })
}

impl Arbitrary for OrthotropicMaterial<f64> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        orthotropic_parameters()
            .prop_map(|parameters| {
                OrthotropicMaterial::new(parameters).expect("Strategy only generates admissible constants")
            })
            .boxed()
    }
}
