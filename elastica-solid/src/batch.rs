//! Stress evaluation for many points at once.
//!
//! Materials are immutable, so the points are processed in parallel without any synchronization.
use crate::LinearElasticMaterial;
use elastica::error::DimensionError;
use elastica::nalgebra::Vector6;
use elastica::voigt::VOIGT_DIM;
use elastica::Real;
use rayon::prelude::*;

/// Compute the stress for each strain in parallel, writing the results into `stresses`.
///
/// # Panics
///
/// Panics if `strains` and `stresses` have different lengths.
pub fn compute_stresses_par<T, M>(material: &M, strains: &[Vector6<T>], stresses: &mut [Vector6<T>])
where
    T: Real,
    M: LinearElasticMaterial<T> + Sync,
{
    assert_eq!(
        strains.len(),
        stresses.len(),
        "Number of stresses must match number of strains"
    );
    stresses
        .par_iter_mut()
        .zip(strains.par_iter())
        .for_each(|(stress, strain)| *stress = material.compute_stress(strain));
}

/// Compute the stress for each strain in a flat buffer of consecutive Voigt strain vectors.
///
/// # Errors
///
/// Returns an error if the length of `strains` is not a multiple of six. The error reports
/// the number of components in the incomplete trailing vector.
pub fn compute_stresses_from_slice<T, M>(material: &M, strains: &[T]) -> Result<Vec<Vector6<T>>, DimensionError>
where
    T: Real,
    M: LinearElasticMaterial<T> + Sync,
{
    let remainder = strains.len() % VOIGT_DIM;
    if remainder != 0 {
        return Err(DimensionError::new(VOIGT_DIM, remainder));
    }

    Ok(strains
        .par_chunks_exact(VOIGT_DIM)
        .map(|strain| material.compute_stress(&Vector6::from_column_slice(strain)))
        .collect())
}
