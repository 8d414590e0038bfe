use elastica::nalgebra::{vector, Vector6};
use elastica_solid::materials::{IsotropicMaterial, YoungPoisson};
use elastica_solid::regions::{RegionMaterials, RegionTag};
use elastica_solid::LinearElasticMaterial;

const INCLUSION: RegionTag = 1;
const MATRIX: RegionTag = 2;

/// A stiff circular inclusion embedded in a softer matrix.
fn inclusion_and_matrix() -> RegionMaterials<IsotropicMaterial<f64>> {
    let inclusion = IsotropicMaterial::from_young_poisson(YoungPoisson {
        young: 11.0,
        poisson: 0.3,
    })
    .unwrap();
    let matrix = IsotropicMaterial::from_young_poisson(YoungPoisson {
        young: 0.8,
        poisson: 0.35,
    })
    .unwrap();
    RegionMaterials::new()
        .with_region(INCLUSION, inclusion)
        .with_region(MATRIX, matrix)
}

#[test]
fn region_lookup() {
    let regions = inclusion_and_matrix();
    assert_eq!(regions.len(), 2);
    assert!(!regions.is_empty());
    assert_eq!(regions.tags(), vec![INCLUSION, MATRIX]);
    assert!(regions.get(INCLUSION).is_some());

    let error = regions.material_for(7).unwrap_err();
    assert_eq!(error.tag(), 7);
    assert_eq!(error.to_string(), "No material assigned to region 7");
}

#[test]
fn insert_replaces_previous_material() {
    let mut regions = inclusion_and_matrix();
    let replacement = *regions.material_for(MATRIX).unwrap();
    let previous = regions.insert(INCLUSION, replacement);

    assert!(previous.is_some());
    assert_eq!(regions.len(), 2);
    assert_eq!(regions.get(INCLUSION), regions.get(MATRIX));
}

#[test]
fn stresses_use_material_of_each_region() {
    let regions = inclusion_and_matrix();
    let strain = vector![1e-3, 0.0, 0.0, 0.0, 0.0, 2e-3];
    let tags = [INCLUSION, MATRIX, MATRIX, INCLUSION];
    let strains = [strain; 4];

    let stresses = regions.compute_stresses_par(&tags, &strains).unwrap();
    let inclusion_stress = regions.material_for(INCLUSION).unwrap().compute_stress(&strain);
    let matrix_stress = regions.material_for(MATRIX).unwrap().compute_stress(&strain);

    assert_eq!(stresses, vec![inclusion_stress, matrix_stress, matrix_stress, inclusion_stress]);
    // The inclusion is stiffer than the matrix
    assert!(inclusion_stress[0] > matrix_stress[0]);
}

#[test]
fn stresses_with_unknown_region_fail() {
    let regions = inclusion_and_matrix();
    let strains = [Vector6::zeros(); 3];
    let error = regions
        .compute_stresses_par(&[INCLUSION, 3, MATRIX], &strains)
        .unwrap_err();
    assert_eq!(error.tag(), 3);
}

#[test]
fn regions_from_iterator() {
    let material = IsotropicMaterial::from_young_poisson(YoungPoisson {
        young: 1.0,
        poisson: 0.25,
    })
    .unwrap();
    let regions: RegionMaterials<_> = (1..=3).map(|tag| (tag, material)).collect();
    assert_eq!(regions.tags(), vec![1, 2, 3]);
    assert!(RegionMaterials::<IsotropicMaterial<f64>>::default().is_empty());
}
