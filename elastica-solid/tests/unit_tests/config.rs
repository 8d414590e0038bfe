use crate::unit_tests::beam_parameters;
use elastica::MaterialErrorKind;
use elastica_solid::materials::{IsotropicMaterial, LameParameters, OrthotropicMaterial, OrthotropicParameters};

const BEAM_JSON: &str = r#"{
    "e1": 1.0, "e2": 0.0858, "e3": 0.0456,
    "nu12": 0.34, "nu13": 0.42, "nu23": 0.29,
    "g23": 0.0155, "g13": 0.0538, "g12": 0.0786
}"#;

#[test]
fn parameters_from_json() {
    let parameters: OrthotropicParameters<f64> = serde_json::from_str(BEAM_JSON).unwrap();
    assert_eq!(parameters, beam_parameters());
}

#[test]
fn orthotropic_material_from_json_is_validated() {
    let material: OrthotropicMaterial<f64> = serde_json::from_str(BEAM_JSON).unwrap();
    assert_eq!(material, OrthotropicMaterial::new(beam_parameters()).unwrap());

    let inadmissible = BEAM_JSON.replace("\"e1\": 1.0", "\"e1\": 0.0");
    let error = serde_json::from_str::<OrthotropicMaterial<f64>>(&inadmissible).unwrap_err();
    assert!(error.to_string().contains("modulus E1 must be strictly positive"));
}

#[test]
fn orthotropic_material_serializes_as_parameters() {
    let material = OrthotropicMaterial::new(beam_parameters()).unwrap();
    let json = serde_json::to_value(&material).unwrap();
    assert_eq!(json, serde_json::to_value(beam_parameters()).unwrap());
}

#[test]
fn isotropic_material_from_json_is_validated() {
    let material: IsotropicMaterial<f64> = serde_json::from_str(r#"{ "mu": 384.0, "lambda": 577.0 }"#).unwrap();
    assert_eq!(
        material.lame_parameters(),
        &LameParameters {
            mu: 384.0,
            lambda: 577.0
        }
    );

    let result = serde_json::from_str::<IsotropicMaterial<f64>>(r#"{ "mu": -1.0, "lambda": 577.0 }"#);
    let error = result.unwrap_err();
    let expected_message = MaterialErrorKind::NonPositiveModulus { name: "mu" }.to_string();
    assert!(error.to_string().contains(&expected_message));
}
