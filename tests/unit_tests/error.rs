use elastica::{DimensionError, InvalidMaterialError, MaterialErrorKind};

#[test]
fn dimension_error_reports_lengths() {
    let error = DimensionError::new(6, 4);
    assert_eq!(error.expected(), 6);
    assert_eq!(error.actual(), 4);
    assert_eq!(error.to_string(), "Dimension mismatch: expected 6 components, got 4");
}

#[test]
fn invalid_material_error_reports_kind() {
    let error = InvalidMaterialError::from(MaterialErrorKind::NonPositiveModulus { name: "E1" });
    assert_eq!(error.kind(), MaterialErrorKind::NonPositiveModulus { name: "E1" });
    assert_eq!(error.to_string(), "Invalid material: modulus E1 must be strictly positive");

    let error = InvalidMaterialError::new(MaterialErrorKind::NotPositiveDefinite);
    assert_eq!(error.to_string(), "Invalid material: compliance matrix is not positive definite");
}

#[test]
fn errors_are_std_errors() {
    fn boxed(error: impl std::error::Error + Send + Sync + 'static) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(error)
    }
    let errors = [
        boxed(DimensionError::new(6, 7)),
        boxed(InvalidMaterialError::new(MaterialErrorKind::IllConditioned)),
    ];
    assert!(errors.iter().all(|error| error.source().is_none()));
}
