//! Error types for material construction and evaluation.
use std::error::Error;
use std::fmt;

/// Indicates that a vector did not have the expected number of components.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DimensionError {
    expected: usize,
    actual: usize,
}

impl DimensionError {
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    /// The number of components the operation requires.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// The number of components that was supplied.
    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dimension mismatch: expected {} components, got {}",
            self.expected, self.actual
        )
    }
}

impl Error for DimensionError {}

/// The reason a set of material constants was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaterialErrorKind {
    /// A modulus (Young's modulus or shear modulus) is zero or negative.
    NonPositiveModulus { name: &'static str },
    /// A material constant is NaN or infinite.
    NonFiniteConstant { name: &'static str },
    /// The compliance matrix has a non-positive eigenvalue, so the material
    /// does not have a positive strain energy for every strain state.
    NotPositiveDefinite,
    /// The compliance matrix is too close to singular to be inverted accurately.
    IllConditioned,
    /// The computed stiffness matrix contains NaN or infinite entries.
    NonFiniteStiffness,
    /// The computed stiffness matrix is not symmetric to within tolerance.
    AsymmetricStiffness,
}

impl fmt::Display for MaterialErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NonPositiveModulus { name } => write!(f, "modulus {name} must be strictly positive"),
            Self::NonFiniteConstant { name } => write!(f, "material constant {name} must be finite"),
            Self::NotPositiveDefinite => write!(f, "compliance matrix is not positive definite"),
            Self::IllConditioned => write!(f, "compliance matrix is ill-conditioned"),
            Self::NonFiniteStiffness => write!(f, "stiffness matrix has non-finite entries"),
            Self::AsymmetricStiffness => write!(f, "stiffness matrix is not symmetric"),
        }
    }
}

/// Indicates that a set of material constants is not physically admissible,
/// or that the stiffness matrix derived from them could not be computed reliably.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidMaterialError {
    kind: MaterialErrorKind,
}

impl InvalidMaterialError {
    pub fn new(kind: MaterialErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> MaterialErrorKind {
        self.kind
    }
}

impl From<MaterialErrorKind> for InvalidMaterialError {
    fn from(kind: MaterialErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for InvalidMaterialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid material: {}", self.kind)
    }
}

impl Error for InvalidMaterialError {}
