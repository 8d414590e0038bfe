//! Linear anisotropic elasticity in Voigt notation.
//!
//! This crate contains the low-level building blocks shared by the material models in
//! `elastica-solid`: conversions between tensors and Voigt vectors, the dense linear algebra
//! needed to turn a compliance matrix into a stiffness matrix, and the error types
//! that describe inadmissible input.
//!
//! Voigt vectors use the component ordering $(11, 22, 33, 23, 13, 12)$ throughout.
//! Strain vectors carry *engineering* shear strains $\gamma_{ij} = 2 \epsilon_{ij}$, whereas
//! stress vectors carry the tensorial shear stresses $\sigma_{ij}$.
use nalgebra::RealField;

pub mod error;
pub mod linalg;
pub mod voigt;

#[cfg(feature = "proptest")]
pub mod proptest;

pub extern crate nalgebra;

pub use error::{DimensionError, InvalidMaterialError, MaterialErrorKind};

/// Scalar type used by `elastica` routines.
///
/// A trait alias for real fields that are cheap to copy, such as `f32` and `f64`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
