use crate::LinearElasticMaterial;
use elastica::error::{DimensionError, InvalidMaterialError, MaterialErrorKind};
use elastica::linalg::{is_finite, is_symmetric, try_invert_spd, SpectralBounds};
use elastica::nalgebra::{Matrix3, Matrix6, Vector6};
use elastica::voigt::{strain_from_displacement_gradient, strain_from_slice};
use elastica::Real;
use log::debug;
use numeric_literals::replace_float_literals;
use serde::{Deserialize, Serialize};

/// Relative tolerance for the symmetry of a computed stiffness matrix.
pub const STIFFNESS_SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Compliance matrices whose reciprocal condition number falls below this threshold are
/// considered numerically singular.
pub const MIN_RECIPROCAL_CONDITION_NUMBER: f64 = 1e-12;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LameParameters<T> {
    pub mu: T,
    pub lambda: T,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoungPoisson<T> {
    pub young: T,
    pub poisson: T,
}

impl<T> From<YoungPoisson<T>> for LameParameters<T>
where
    T: Real,
{
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    fn from(params: YoungPoisson<T>) -> Self {
        let YoungPoisson { young, poisson } = params;
        let mu = 0.5 * young / (1.0 + poisson);
        let lambda = 2.0 * mu * poisson / (1.0 - 2.0 * poisson);
        Self { mu, lambda }
    }
}

/// The nine engineering constants of an orthotropic material.
///
/// Indices refer to the material axes. The Poisson ratio $\nu_{ij}$ is the negated ratio of the
/// transverse strain in direction $j$ to the axial strain in direction $i$ under uniaxial stress
/// in direction $i$. The remaining ratios follow from the symmetry relation
/// $\nu_{ij} / E_i = \nu_{ji} / E_j$, see [`dependent_poisson_ratios`](Self::dependent_poisson_ratios).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrthotropicParameters<T> {
    pub e1: T,
    pub e2: T,
    pub e3: T,
    pub nu12: T,
    pub nu13: T,
    pub nu23: T,
    pub g23: T,
    pub g13: T,
    pub g12: T,
}

impl<T: Real> OrthotropicParameters<T> {
    /// The constants of an isotropic material, with shear modulus $G = E / (2 (1 + \nu))$.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn isotropic(young: T, poisson: T) -> Self {
        let shear = young / (2.0 * (1.0 + poisson));
        Self {
            e1: young,
            e2: young,
            e3: young,
            nu12: poisson,
            nu13: poisson,
            nu23: poisson,
            g23: shear,
            g13: shear,
            g12: shear,
        }
    }

    /// Returns the constants with every modulus divided by the reference modulus `e0`.
    ///
    /// Poisson ratios are dimensionless and therefore left unchanged.
    pub fn normalized(&self, e0: T) -> Self {
        Self {
            e1: self.e1 / e0,
            e2: self.e2 / e0,
            e3: self.e3 / e0,
            g23: self.g23 / e0,
            g13: self.g13 / e0,
            g12: self.g12 / e0,
            ..*self
        }
    }

    /// The dependent Poisson ratios $[\nu_{21}, \nu_{31}, \nu_{32}]$.
    pub fn dependent_poisson_ratios(&self) -> [T; 3] {
        [
            self.nu12 * self.e2 / self.e1,
            self.nu13 * self.e3 / self.e1,
            self.nu23 * self.e3 / self.e2,
        ]
    }

    /// Checks that every constant is finite and that every modulus is strictly positive.
    pub fn check_moduli(&self) -> Result<(), InvalidMaterialError> {
        let constants = [
            ("E1", self.e1),
            ("E2", self.e2),
            ("E3", self.e3),
            ("nu12", self.nu12),
            ("nu13", self.nu13),
            ("nu23", self.nu23),
            ("G23", self.g23),
            ("G13", self.g13),
            ("G12", self.g12),
        ];
        for (name, value) in constants {
            if !value.is_finite() {
                return Err(MaterialErrorKind::NonFiniteConstant { name }.into());
            }
        }

        let moduli = [
            ("E1", self.e1),
            ("E2", self.e2),
            ("E3", self.e3),
            ("G23", self.g23),
            ("G13", self.g13),
            ("G12", self.g12),
        ];
        for (name, value) in moduli {
            if value <= T::zero() {
                return Err(MaterialErrorKind::NonPositiveModulus { name }.into());
            }
        }
        Ok(())
    }

    /// Assembles the compliance matrix $\vec S$ in Voigt order $(11, 22, 33, 23, 13, 12)$.
    ///
    /// The normal block is
    /// $$
    /// \begin{pmatrix}
    ///     1/E_1 & -\nu_{12}/E_1 & -\nu_{13}/E_1 \\\\
    ///     -\nu_{12}/E_1 & 1/E_2 & -\nu_{23}/E_2 \\\\
    ///     -\nu_{13}/E_1 & -\nu_{23}/E_2 & 1/E_3
    /// \end{pmatrix},
    /// $$
    /// the shear block is $\operatorname{diag}(1/G_{23}, 1/G_{13}, 1/G_{12})$ and normal and shear
    /// components are uncoupled.
    ///
    /// No validation is performed, so the result may be singular or indefinite for
    /// inadmissible constants.
    pub fn compliance_matrix(&self) -> Matrix6<T> {
        let one = T::one();
        let s12 = -self.nu12 / self.e1;
        let s13 = -self.nu13 / self.e1;
        let s23 = -self.nu23 / self.e2;

        let mut s = Matrix6::zeros();
        s[(0, 0)] = one / self.e1;
        s[(1, 1)] = one / self.e2;
        s[(2, 2)] = one / self.e3;
        s[(3, 3)] = one / self.g23;
        s[(4, 4)] = one / self.g13;
        s[(5, 5)] = one / self.g12;
        s[(0, 1)] = s12;
        s[(1, 0)] = s12;
        s[(0, 2)] = s13;
        s[(2, 0)] = s13;
        s[(1, 2)] = s23;
        s[(2, 1)] = s23;
        s
    }
}

/// A linear elastic material with orthotropic symmetry.
///
/// The material stores its compliance matrix $\vec S$ and the stiffness matrix
/// $\vec C = \vec S^{-1}$, both computed once at construction. Evaluation is a single
/// matrix-vector product
/// $$
/// \vec \sigma = \vec C \vec \epsilon,
/// $$
/// where $\vec \epsilon$ holds engineering shear strains $(\gamma_{23}, \gamma_{13}, \gamma_{12})$
/// and $\vec \sigma$ holds the shear stresses $(\sigma_{23}, \sigma_{13}, \sigma_{12})$.
///
/// When deserialized, the material is built from its [`OrthotropicParameters`] and
/// validated like [`OrthotropicMaterial::new`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrthotropicParameters<T>", into = "OrthotropicParameters<T>")]
#[serde(bound(serialize = "T: Real + Serialize"))]
#[serde(bound(deserialize = "T: Real + Deserialize<'de>"))]
pub struct OrthotropicMaterial<T> {
    parameters: OrthotropicParameters<T>,
    compliance: Matrix6<T>,
    stiffness: Matrix6<T>,
}

/// Checks that a computed stiffness matrix is finite and symmetric to within
/// [`STIFFNESS_SYMMETRY_TOLERANCE`].
///
/// An asymmetric matrix is reported, never symmetrized.
pub fn check_stiffness_matrix<T: Real>(stiffness: &Matrix6<T>) -> Result<(), InvalidMaterialError> {
    if !is_finite(stiffness) {
        return Err(MaterialErrorKind::NonFiniteStiffness.into());
    }
    let symmetry_tol = T::from_f64(STIFFNESS_SYMMETRY_TOLERANCE).expect("literal must fit in T");
    if !is_symmetric(stiffness, symmetry_tol) {
        return Err(MaterialErrorKind::AsymmetricStiffness.into());
    }
    Ok(())
}

fn rejected(kind: MaterialErrorKind) -> InvalidMaterialError {
    debug!("Rejected orthotropic material: {}", kind);
    InvalidMaterialError::new(kind)
}

impl<T: Real> OrthotropicMaterial<T> {
    /// Constructs the material from its engineering constants.
    ///
    /// # Errors
    ///
    /// Returns an error if a constant is not finite, if a modulus is not strictly positive,
    /// if the compliance matrix is not positive definite or too close to singular, or if the
    /// computed stiffness matrix fails its finiteness and symmetry checks.
    pub fn new(parameters: OrthotropicParameters<T>) -> Result<Self, InvalidMaterialError> {
        parameters
            .check_moduli()
            .map_err(|err| rejected(err.kind()))?;

        let compliance = parameters.compliance_matrix();
        // Reciprocals of tiny moduli overflow
        if !is_finite(&compliance) {
            return Err(rejected(MaterialErrorKind::IllConditioned));
        }
        let bounds = SpectralBounds::of_symmetric(&compliance);
        if !bounds.is_positive_definite() {
            return Err(rejected(MaterialErrorKind::NotPositiveDefinite));
        }
        let min_rcond = T::from_f64(MIN_RECIPROCAL_CONDITION_NUMBER).expect("literal must fit in T");
        if bounds.reciprocal_condition_number() < min_rcond {
            return Err(rejected(MaterialErrorKind::IllConditioned));
        }

        let stiffness =
            try_invert_spd(&compliance).ok_or_else(|| rejected(MaterialErrorKind::NotPositiveDefinite))?;
        check_stiffness_matrix(&stiffness).map_err(|err| rejected(err.kind()))?;

        debug!(
            "Constructed orthotropic material with compliance eigenvalues in [{}, {}]",
            bounds.min, bounds.max
        );
        Ok(Self {
            parameters,
            compliance,
            stiffness,
        })
    }

    /// Constructs the material from the nine engineering constants in the order
    /// $E_1, E_2, E_3, \nu_{12}, \nu_{13}, \nu_{23}, G_{23}, G_{13}, G_{12}$.
    #[allow(clippy::too_many_arguments)]
    pub fn from_constants(
        e1: T,
        e2: T,
        e3: T,
        nu12: T,
        nu13: T,
        nu23: T,
        g23: T,
        g13: T,
        g12: T,
    ) -> Result<Self, InvalidMaterialError> {
        Self::new(OrthotropicParameters {
            e1,
            e2,
            e3,
            nu12,
            nu13,
            nu23,
            g23,
            g13,
            g12,
        })
    }

    pub fn parameters(&self) -> &OrthotropicParameters<T> {
        &self.parameters
    }

    /// The compliance matrix $\vec S$.
    pub fn compliance(&self) -> &Matrix6<T> {
        &self.compliance
    }

    /// The stiffness matrix $\vec C = \vec S^{-1}$.
    pub fn stiffness(&self) -> &Matrix6<T> {
        &self.stiffness
    }

    /// Compute the Voigt stress vector associated with the given Voigt strain vector.
    pub fn stress(&self, strain: &Vector6<T>) -> Vector6<T> {
        &self.stiffness * strain
    }

    /// Compute the Voigt stress vector for a strain given as a slice.
    ///
    /// # Errors
    ///
    /// Returns an error if `strain` does not have exactly six components.
    pub fn stress_from_strain(&self, strain: &[T]) -> Result<Vector6<T>, DimensionError> {
        let strain = strain_from_slice(strain)?;
        Ok(self.stress(&strain))
    }

    /// Compute the Voigt stress vector for the strain of the given displacement gradient.
    pub fn stress_from_displacement_gradient(&self, u_grad: &Matrix3<T>) -> Vector6<T> {
        self.stress(&strain_from_displacement_gradient(u_grad))
    }

    /// Compute the Voigt strain vector that produces the given Voigt stress vector.
    pub fn strain_from_stress(&self, stress: &Vector6<T>) -> Vector6<T> {
        &self.compliance * stress
    }

    /// The $3 \times 3$ stiffness matrix for plane strain in the 1-2 plane.
    ///
    /// Relates $(\epsilon_{11}, \epsilon_{22}, \gamma_{12})$ to $(\sigma_{11}, \sigma_{22}, \sigma_{12})$
    /// under the constraint $\epsilon_{33} = \gamma_{23} = \gamma_{13} = 0$.
    pub fn plane_strain_stiffness(&self) -> Matrix3<T> {
        const IN_PLANE: [usize; 3] = [0, 1, 5];
        Matrix3::from_fn(|i, j| self.stiffness[(IN_PLANE[i], IN_PLANE[j])])
    }

    /// The $3 \times 3$ reduced stiffness matrix for plane stress in the 1-2 plane.
    ///
    /// Relates $(\epsilon_{11}, \epsilon_{22}, \gamma_{12})$ to $(\sigma_{11}, \sigma_{22}, \sigma_{12})$
    /// under the constraint $\sigma_{33} = \sigma_{23} = \sigma_{13} = 0$.
    pub fn plane_stress_stiffness(&self) -> Matrix3<T> {
        let s = &self.compliance;
        // The in-plane block of S is a principal submatrix of a positive definite matrix,
        // so the determinant is positive
        let det = s[(0, 0)] * s[(1, 1)] - s[(0, 1)] * s[(0, 1)];
        let q11 = s[(1, 1)] / det;
        let q22 = s[(0, 0)] / det;
        let q12 = -s[(0, 1)] / det;
        let q66 = T::one() / s[(5, 5)];
        let zero = T::zero();
        Matrix3::new(q11, q12, zero, q12, q22, zero, zero, zero, q66)
    }
}

impl<T: Real> TryFrom<OrthotropicParameters<T>> for OrthotropicMaterial<T> {
    type Error = InvalidMaterialError;

    fn try_from(parameters: OrthotropicParameters<T>) -> Result<Self, Self::Error> {
        Self::new(parameters)
    }
}

impl<T: Real> From<OrthotropicMaterial<T>> for OrthotropicParameters<T> {
    fn from(material: OrthotropicMaterial<T>) -> Self {
        material.parameters
    }
}

impl<T: Real> LinearElasticMaterial<T> for OrthotropicMaterial<T> {
    fn stiffness_matrix(&self) -> Matrix6<T> {
        self.stiffness
    }

    fn compute_stress(&self, strain: &Vector6<T>) -> Vector6<T> {
        self.stress(strain)
    }
}

/// The isotropic linear elastic material model.
///
/// Given Lamé parameters $\mu$ and $\lambda$, the stress is
/// $$
/// \vec \sigma = 2 \mu \vec \epsilon + \lambda \operatorname{tr}(\vec \epsilon) \vec I,
/// $$
/// which in Voigt notation corresponds to the stiffness matrix with normal block entries
/// $C_{ii} = \lambda + 2 \mu$, $C_{ij} = \lambda$ for $i \neq j$, and shear block $\mu \vec I$.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LameParameters<T>", into = "LameParameters<T>")]
#[serde(bound(serialize = "T: Real + Serialize"))]
#[serde(bound(deserialize = "T: Real + Deserialize<'de>"))]
pub struct IsotropicMaterial<T> {
    lame: LameParameters<T>,
}

impl<T: Real> IsotropicMaterial<T> {
    /// Constructs the material from Lamé parameters.
    ///
    /// # Errors
    ///
    /// Returns an error unless both parameters are finite, $\mu > 0$ and the bulk modulus
    /// $\lambda + \frac{2}{3} \mu$ is positive.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn new(lame: LameParameters<T>) -> Result<Self, InvalidMaterialError> {
        let LameParameters { mu, lambda } = lame;
        if !mu.is_finite() {
            return Err(MaterialErrorKind::NonFiniteConstant { name: "mu" }.into());
        }
        if !lambda.is_finite() {
            return Err(MaterialErrorKind::NonFiniteConstant { name: "lambda" }.into());
        }
        if mu <= 0.0 {
            return Err(MaterialErrorKind::NonPositiveModulus { name: "mu" }.into());
        }
        if 3.0 * lambda + 2.0 * mu <= 0.0 {
            return Err(MaterialErrorKind::NotPositiveDefinite.into());
        }
        Ok(Self { lame })
    }

    /// Constructs the material from Young's modulus and Poisson's ratio.
    #[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
    pub fn from_young_poisson(params: YoungPoisson<T>) -> Result<Self, InvalidMaterialError> {
        if !params.young.is_finite() {
            return Err(MaterialErrorKind::NonFiniteConstant { name: "E" }.into());
        }
        if !params.poisson.is_finite() {
            return Err(MaterialErrorKind::NonFiniteConstant { name: "nu" }.into());
        }
        if !(params.young > 0.0) {
            return Err(MaterialErrorKind::NonPositiveModulus { name: "E" }.into());
        }
        if !(params.poisson > -1.0 && params.poisson < 0.5) {
            return Err(MaterialErrorKind::NotPositiveDefinite.into());
        }
        Self::new(LameParameters::from(params))
    }

    pub fn lame_parameters(&self) -> &LameParameters<T> {
        &self.lame
    }
}

impl<T: Real> TryFrom<LameParameters<T>> for IsotropicMaterial<T> {
    type Error = InvalidMaterialError;

    fn try_from(lame: LameParameters<T>) -> Result<Self, Self::Error> {
        Self::new(lame)
    }
}

impl<T: Real> From<IsotropicMaterial<T>> for LameParameters<T> {
    fn from(material: IsotropicMaterial<T>) -> Self {
        material.lame
    }
}

#[replace_float_literals(T::from_f64(literal).expect("literal must fit in T"))]
impl<T: Real> LinearElasticMaterial<T> for IsotropicMaterial<T> {
    fn stiffness_matrix(&self) -> Matrix6<T> {
        let LameParameters { mu, lambda } = self.lame;
        let mut c = Matrix6::zeros();
        for i in 0..3 {
            for j in 0..3 {
                c[(i, j)] = lambda;
            }
            c[(i, i)] = lambda + 2.0 * mu;
            c[(i + 3, i + 3)] = mu;
        }
        c
    }

    fn compute_stress(&self, strain: &Vector6<T>) -> Vector6<T> {
        let LameParameters { mu, lambda } = self.lame;
        let volumetric = lambda * (strain[0] + strain[1] + strain[2]);
        Vector6::new(
            volumetric + 2.0 * mu * strain[0],
            volumetric + 2.0 * mu * strain[1],
            volumetric + 2.0 * mu * strain[2],
            mu * strain[3],
            mu * strain[4],
            mu * strain[5],
        )
    }
}
