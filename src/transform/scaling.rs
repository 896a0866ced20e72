use std::ops::{Index, IndexMut, Mul, MulAssign};
use std::sync::OnceLock;

use crate::error::{MatrixError, Result};
use crate::math::float::is_zero;
use crate::math::{Matrix3, Real, Vector3};

use super::{
    compose, AffineLayout, AffineMap, RotationMatrix3x3, TransformationMatrix,
    TransformationMatrix4x4, TranslationMatrix,
};

/// A 3x3 matrix whose diagonal holds the scale factors along X, Y and Z.
///
/// Off-diagonal entries are stored but never read by composition: any 3x3
/// matrix can be wrapped and treated as a scaling through its diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingMatrix3x3 {
    m: Matrix3,
}

impl ScalingMatrix3x3 {
    #[must_use]
    pub fn new(sx: Real, sy: Real, sz: Real) -> Self {
        Self::from_vector(&Vector3::new(sx, sy, sz))
    }

    #[must_use]
    pub fn from_vector(scale: &Vector3) -> Self {
        Self {
            m: Matrix3::from_diagonal(scale),
        }
    }

    /// Wraps an arbitrary matrix without validation.
    #[must_use]
    pub fn from_matrix(m: Matrix3) -> Self {
        Self { m }
    }

    /// The shared identity scaling.
    #[must_use]
    pub fn identity() -> &'static Self {
        static IDENTITY: OnceLock<ScalingMatrix3x3> = OnceLock::new();
        IDENTITY.get_or_init(|| Self::new(1.0, 1.0, 1.0))
    }

    #[must_use]
    pub fn as_matrix(&self) -> &Matrix3 {
        &self.m
    }

    /// Scale factors `(x, y, z)`.
    #[must_use]
    pub fn scale(&self) -> (Real, Real, Real) {
        (self.m[(0, 0)], self.m[(1, 1)], self.m[(2, 2)])
    }

    #[must_use]
    pub fn scale_vector(&self) -> Vector3 {
        self.m.diagonal()
    }

    /// Product of the scale factors.
    #[must_use]
    pub fn determinant(&self) -> Real {
        self.m[(0, 0)] * self.m[(1, 1)] * self.m[(2, 2)]
    }

    /// Reciprocal scale factors.
    ///
    /// Every factor must be non-zero; this is only checked in debug builds.
    /// Use [`ScalingMatrix3x3::try_invert`] to validate instead.
    #[must_use]
    pub fn invert(&self) -> Self {
        debug_assert!(
            !self.scale_vector().iter().any(|s| is_zero(*s)),
            "cannot invert a scaling with a zero factor"
        );
        Self::from_vector(&self.scale_vector().map(|s| 1.0 / s))
    }

    /// Reciprocal scale factors.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ZeroScale`] naming the first zero axis.
    pub fn try_invert(&self) -> Result<Self> {
        let scale = self.scale_vector();
        if let Some(axis) = ['x', 'y', 'z']
            .into_iter()
            .zip(scale.iter())
            .find_map(|(axis, s)| is_zero(*s).then_some(axis))
        {
            return Err(MatrixError::ZeroScale { axis }.into());
        }
        Ok(Self::from_vector(&scale.map(|s| 1.0 / s)))
    }
}

impl Default for ScalingMatrix3x3 {
    fn default() -> Self {
        *Self::identity()
    }
}

impl Index<(usize, usize)> for ScalingMatrix3x3 {
    type Output = Real;

    fn index(&self, index: (usize, usize)) -> &Real {
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for ScalingMatrix3x3 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Real {
        &mut self.m[index]
    }
}

impl AffineMap for ScalingMatrix3x3 {
    fn linear_part(&self) -> Matrix3 {
        Matrix3::from_diagonal(&self.scale_vector())
    }

    fn translation_part(&self) -> Vector3 {
        Vector3::zeros()
    }
}

impl Mul for ScalingMatrix3x3 {
    type Output = ScalingMatrix3x3;

    fn mul(self, rhs: ScalingMatrix3x3) -> ScalingMatrix3x3 {
        Self::from_vector(&self.scale_vector().component_mul(&rhs.scale_vector()))
    }
}

impl MulAssign for ScalingMatrix3x3 {
    fn mul_assign(&mut self, rhs: ScalingMatrix3x3) {
        *self = *self * rhs;
    }
}

impl Mul<RotationMatrix3x3> for ScalingMatrix3x3 {
    type Output = TransformationMatrix4x4;

    fn mul(self, rhs: RotationMatrix3x3) -> TransformationMatrix4x4 {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout> Mul<TranslationMatrix<L>> for ScalingMatrix3x3 {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: TranslationMatrix<L>) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout> Mul<TransformationMatrix<L>> for ScalingMatrix3x3 {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: TransformationMatrix<L>) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}
