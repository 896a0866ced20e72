use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::{MatrixError, Result};
use crate::math::float::is_zero;
use crate::math::{Matrix3, Point3, Real, Vector3};

use super::{compose, AffineLayout, AffineMap, RotationMatrix3x3, ScalingMatrix3x3, TranslationMatrix};

/// General affine transform: any product of scalings, rotations and
/// translations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformationMatrix<L> {
    m: L,
}

impl<L: AffineLayout> TransformationMatrix<L> {
    #[must_use]
    pub fn identity() -> Self {
        Self::from_parts(&Matrix3::identity(), &Vector3::zeros())
    }

    /// Wraps a raw matrix. Row 3 is read as the translation.
    #[must_use]
    pub fn from_matrix(m: L) -> Self {
        Self { m }
    }

    /// Builds the transform from its linear block and translation.
    #[must_use]
    pub fn from_parts(linear: &Matrix3, translation: &Vector3) -> Self {
        Self {
            m: L::assemble(linear, translation),
        }
    }

    /// Scale, then rotate, then translate.
    #[must_use]
    pub fn from_components<L2: AffineLayout>(
        translation: &TranslationMatrix<L2>,
        rotation: &RotationMatrix3x3,
        scale: &ScalingMatrix3x3,
    ) -> Self {
        let linear = scale.linear_part() * rotation.as_matrix();
        Self::from_parts(&linear, &translation.translation())
    }

    #[must_use]
    pub fn as_matrix(&self) -> &L {
        &self.m
    }

    /// The upper-left 3x3 block.
    #[must_use]
    pub fn linear(&self) -> Matrix3 {
        self.m.linear_block()
    }

    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.m.translation_row()
    }

    /// Determinant of the linear block.
    #[must_use]
    pub fn determinant(&self) -> Real {
        self.linear().determinant()
    }

    /// Scale factors, read as the norms of the linear block's rows.
    #[must_use]
    pub fn scale(&self) -> Vector3 {
        let linear = self.linear();
        Vector3::new(linear.row(0).norm(), linear.row(1).norm(), linear.row(2).norm())
    }

    /// Rotation left after dividing each row of the linear block by its
    /// scale. Rows with zero scale stay zero.
    #[must_use]
    pub fn rotation(&self) -> RotationMatrix3x3 {
        let mut linear = self.linear();
        let scale = self.scale();
        for (r, s) in scale.iter().enumerate() {
            if !is_zero(*s) {
                linear.row_mut(r).unscale_mut(*s);
            }
        }
        RotationMatrix3x3::from_matrix(linear)
    }

    /// Splits into translation, rotation and scaling such that
    /// `from_components(&t, &r, &s)` rebuilds the transform.
    #[must_use]
    pub fn decompose(&self) -> (TranslationMatrix<L>, RotationMatrix3x3, ScalingMatrix3x3) {
        (
            TranslationMatrix::from_vector(&self.translation()),
            self.rotation(),
            ScalingMatrix3x3::from_vector(&self.scale()),
        )
    }

    /// Inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the linear block cannot be inverted.
    pub fn invert(&self) -> Result<Self> {
        let linear = self.linear();
        let determinant = linear.determinant();
        if is_zero(determinant) {
            return Err(MatrixError::Singular { determinant }.into());
        }
        let inverse = linear
            .try_inverse()
            .ok_or(MatrixError::Singular { determinant })?;
        let translation = -inverse.tr_mul(&self.translation());
        Ok(Self::from_parts(&inverse, &translation))
    }

    /// Applies the transform to a point: `p · L + t`.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from(self.linear().tr_mul(&point.coords) + self.translation())
    }
}

impl<L: AffineLayout> Default for TransformationMatrix<L> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<L: AffineLayout> Index<(usize, usize)> for TransformationMatrix<L> {
    type Output = Real;

    fn index(&self, index: (usize, usize)) -> &Real {
        &self.m[index]
    }
}

impl<L: AffineLayout> IndexMut<(usize, usize)> for TransformationMatrix<L> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Real {
        &mut self.m[index]
    }
}

impl<L: AffineLayout> AffineMap for TransformationMatrix<L> {
    fn linear_part(&self) -> Matrix3 {
        self.linear()
    }

    fn translation_part(&self) -> Vector3 {
        self.translation()
    }
}

impl<L: AffineLayout, R: AffineMap> Mul<R> for TransformationMatrix<L> {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: R) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        Self::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout, R: AffineMap> MulAssign<R> for TransformationMatrix<L> {
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}
