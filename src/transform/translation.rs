use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::math::{Matrix3, Real, Vector3};

use super::{compose, AffineLayout, AffineMap, RotationMatrix3x3, ScalingMatrix3x3, TransformationMatrix};

/// A pure translation stored in a 4x3 or 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationMatrix<L> {
    m: L,
}

impl<L: AffineLayout> TranslationMatrix<L> {
    #[must_use]
    pub fn new(x: Real, y: Real, z: Real) -> Self {
        Self::from_vector(&Vector3::new(x, y, z))
    }

    #[must_use]
    pub fn from_vector(translation: &Vector3) -> Self {
        Self {
            m: L::assemble(&Matrix3::identity(), translation),
        }
    }

    #[must_use]
    pub fn identity() -> Self {
        Self::from_vector(&Vector3::zeros())
    }

    #[must_use]
    pub fn translation(&self) -> Vector3 {
        self.m.translation_row()
    }

    /// The opposite translation.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::from_vector(&-self.translation())
    }

    #[must_use]
    pub fn as_matrix(&self) -> &L {
        &self.m
    }
}

impl<L: AffineLayout> Default for TranslationMatrix<L> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<L: AffineLayout> Index<(usize, usize)> for TranslationMatrix<L> {
    type Output = Real;

    fn index(&self, index: (usize, usize)) -> &Real {
        &self.m[index]
    }
}

impl<L: AffineLayout> IndexMut<(usize, usize)> for TranslationMatrix<L> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Real {
        &mut self.m[index]
    }
}

impl<L: AffineLayout> AffineMap for TranslationMatrix<L> {
    fn linear_part(&self) -> Matrix3 {
        self.m.linear_block()
    }

    fn translation_part(&self) -> Vector3 {
        self.translation()
    }
}

impl<L: AffineLayout, L2: AffineLayout> Mul<TranslationMatrix<L2>> for TranslationMatrix<L> {
    type Output = TranslationMatrix<L>;

    fn mul(self, rhs: TranslationMatrix<L2>) -> TranslationMatrix<L> {
        Self::from_vector(&(self.translation() + rhs.translation()))
    }
}

impl<L: AffineLayout, L2: AffineLayout> MulAssign<TranslationMatrix<L2>> for TranslationMatrix<L> {
    fn mul_assign(&mut self, rhs: TranslationMatrix<L2>) {
        *self = *self * rhs;
    }
}

impl<L: AffineLayout> Mul<ScalingMatrix3x3> for TranslationMatrix<L> {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: ScalingMatrix3x3) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout> Mul<RotationMatrix3x3> for TranslationMatrix<L> {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: RotationMatrix3x3) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout, L2: AffineLayout> Mul<TransformationMatrix<L2>> for TranslationMatrix<L> {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: TransformationMatrix<L2>) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}
