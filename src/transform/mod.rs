//! Scaling, rotation, translation and general affine matrices.
//!
//! All matrices use the row-vector convention: a point transforms as
//! `p' = p · L + t`, where `L` is the upper-left 3x3 block and `t` is row 3.
//! `X * Y` therefore means "apply `X`, then `Y`".

mod rotation;
mod scaling;
mod transformation;
mod translation;

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

pub use rotation::RotationMatrix3x3;
pub use scaling::ScalingMatrix3x3;
pub use transformation::TransformationMatrix;
pub use translation::TranslationMatrix;

use crate::math::{Matrix3, Matrix4, Matrix4x3, Real, Vector3};

/// Translation stored in a 4x3 matrix.
pub type TranslationMatrix4x3 = TranslationMatrix<Matrix4x3>;
/// Translation stored in a 4x4 matrix.
pub type TranslationMatrix4x4 = TranslationMatrix<Matrix4>;
/// General affine transform stored in a 4x3 matrix.
pub type TransformationMatrix4x3 = TransformationMatrix<Matrix4x3>;
/// General affine transform stored in a 4x4 matrix.
pub type TransformationMatrix4x4 = TransformationMatrix<Matrix4>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::math::Matrix4x3 {}
    impl Sealed for crate::math::Matrix4 {}
    impl Sealed for super::ScalingMatrix3x3 {}
    impl Sealed for super::RotationMatrix3x3 {}
    impl<L: super::AffineLayout> Sealed for super::TranslationMatrix<L> {}
    impl<L: super::AffineLayout> Sealed for super::TransformationMatrix<L> {}
}

/// Storage for a 4x3 or 4x4 affine matrix.
///
/// Rows 0..3 hold the linear block, row 3 the translation. The 4x4 layout
/// keeps `(0, 0, 0, 1)` in its last column.
pub trait AffineLayout:
    sealed::Sealed
    + Copy
    + PartialEq
    + Debug
    + Index<(usize, usize), Output = Real>
    + IndexMut<(usize, usize), Output = Real>
{
    /// Builds the matrix from its linear block and translation row.
    fn assemble(linear: &Matrix3, translation: &Vector3) -> Self;

    /// The upper-left 3x3 block.
    fn linear_block(&self) -> Matrix3 {
        Matrix3::from_fn(|r, c| self[(r, c)])
    }

    /// Row 3, as a vector.
    fn translation_row(&self) -> Vector3 {
        Vector3::new(self[(3, 0)], self[(3, 1)], self[(3, 2)])
    }
}

impl AffineLayout for Matrix4x3 {
    fn assemble(linear: &Matrix3, translation: &Vector3) -> Self {
        let mut m = Matrix4x3::zeros();
        for c in 0..3 {
            for r in 0..3 {
                m[(r, c)] = linear[(r, c)];
            }
            m[(3, c)] = translation[c];
        }
        m
    }
}

impl AffineLayout for Matrix4 {
    fn assemble(linear: &Matrix3, translation: &Vector3) -> Self {
        let mut m = Matrix4::zeros();
        for c in 0..3 {
            for r in 0..3 {
                m[(r, c)] = linear[(r, c)];
            }
            m[(3, c)] = translation[c];
        }
        m[(3, 3)] = 1.0;
        m
    }
}

/// Any of the four matrix kinds, seen as `p' = p · linear + translation`.
///
/// A [`ScalingMatrix3x3`] exposes only its diagonal.
pub trait AffineMap: sealed::Sealed {
    fn linear_part(&self) -> Matrix3;
    fn translation_part(&self) -> Vector3;
}

/// Linear block and translation of `lhs` followed by `rhs`.
fn compose(lhs: &impl AffineMap, rhs: &impl AffineMap) -> (Matrix3, Vector3) {
    let rhs_linear = rhs.linear_part();
    let linear = lhs.linear_part() * rhs_linear;
    // Row vector times matrix: t · L == Lᵀ t.
    let translation = rhs_linear.tr_mul(&lhs.translation_part()) + rhs.translation_part();
    (linear, translation)
}
