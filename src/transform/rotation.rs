use std::ops::{Index, IndexMut, Mul, MulAssign};

use nalgebra::{Rotation3, UnitQuaternion};

use crate::error::{GeometryError, Result};
use crate::math::float::is_zero;
use crate::math::{Matrix3, Real, Vector3};

use super::{
    compose, AffineLayout, AffineMap, ScalingMatrix3x3, TransformationMatrix,
    TransformationMatrix4x4, TranslationMatrix,
};

/// A 3x3 rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3x3 {
    m: Matrix3,
}

impl RotationMatrix3x3 {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
        }
    }

    /// Wraps a matrix without checking that it is orthonormal.
    #[must_use]
    pub fn from_matrix(m: Matrix3) -> Self {
        Self { m }
    }

    /// Rotation from Euler angles in radians about X, Y and Z.
    #[must_use]
    pub fn from_euler_angles(x: Real, y: Real, z: Real) -> Self {
        let (b, a) = x.sin_cos();
        let (d, c) = y.sin_cos();
        let (f, e) = z.sin_cos();

        Self {
            m: Matrix3::new(
                e * c - f * b * d,
                -a * f,
                e * d + f * b * c,
                f * c + e * b * d,
                a * e,
                f * d - e * b * c,
                -a * d,
                b,
                a * c,
            ),
        }
    }

    /// Rotation of `angle` radians about `axis`. The axis need not be unit length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `axis` has zero length.
    pub fn from_axis_angle(axis: &Vector3, angle: Real) -> Result<Self> {
        let len = axis.norm();
        if is_zero(len) {
            return Err(GeometryError::ZeroVector.into());
        }
        let u = axis / len;
        let (s, c) = angle.sin_cos();
        let k = 1.0 - c;

        Ok(Self {
            m: Matrix3::new(
                c + k * u.x * u.x,
                k * u.x * u.y - u.z * s,
                k * u.z * u.x + u.y * s,
                k * u.x * u.y + u.z * s,
                c + k * u.y * u.y,
                k * u.y * u.z - u.x * s,
                k * u.z * u.x - u.y * s,
                k * u.y * u.z + u.x * s,
                c + k * u.z * u.z,
            ),
        })
    }

    #[must_use]
    pub fn from_quaternion(q: &UnitQuaternion<Real>) -> Self {
        let (x, y, z, w) = (q.i, q.j, q.k, q.w);

        Self {
            m: Matrix3::new(
                1.0 - 2.0 * y * y - 2.0 * z * z,
                2.0 * x * y - 2.0 * z * w,
                2.0 * x * z + 2.0 * y * w,
                2.0 * x * y + 2.0 * z * w,
                1.0 - 2.0 * x * x - 2.0 * z * z,
                2.0 * y * z - 2.0 * x * w,
                2.0 * x * z - 2.0 * y * w,
                2.0 * y * z + 2.0 * x * w,
                1.0 - 2.0 * x * x - 2.0 * y * y,
            ),
        }
    }

    #[must_use]
    pub fn to_quaternion(&self) -> UnitQuaternion<Real> {
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(self.m))
    }

    /// Euler angles `(x, y, z)` that rebuild this rotation through
    /// [`Self::from_euler_angles`].
    ///
    /// `x` lies in `[-pi/2, pi/2]`. At gimbal lock (`x = ±pi/2`) only the
    /// combined yaw is recoverable, so `y` is reported as zero.
    #[must_use]
    pub fn to_euler_angles(&self) -> (Real, Real, Real) {
        let m = &self.m;
        let x = m[(2, 1)].clamp(-1.0, 1.0).asin();
        if is_zero(x.cos()) {
            return (x, 0.0, m[(1, 0)].atan2(m[(0, 0)]));
        }
        let y = (-m[(2, 0)]).atan2(m[(2, 2)]);
        let z = (-m[(0, 1)]).atan2(m[(1, 1)]);
        (x, y, z)
    }

    /// Unit axis and angle in `[0, pi]` of this rotation.
    ///
    /// The identity has no defined axis and reports `(X, 0)`.
    #[must_use]
    pub fn to_axis_angle(&self) -> (Vector3, Real) {
        match Rotation3::from_matrix_unchecked(self.m).axis_angle() {
            Some((axis, angle)) => (axis.into_inner(), angle),
            None => (Vector3::x(), 0.0),
        }
    }

    #[must_use]
    pub fn as_matrix(&self) -> &Matrix3 {
        &self.m
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            m: self.m.transpose(),
        }
    }

    /// Inverse rotation (the transpose).
    #[must_use]
    pub fn invert(&self) -> Self {
        self.transpose()
    }

    #[must_use]
    pub fn determinant(&self) -> Real {
        self.m.determinant()
    }
}

impl Default for RotationMatrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for RotationMatrix3x3 {
    type Output = Real;

    fn index(&self, index: (usize, usize)) -> &Real {
        &self.m[index]
    }
}

impl IndexMut<(usize, usize)> for RotationMatrix3x3 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Real {
        &mut self.m[index]
    }
}

impl AffineMap for RotationMatrix3x3 {
    fn linear_part(&self) -> Matrix3 {
        self.m
    }

    fn translation_part(&self) -> Vector3 {
        Vector3::zeros()
    }
}

impl Mul for RotationMatrix3x3 {
    type Output = RotationMatrix3x3;

    fn mul(self, rhs: RotationMatrix3x3) -> RotationMatrix3x3 {
        Self { m: self.m * rhs.m }
    }
}

impl MulAssign for RotationMatrix3x3 {
    fn mul_assign(&mut self, rhs: RotationMatrix3x3) {
        self.m *= rhs.m;
    }
}

impl Mul<ScalingMatrix3x3> for RotationMatrix3x3 {
    type Output = TransformationMatrix4x4;

    fn mul(self, rhs: ScalingMatrix3x3) -> TransformationMatrix4x4 {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout> Mul<TranslationMatrix<L>> for RotationMatrix3x3 {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: TranslationMatrix<L>) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

impl<L: AffineLayout> Mul<TransformationMatrix<L>> for RotationMatrix3x3 {
    type Output = TransformationMatrix<L>;

    fn mul(self, rhs: TransformationMatrix<L>) -> TransformationMatrix<L> {
        let (linear, translation) = compose(&self, &rhs);
        TransformationMatrix::from_parts(&linear, &translation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::QuimeraError;
    use crate::transform::TranslationMatrix4x3;

    const EPS: Real = 1e-12;

    #[test]
    fn zero_angles_give_identity() {
        assert_relative_eq!(
            *RotationMatrix3x3::from_euler_angles(0.0, 0.0, 0.0).as_matrix(),
            Matrix3::identity()
        );
        assert_eq!(RotationMatrix3x3::default(), RotationMatrix3x3::identity());
    }

    #[test]
    fn single_axis_euler_matches_axis_angle() {
        let angle = 0.8;
        let cases = [
            (RotationMatrix3x3::from_euler_angles(angle, 0.0, 0.0), Vector3::x()),
            (RotationMatrix3x3::from_euler_angles(0.0, angle, 0.0), Vector3::y()),
            (RotationMatrix3x3::from_euler_angles(0.0, 0.0, angle), Vector3::z()),
        ];
        for (euler, axis) in cases {
            let aa = RotationMatrix3x3::from_axis_angle(&axis, angle).unwrap();
            assert_relative_eq!(*euler.as_matrix(), *aa.as_matrix(), epsilon = EPS);
        }
    }

    #[test]
    fn axis_is_normalized() {
        let unit = RotationMatrix3x3::from_axis_angle(&Vector3::z(), FRAC_PI_3).unwrap();
        let long = RotationMatrix3x3::from_axis_angle(&Vector3::new(0.0, 0.0, 5.0), FRAC_PI_3).unwrap();
        assert_relative_eq!(*unit.as_matrix(), *long.as_matrix(), epsilon = EPS);
    }

    #[test]
    fn zero_axis_is_rejected() {
        let err = RotationMatrix3x3::from_axis_angle(&Vector3::zeros(), 1.0).unwrap_err();
        assert!(matches!(err, QuimeraError::Geometry(GeometryError::ZeroVector)));
    }

    #[test]
    fn quaternion_matches_axis_angle() {
        let axis = Vector3::new(1.0, 2.0, -0.5);
        let q = UnitQuaternion::from_axis_angle(&nalgebra::Unit::new_normalize(axis), 1.2);
        let from_q = RotationMatrix3x3::from_quaternion(&q);
        let from_aa = RotationMatrix3x3::from_axis_angle(&axis, 1.2).unwrap();
        assert_relative_eq!(*from_q.as_matrix(), *from_aa.as_matrix(), epsilon = EPS);
    }

    #[test]
    fn quaternion_round_trip() {
        let r = RotationMatrix3x3::from_euler_angles(0.4, -0.9, 2.1);
        let back = RotationMatrix3x3::from_quaternion(&r.to_quaternion());
        assert_relative_eq!(*back.as_matrix(), *r.as_matrix(), epsilon = 1e-9);
    }

    #[test]
    fn euler_angles_round_trip() {
        for (x, y, z) in [(0.4, -0.9, 2.1), (-1.2, 2.8, -0.3), (0.0, 0.0, 0.0)] {
            let (rx, ry, rz) = RotationMatrix3x3::from_euler_angles(x, y, z).to_euler_angles();
            assert_relative_eq!(rx, x, epsilon = EPS);
            assert_relative_eq!(ry, y, epsilon = EPS);
            assert_relative_eq!(rz, z, epsilon = EPS);
        }
    }

    #[test]
    fn euler_angles_at_gimbal_lock_rebuild_the_rotation() {
        let r = RotationMatrix3x3::from_euler_angles(FRAC_PI_2, 0.7, 0.2);
        let (x, y, z) = r.to_euler_angles();
        assert_relative_eq!(x, FRAC_PI_2, epsilon = 1e-7);
        assert_eq!(y, 0.0);
        let rebuilt = RotationMatrix3x3::from_euler_angles(x, y, z);
        assert_relative_eq!(*rebuilt.as_matrix(), *r.as_matrix(), epsilon = 1e-7);
    }

    #[test]
    fn axis_angle_round_trip() {
        let axis = Vector3::new(1.0, 2.0, -0.5);
        let r = RotationMatrix3x3::from_axis_angle(&axis, 1.2).unwrap();
        let (back_axis, back_angle) = r.to_axis_angle();
        assert_relative_eq!(back_axis, axis.normalize(), epsilon = 1e-9);
        assert_relative_eq!(back_angle, 1.2, epsilon = 1e-9);
    }

    #[test]
    fn identity_axis_angle_is_x_zero() {
        let (axis, angle) = RotationMatrix3x3::identity().to_axis_angle();
        assert_eq!(axis, Vector3::x());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn rotations_are_orthonormal() {
        let r = RotationMatrix3x3::from_euler_angles(1.3, 0.2, -0.7);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = EPS);
        assert_relative_eq!(*(r * r.invert()).as_matrix(), Matrix3::identity(), epsilon = EPS);
        assert_eq!(r.transpose(), r.invert());
    }

    #[test]
    fn composition_of_quarter_turns() {
        let quarter = RotationMatrix3x3::from_axis_angle(&Vector3::z(), FRAC_PI_2).unwrap();
        let mut half = quarter;
        half *= quarter;
        let expected = RotationMatrix3x3::from_axis_angle(&Vector3::z(), 2.0 * FRAC_PI_2).unwrap();
        assert_relative_eq!(*half.as_matrix(), *expected.as_matrix(), epsilon = EPS);
        assert_relative_eq!(*(quarter * quarter).as_matrix(), *half.as_matrix(), epsilon = EPS);
    }

    #[test]
    fn rotation_then_translation_keeps_both() {
        let r = RotationMatrix3x3::from_euler_angles(0.1, 0.2, 0.3);
        let t = r * TranslationMatrix4x3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(t.linear(), *r.as_matrix(), epsilon = EPS);
        assert_relative_eq!(t.translation(), Vector3::new(1.0, 2.0, 3.0), epsilon = EPS);
    }

    #[test]
    fn rotation_then_scaling_is_4x4() {
        let r = RotationMatrix3x3::from_euler_angles(0.0, 0.0, FRAC_PI_2);
        let t = r * ScalingMatrix3x3::new(2.0, 3.0, 4.0);
        assert_eq!(t[(3, 3)], 1.0);
        assert_relative_eq!(t.linear(), r.as_matrix() * Matrix3::from_diagonal(&Vector3::new(2.0, 3.0, 4.0)));
    }
}
