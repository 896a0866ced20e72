pub mod distance_2d;
pub mod float;
pub mod intersect_2d;
pub mod predicates_2d;

/// Scalar type used throughout the kernel.
pub type Real = f64;

/// 2D point type.
pub type Point2 = nalgebra::Point2<Real>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<Real>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<Real>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<Real>;

/// 3x3 matrix.
pub type Matrix3 = nalgebra::Matrix3<Real>;

/// 4x3 matrix (4 rows, 3 columns).
pub type Matrix4x3 = nalgebra::Matrix4x3<Real>;

/// 4x4 matrix.
pub type Matrix4 = nalgebra::Matrix4<Real>;

/// Global tolerance for floating-point comparisons.
///
/// Shared by the intersection engine and the matrix algebra so that boundary
/// classification and product checks agree on what "zero" means.
pub const TOLERANCE: Real = 1e-10;
