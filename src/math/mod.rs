pub mod angles;
pub mod bounds;
pub mod line_2d;
pub mod matrix2;
pub mod quaternion;
pub mod random;
pub mod scalar;
pub mod transforms;
pub mod vectors;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 4D vector type.
pub type Vector4 = nalgebra::Vector4<f32>;

/// 2x2 matrix.
pub type Matrix2 = nalgebra::Matrix2<f32>;

/// 3x3 matrix, also used as a homogeneous 2D transformation.
pub type Matrix3 = nalgebra::Matrix3<f32>;

/// 4x4 homogeneous 3D transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f32>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Two quantities closer than this are treated as equal. The same constant
/// drives every degeneracy check in the kernel (parallelism, zero-length
/// vectors, unit-norm checks); it is part of the public contract.
pub const TOLERANCE: f32 = 1e-5;

/// 2π, the angle of one full turn in radians.
pub const TWO_PI: f32 = 2.0 * std::f32::consts::PI;
