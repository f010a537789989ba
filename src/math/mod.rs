pub mod aabb;

pub use aabb::Aabb;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Single-precision 3D point, used for mesh output.
pub type Point3f = nalgebra::Point3<f32>;
