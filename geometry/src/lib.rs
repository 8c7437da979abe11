//! Plane geometry and the small math vocabulary needed to place planes and probes in a scene.

mod color;
mod plane;
mod ray;
mod transform;

pub use color::*;
pub use plane::*;
pub use ray::*;
pub use transform::*;

pub const EPSILON: f64 = f64::EPSILON;

pub type Matrix4 = glam::DMat4;
pub type Vector3 = glam::DVec3;
pub type Quaternion = glam::DQuat;
