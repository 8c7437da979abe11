use crate::{EPSILON, Vector3};

/// Ray in 3D space.
///
/// The direction does not need to be normalized. Ray parameters are measured in units of its
/// length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: impl Into<Vector3>, direction: impl Into<Vector3>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// A ray starting at `origin` with a unit direction towards `target`.
    ///
    /// Returns `None` if both points coincide.
    pub fn from_points(origin: impl Into<Vector3>, target: impl Into<Vector3>) -> Option<Self> {
        let origin = origin.into();
        let direction = target.into() - origin;
        if direction.length_squared() < EPSILON * 1e-6 {
            return None;
        }
        Some(Self::new(origin, direction.normalize()))
    }

    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}
