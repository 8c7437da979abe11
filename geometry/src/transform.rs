use log::warn;

use crate::{EPSILON, Matrix4, Quaternion, Vector3};

/// Pose of an object in the scene: uniform scale, then rotation, then translation.
///
/// The local `+Z` axis is the object's forward direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector3,
    pub rotate: Quaternion,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: Vector3::ZERO,
        rotate: Quaternion::IDENTITY,
        scale: 1.0,
    };

    pub fn new(translate: impl Into<Vector3>, rotate: Quaternion, scale: f64) -> Self {
        Self {
            translate: translate.into(),
            rotate,
            scale,
        }
    }

    /// A pose at `position` whose forward axis points along `forward`.
    ///
    /// A zero `forward` keeps the identity rotation.
    pub fn looking_along(position: impl Into<Vector3>, forward: impl Into<Vector3>) -> Self {
        let forward = forward.into();
        let rotate = if forward.length_squared() < EPSILON {
            warn!("Pose direction is zero, keeping identity rotation");
            Quaternion::IDENTITY
        } else {
            Quaternion::from_rotation_arc(Vector3::Z, forward.normalize())
        };
        Self::new(position, rotate, 1.0)
    }

    /// The local `+Z` axis in world space. Unit length, independent of scale.
    pub fn forward(&self) -> Vector3 {
        self.rotate * Vector3::Z
    }

    /// Local-to-world matrix of this pose.
    pub fn to_matrix4(&self) -> Matrix4 {
        Matrix4::from_scale_rotation_translation(
            Vector3::splat(self.scale),
            self.rotate,
            self.translate,
        )
    }

    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.translate + self.rotate * (point * self.scale)
    }

    /// Maps a world space point into this pose's local space.
    ///
    /// Undoes translation, rotation and scale in that order. A zero scale yields non-finite
    /// coordinates.
    pub fn inverse_transform_point(&self, point: Vector3) -> Vector3 {
        self.rotate.inverse() * (point - self.translate) / self.scale
    }
}

impl From<Vector3> for Transform {
    fn from(translate: Vector3) -> Self {
        Self {
            translate,
            ..Default::default()
        }
    }
}
