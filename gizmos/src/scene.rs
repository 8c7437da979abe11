use planar_geometry::{Ray, Transform};
use serde::Deserialize;

/// Scene state for one frame, supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scene {
    /// The plane's pose. Its forward axis is the plane normal, its position a point on the
    /// plane.
    pub plane: Transform,
    /// The probed point (origin) and the ray cast from it (direction). Without a probe only the
    /// plane is drawn.
    pub probe: Option<Ray>,
}

impl Scene {
    pub fn new(plane: Transform, probe: impl Into<Option<Ray>>) -> Self {
        Self {
            plane,
            probe: probe.into(),
        }
    }

    /// Probes from `pose`'s position along its forward axis.
    pub fn with_probe_pose(self, pose: &Transform) -> Self {
        Self {
            probe: Some(Ray::new(pose.translate, pose.forward())),
            ..self
        }
    }

    pub fn without_probe(self) -> Self {
        Self {
            probe: None,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub plane_position: [f64; 3],
    pub plane_normal: [f64; 3],
    pub probe: Option<ProbeConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            plane_position: [0.0; 3],
            plane_normal: [0.0, 0.0, 1.0],
            probe: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    pub position: [f64; 3],
    pub direction: [f64; 3],
}

impl SceneConfig {
    pub fn to_scene(&self) -> Scene {
        let plane = Transform::looking_along(self.plane_position, self.plane_normal);
        let probe = self
            .probe
            .as_ref()
            .map(|probe| Ray::new(probe.position, probe.direction));
        Scene::new(plane, probe)
    }
}

#[cfg(test)]
mod tests {
    use planar_geometry::{Quaternion, Vector3};

    use super::*;

    #[test]
    fn probe_pose_casts_along_forward() {
        let pose = Transform::new((1.0, 2.0, 3.0), Quaternion::IDENTITY, 1.0);
        let scene = Scene::default().with_probe_pose(&pose);
        assert_eq!(scene.probe, Some(Ray::new((1.0, 2.0, 3.0), Vector3::Z)));
        assert_eq!(scene.without_probe().probe, None);
    }

    #[test]
    fn default_scene_config_faces_up_z() {
        let scene = SceneConfig::default().to_scene();
        assert_eq!(scene.plane.forward(), Vector3::Z);
        assert_eq!(scene.probe, None);
    }
}
