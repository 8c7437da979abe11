use planar_geometry::{Plane, Ray, Raycast, Side, Transform, Vector3};

/// All plane queries for one probe, evaluated against the plane defined by a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReport {
    pub plane: Plane,
    pub ray: Ray,
    pub side: Side,
    pub closest_point: Vector3,
    pub signed_distance: f64,
    pub raycast: Raycast,
}

impl ProbeReport {
    /// The plane passes through `plane_pose`'s position with its forward axis as normal.
    pub fn evaluate(plane_pose: &Transform, probe: &Ray) -> Self {
        let plane = Plane::from_normal_and_point(plane_pose.forward(), plane_pose.translate);
        let point = probe.origin;
        Self {
            plane,
            ray: *probe,
            side: plane.side(point),
            closest_point: plane.closest_point(point),
            signed_distance: plane.signed_distance(point),
            raycast: plane.intersect_ray(probe),
        }
    }

    pub fn ray_outcome(&self, parallel_tolerance: f64) -> RayOutcome {
        RayOutcome::classify(&self.plane, &self.ray, self.raycast, parallel_tolerance)
    }
}

/// How a raycast result is presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayOutcome {
    /// The plane lies ahead at `distance`.
    Hit { distance: f64 },
    /// The ray runs parallel to the plane.
    Parallel,
    /// The plane lies behind the ray origin; `distance` is negative.
    Behind { distance: f64 },
}

impl RayOutcome {
    /// Classifies the `raycast` of `ray` against `plane`.
    ///
    /// A miss counts as parallel if the sine of the angle between the ray and the plane is within
    /// `parallel_tolerance` of zero. How far the plane is from the origin does not matter.
    pub fn classify(plane: &Plane, ray: &Ray, raycast: Raycast, parallel_tolerance: f64) -> Self {
        if raycast.hit {
            RayOutcome::Hit {
                distance: raycast.distance,
            }
        } else if is_parallel(plane, ray, parallel_tolerance) {
            RayOutcome::Parallel
        } else {
            RayOutcome::Behind {
                distance: raycast.distance,
            }
        }
    }

    /// Length of the diagnostic ray, in units of the ray's direction.
    ///
    /// Behind the origin, the absolute distance is drawn.
    pub fn ray_length(&self, parallel_length: f64) -> f64 {
        match *self {
            RayOutcome::Hit { distance } => distance,
            RayOutcome::Parallel => parallel_length,
            RayOutcome::Behind { distance } => distance.abs(),
        }
    }
}

fn is_parallel(plane: &Plane, ray: &Ray, tolerance: f64) -> bool {
    let scale = plane.normal.length() * ray.direction.length();
    if scale == 0.0 {
        return true;
    }
    let sine = plane.normal.dot(ray.direction) / scale;
    approx::abs_diff_eq!(sine, 0.0, epsilon = tolerance)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn evaluates_all_queries() {
        let plane_pose = Transform::from(Vector3::new(0.0, 0.0, 1.0));
        let probe = Ray::new((2.0, 3.0, -4.0), (0.0, 0.0, 1.0));
        let report = ProbeReport::evaluate(&plane_pose, &probe);

        assert_eq!(report.side, Side::Negative);
        assert_abs_diff_eq!(report.signed_distance, -5.0);
        assert_eq!(report.closest_point, Vector3::new(2.0, 3.0, 1.0));
        assert!(report.raycast.hit);
        assert_abs_diff_eq!(report.raycast.distance, 5.0);
    }

    fn xy_plane() -> Plane {
        Plane::from_normal_and_point(Vector3::Z, Vector3::ZERO)
    }

    fn outcome_of(origin: (f64, f64, f64), direction: (f64, f64, f64)) -> RayOutcome {
        let ray = Ray::new(origin, direction);
        let plane = xy_plane();
        RayOutcome::classify(&plane, &ray, plane.intersect_ray(&ray), 1e-6)
    }

    #[test]
    fn classify_hit() {
        assert_eq!(
            outcome_of((0.0, 0.0, 5.0), (0.0, 0.0, -1.0)),
            RayOutcome::Hit { distance: 5.0 }
        );
        assert_eq!(
            outcome_of((3.0, 0.0, 0.0), (0.0, 0.0, 1.0)),
            RayOutcome::Hit { distance: 0.0 }
        );
    }

    #[test]
    fn classify_parallel() {
        assert_eq!(
            outcome_of((1.0, 1.0, 5.0), (1.0, 0.0, 0.0)),
            RayOutcome::Parallel
        );
        // Nearly parallel, the plane is far behind the origin.
        assert_eq!(
            outcome_of((1.0, 1.0, 5.0), (1.0, 0.0, 1e-9)),
            RayOutcome::Parallel
        );
        assert_eq!(
            outcome_of((1.0, 1.0, 5.0), (0.0, 0.0, 0.0)),
            RayOutcome::Parallel
        );
    }

    #[test]
    fn classify_behind() {
        let outcome = outcome_of((0.0, 0.0, 5.0), (0.0, 0.0, 1.0));
        assert_eq!(outcome, RayOutcome::Behind { distance: -5.0 });
        assert_eq!(outcome.ray_length(100.0), 5.0);
    }

    #[test]
    fn plane_just_behind_a_perpendicular_ray_is_behind() {
        let outcome = outcome_of((0.0, 0.0, 1e-7), (0.0, 0.0, 1.0));
        assert_eq!(outcome, RayOutcome::Behind { distance: -1e-7 });
        assert_eq!(outcome.ray_length(100.0), 1e-7);
    }

    #[test]
    fn ray_lengths() {
        assert_eq!(RayOutcome::Hit { distance: 3.0 }.ray_length(100.0), 3.0);
        assert_eq!(RayOutcome::Parallel.ray_length(100.0), 100.0);
    }
}
