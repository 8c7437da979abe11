use crate::{EPSILON, Ray, Vector3};

/// The half-space a point occupies relative to a [`Plane`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Side {
    /// On the plane or on the side the normal points to.
    #[display("positive")]
    Positive,
    #[display("negative")]
    Negative,
}

impl Side {
    pub fn is_positive(self) -> bool {
        self == Side::Positive
    }
}

/// Plane defined by a normal and a signed offset.
///
/// All points `p` with `normal.dot(p) + distance == 0` lie on the plane.
///
/// The normal is used as given. Distances are measured in units of its length, so callers
/// normalize it before construction. A zero normal makes every query degenerate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub distance: f64,
}

impl Plane {
    pub fn from_normal_and_distance(normal: impl Into<Vector3>, distance: f64) -> Self {
        Self {
            normal: normal.into(),
            distance,
        }
    }

    pub fn from_normal_and_point(normal: impl Into<Vector3>, point: impl Into<Vector3>) -> Self {
        let normal = normal.into();
        let distance = -normal.dot(point.into());
        Self { normal, distance }
    }

    /// The plane through three points, facing the side from which `a`, `b`, `c` appear
    /// counter-clockwise.
    ///
    /// Returns `None` if the points are collinear or coincide. Collinearity is judged relative
    /// to the edge lengths, so tiny triangles are accepted.
    pub fn from_points(
        a: impl Into<Vector3>,
        b: impl Into<Vector3>,
        c: impl Into<Vector3>,
    ) -> Option<Self> {
        let a = a.into();
        let (ab, ac) = (b.into() - a, c.into() - a);
        let normal = ab.cross(ac);
        // |ab x ac| = |ab| |ac| sin(angle)
        if normal.length() <= EPSILON * ab.length() * ac.length() {
            return None;
        }
        Some(Self::from_normal_and_point(normal.normalize(), a))
    }

    pub fn side(&self, point: impl Into<Vector3>) -> Side {
        if self.signed_distance(point) >= 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }

    pub fn same_side(&self, a: impl Into<Vector3>, b: impl Into<Vector3>) -> bool {
        self.side(a) == self.side(b)
    }

    /// Positive on the normal's side, negative on the opposite side.
    pub fn signed_distance(&self, point: impl Into<Vector3>) -> f64 {
        self.normal.dot(point.into()) + self.distance
    }

    /// The orthogonal projection of `point` onto the plane.
    ///
    /// The vector from the result to `point` is parallel to the normal.
    pub fn closest_point(&self, point: impl Into<Vector3>) -> Vector3 {
        let point = point.into();
        point - self.normal * self.signed_distance(point)
    }

    /// Intersects the plane with a ray.
    ///
    /// - Parallel rays: `hit` is false and `distance` is `0`.
    /// - The plane lies ahead: `hit` is true and `distance` is the ray parameter of the hit
    ///   point (in units of the direction's length).
    /// - The plane lies behind the origin: `hit` is false, `distance` is negative.
    pub fn intersect_ray(&self, ray: &Ray) -> Raycast {
        let denom = self.normal.dot(ray.direction);
        if denom == 0.0 {
            return Raycast::PARALLEL;
        }
        let distance = -self.signed_distance(ray.origin) / denom;
        Raycast {
            hit: distance >= 0.0,
            distance,
        }
    }

    /// The same plane facing the opposite direction.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    pub fn flip(&mut self) {
        *self = self.flipped();
    }

    #[must_use]
    pub fn translated(&self, translation: impl Into<Vector3>) -> Self {
        Self {
            normal: self.normal,
            distance: self.distance - self.normal.dot(translation.into()),
        }
    }
}

/// Result of [`Plane::intersect_ray`].
///
/// `distance` is meaningful even if `hit` is false, see `intersect_ray`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Raycast {
    pub hit: bool,
    pub distance: f64,
}

impl Raycast {
    pub const PARALLEL: Self = Self {
        hit: false,
        distance: 0.0,
    };

    /// The hit point along `ray`, if the ray hits.
    pub fn point(&self, ray: &Ray) -> Option<Vector3> {
        self.hit.then(|| ray.at(self.distance))
    }
}
