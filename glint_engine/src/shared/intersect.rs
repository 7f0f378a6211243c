use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::shared::ray::Ray;
use derivative::Derivative;
use std::cmp::Ordering;

/// A struct representing a ray-object intersection
#[derive(Copy, Clone, Debug, Derivative)]
#[derivative(PartialEq)]
pub struct Intersection<'o> {
    /// The position in world coordinates of the intersection
    pub pos: Point3,
    /// Surface normal at intersection.
    /// This points in the *opposite* direction to the incident ray
    ///
    /// # Invariants
    /// - Must be normalised
    /// - Cannot be zero/nan
    pub normal: Vector3,
    /// Whether the ray hit the outside of the surface.
    ///
    /// If `false`, the geometric (outwards) normal had to be flipped to get [Self::normal].
    pub front_face: bool,
    /// Distance along the ray that the intersection occurred, in multiples of the ray's direction
    pub dist: Number,
    /// The UV coordinates for the point on the object's surface, normally `0.0..=1.0`
    pub uv: Point2,
    #[derivative(PartialEq = "ignore")]
    pub material: &'o MaterialInstance,
}

impl<'o> Intersection<'o> {
    /// Returns `(normal, front_face)` for a ray hitting a surface with the given outwards normal,
    /// so that the returned normal always opposes the ray.
    pub fn face_normal(ray: &Ray, outward_normal: Vector3) -> (Vector3, bool) {
        let front_face = Vector3::dot(ray.dir(), outward_normal) < 0.;
        let normal = if front_face { outward_normal } else { -outward_normal };
        (normal, front_face)
    }

    /// Recovers the geometric (outwards) normal from the ray-facing normal
    pub fn outward_normal(&self) -> Vector3 {
        if self.front_face {
            self.normal
        } else {
            -self.normal
        }
    }
}

impl<'o> PartialOrd for Intersection<'o> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Number::partial_cmp(&self.dist, &other.dist) }
}
