//! Objects that move or rotate another object in space.
//!
//! Both transform the incoming ray into the wrapped object's local space, intersect there, and transform
//! the intersection back out. The front/back classification is re-derived against the local ray, since
//! the wrapped object's flag described the untransformed surface.

use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;
use tracing::debug;

use crate::core::targets::OBJECT;
use crate::core::types::{Number, Quat, Vector3};
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// The time window that [RotatedYObject] computes its bounding box over
pub const ROTATION_AABB_TIME: Interval<Number> = Interval::new(0., 1.);

// region Translate

/// Offsets the wrapped object by a fixed vector
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct TranslatedObject {
    #[get = "pub"]
    inner: Arc<ObjectInstance>,
    #[get_copy = "pub"]
    offset: Vector3,
}

impl TranslatedObject {
    pub fn new(inner: impl Into<Arc<ObjectInstance>>, offset: impl Into<Vector3>) -> Self {
        Self {
            inner: inner.into(),
            offset: offset.into(),
        }
    }
}

impl Object for TranslatedObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        let local_ray = Ray::new_at_time(ray.pos() - self.offset, ray.dir(), ray.time());
        let mut intersection = self.inner.intersect(&local_ray, interval, rng)?;

        let (normal, front_face) = Intersection::face_normal(&local_ray, intersection.outward_normal());
        intersection.pos += self.offset;
        intersection.normal = normal;
        intersection.front_face = front_face;
        Some(intersection)
    }
}

impl HasAabb for TranslatedObject {
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> {
        self.inner.aabb(time).map(|aabb| aabb.translated(self.offset))
    }
}

// endregion Translate

// region Rotate

/// Rotates the wrapped object about the vertical (Y) axis, around the origin
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct RotatedYObject {
    #[get = "pub"]
    inner: Arc<ObjectInstance>,
    /// Rotation from object space to world space
    #[get_copy = "pub"]
    rotation: Quat,
    inv_rotation: Quat,
    /// Computed once on construction, over [ROTATION_AABB_TIME]
    bounds: Option<Aabb>,
}

impl RotatedYObject {
    /// Creates a new rotated object, turned anticlockwise (looking down from `+Y`) by `degrees`
    pub fn new(inner: impl Into<Arc<ObjectInstance>>, degrees: Number) -> Self {
        let inner = inner.into();
        let rotation = Quat::from_rotation_y(degrees.to_radians());

        let bounds = inner
            .aabb(&ROTATION_AABB_TIME)
            .and_then(|aabb| Aabb::encompass_points(aabb.corners().map(|c| rotation * c)));
        if bounds.is_none() {
            debug!(target: OBJECT, ?inner, "rotated object is unbounded");
        }

        Self {
            inner,
            rotation,
            inv_rotation: rotation.inverse(),
            bounds,
        }
    }
}

impl Object for RotatedYObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        let local_ray = Ray::new_at_time(
            self.inv_rotation * ray.pos(),
            self.inv_rotation * ray.dir(),
            ray.time(),
        );
        let mut intersection = self.inner.intersect(&local_ray, interval, rng)?;

        // Rotations don't change distances along the ray, so only the point and normal move
        let (normal, front_face) = Intersection::face_normal(&local_ray, intersection.outward_normal());
        intersection.pos = self.rotation * intersection.pos;
        intersection.normal = (self.rotation * normal).normalize();
        intersection.front_face = front_face;
        Some(intersection)
    }
}

impl HasAabb for RotatedYObject {
    fn aabb(&self, _time: &Interval<Number>) -> Option<Aabb> { self.bounds }
}

// endregion Rotate
