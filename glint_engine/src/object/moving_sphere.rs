use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;

use crate::core::types::{Number, Point3};
use crate::material::MaterialInstance;
use crate::object::sphere::{sphere_aabb, sphere_intersect};
use crate::object::Object;
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// A sphere whose centre moves linearly between two keyframes, for motion blur.
///
/// The motion extrapolates past the keyframe times.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct MovingSphereObject {
    #[get_copy = "pub"]
    centre_0: Point3,
    #[get_copy = "pub"]
    centre_1: Point3,
    /// The times at which the sphere is at `centre_0` and `centre_1` respectively
    #[get_copy = "pub"]
    keyframes: Interval<Number>,
    #[get_copy = "pub"]
    radius: Number,
    #[get = "pub"]
    material: Arc<MaterialInstance>,
}

impl MovingSphereObject {
    pub fn new(
        centre_0: impl Into<Point3>,
        centre_1: impl Into<Point3>,
        keyframes: impl Into<Interval<Number>>,
        radius: Number,
        material: impl Into<Arc<MaterialInstance>>,
    ) -> Self {
        Self {
            centre_0: centre_0.into(),
            centre_1: centre_1.into(),
            keyframes: keyframes.into(),
            radius,
            material: material.into(),
        }
    }

    /// The position of the centre at the given instant
    pub fn centre(&self, time: Number) -> Point3 {
        let duration = self.keyframes.size();
        if duration == 0. {
            return self.centre_0;
        }
        let progress = (time - self.keyframes.start) / duration;
        self.centre_0 + ((self.centre_1 - self.centre_0) * progress)
    }
}

impl Object for MovingSphereObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        _rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        sphere_intersect(self.centre(ray.time()), self.radius, ray, interval, &self.material)
    }
}

impl HasAabb for MovingSphereObject {
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> {
        let start = sphere_aabb(self.centre(time.start), self.radius);
        let end = sphere_aabb(self.centre(time.end), self.radius);
        Some(Aabb::encompass(start, end))
    }
}
