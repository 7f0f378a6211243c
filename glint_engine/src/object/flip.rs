use std::sync::Arc;

use getset::Getters;
use rand_core::RngCore;

use crate::core::types::Number;
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// Reverses which side of the wrapped object counts as the outside.
///
/// Only [Intersection::front_face] changes; the reported normal still opposes the ray.
#[derive(Clone, Debug, Getters)]
#[get = "pub"]
pub struct FlippedObject {
    inner: Arc<ObjectInstance>,
}

impl FlippedObject {
    pub fn new(inner: impl Into<Arc<ObjectInstance>>) -> Self { Self { inner: inner.into() } }
}

impl Object for FlippedObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        let mut intersection = self.inner.intersect(ray, interval, rng)?;
        intersection.front_face = !intersection.front_face;
        Some(intersection)
    }
}

impl HasAabb for FlippedObject {
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> { self.inner.aabb(time) }
}
