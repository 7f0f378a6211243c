//! Objects are the things that can be placed in a scene and intersected with.
//!
//! Every object pairs some geometry with a [material](crate::material), or wraps other objects
//! (transforms, volumes, collections and the [BVH](bvh)). Children are held by [Arc] so that
//! objects can be shared between several parents; they are never mutated after construction.

use std::sync::Arc;

use enum_dispatch::enum_dispatch;
use rand_core::RngCore;

use crate::core::types::Number;
use crate::shared::aabb::HasAabb;
// Named by the `HasAabb` impl that `enum_dispatch` may generate in this module
#[allow(unused_imports)]
use crate::shared::aabb::Aabb;
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

use self::{
    axis_box::AxisBoxObject, axis_rect::AxisRectObject, bvh::BvhObject, flip::FlippedObject,
    homogenous_volume::HomogeneousVolumeObject, list::ObjectList, moving_sphere::MovingSphereObject,
    sphere::SphereObject, transform::RotatedYObject, transform::TranslatedObject,
};

pub mod axis_box;
pub mod axis_rect;
pub mod bvh;
pub mod flip;
pub mod homogenous_volume;
pub mod list;
pub mod moving_sphere;
pub mod sphere;
pub mod transform;

/// The core trait for everything that a ray can hit
#[enum_dispatch]
pub trait Object: HasAabb {
    /// Attempts to intersect the given `ray` with this object, returning the closest intersection
    /// whose distance lies inside `interval`.
    ///
    /// The returned [Intersection::normal] always opposes the ray.
    /// `rng` is only consumed by objects with probabilistic surfaces, such as volumes.
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>>;
}

impl<T: Object + ?Sized> Object for Arc<T> {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        T::intersect(self, ray, interval, rng)
    }
}

/// An optimised implementation of [Object], using static dispatch over every object kind
#[enum_dispatch(Object, HasAabb)]
#[derive(Clone, Debug)]
pub enum ObjectInstance {
    SphereObject,
    MovingSphereObject,
    AxisRectObject,
    AxisBoxObject,
    HomogeneousVolumeObject,
    TranslatedObject,
    RotatedYObject,
    FlippedObject,
    ObjectList,
    BvhObject,
}
