use getset::Getters;
use itertools::Itertools;
use rand_core::RngCore;

use crate::core::types::Number;
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// A flat collection of objects, intersected by testing every one in turn.
///
/// Fine for a handful of objects; larger collections should use a [BvhObject](crate::object::bvh::BvhObject)
#[derive(Clone, Debug, Default, Getters)]
#[get = "pub"]
pub struct ObjectList {
    objects: Vec<ObjectInstance>,
}

impl ObjectList {
    pub fn new(objects: impl IntoIterator<Item = ObjectInstance>) -> Self {
        Self {
            objects: objects.into_iter().collect_vec(),
        }
    }

    pub fn push(&mut self, object: impl Into<ObjectInstance>) { self.objects.push(object.into()) }
}

impl<O: Into<ObjectInstance>> FromIterator<O> for ObjectList {
    fn from_iter<T: IntoIterator<Item = O>>(iter: T) -> Self { Self::new(iter.into_iter().map(Into::into)) }
}

impl Object for ObjectList {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        // Every hit shrinks the search so that later objects must be closer to be accepted
        let mut closest = None;
        let mut search = *interval;
        for object in &self.objects {
            if let Some(intersection) = object.intersect(ray, &search, rng) {
                search = search.with_end(intersection.dist);
                closest = Some(intersection);
            }
        }
        closest
    }
}

impl HasAabb for ObjectList {
    /// The union of every object's box, or [None] if empty or any object is unbounded
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> {
        let boxes = self
            .objects
            .iter()
            .map(|o| o.aabb(time))
            .collect::<Option<Vec<_>>>()?;
        Aabb::encompass_iter(boxes)
    }
}
