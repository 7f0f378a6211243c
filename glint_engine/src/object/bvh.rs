//! Module containing the **Bounding Volume Hierarchy** (BVH) object
//!
//! See [crate::shared::generic_bvh] for how the tree is built.

use std::sync::Arc;

use getset::Getters;
use indextree::{Arena, NodeId};
use rand_core::RngCore;

use crate::core::types::Number;
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::generic_bvh::{BvhBuildError, GenericBvh, GenericBvhNode, SplitPolicy};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

#[derive(Getters, Clone, Debug)]
#[get = "pub"]
pub struct BvhObject {
    inner: GenericBvh<Arc<ObjectInstance>>,
}

impl BvhObject {
    /// Creates a new [BvhObject] tree from the given objects, bounded over the time window `time`.
    ///
    /// Each node is split along a random axis chosen with `rng`.
    ///
    /// # Errors
    /// Fails if any object is unbounded over `time`. Unbounded objects (like volumes of unbounded
    /// objects) should be kept in a separate [ObjectList](crate::object::list::ObjectList).
    pub fn new(
        objects: impl IntoIterator<Item = impl Into<Arc<ObjectInstance>>>,
        time: impl Into<Interval<Number>>,
        rng: &mut dyn RngCore,
    ) -> Result<Self, BvhBuildError> {
        Self::new_with_policy(objects, time, SplitPolicy::RandomAxis(rng))
    }

    /// Same as [Self::new], but splits each node along its longest axis, so the tree is deterministic
    pub fn new_longest_axis(
        objects: impl IntoIterator<Item = impl Into<Arc<ObjectInstance>>>,
        time: impl Into<Interval<Number>>,
    ) -> Result<Self, BvhBuildError> {
        Self::new_with_policy(objects, time, SplitPolicy::LongestAxis)
    }

    pub fn new_with_policy(
        objects: impl IntoIterator<Item = impl Into<Arc<ObjectInstance>>>,
        time: impl Into<Interval<Number>>,
        policy: SplitPolicy,
    ) -> Result<Self, BvhBuildError> {
        let inner = GenericBvh::new(objects.into_iter().map(Into::into), time.into(), policy)?;
        Ok(Self { inner })
    }

    /// Given a [NodeId] on the [Arena] tree, calculates the nearest intersection for the given `ray` and `interval`
    ///
    /// If the node is a [GenericBvhNode::Object], it passes on the check to the object.
    /// Otherwise, if it's a [GenericBvhNode::Nested], it:
    ///     - Tries to bail early if the [Aabb] is missed
    ///     - Intersects the left child
    ///     - Intersects the right child, only searching up to the left child's hit
    ///     - Returns the closest intersection of the above
    fn bvh_node_intersect<'o>(
        ray: &Ray,
        interval: &Interval<Number>,
        node: NodeId,
        arena: &'o Arena<GenericBvhNode<Arc<ObjectInstance>>>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        match arena.get(node)?.get() {
            GenericBvhNode::Nested(aabb) => {
                if !aabb.hit(ray, interval) {
                    return None;
                }

                let mut children = node.children(arena);
                let (left, right) = (children.next()?, children.next()?);

                let left_hit = Self::bvh_node_intersect(ray, interval, left, arena, rng);
                let right_interval = match &left_hit {
                    Some(hit) => interval.with_end(hit.dist),
                    None => *interval,
                };
                let right_hit = Self::bvh_node_intersect(ray, &right_interval, right, arena, rng);

                right_hit.or(left_hit)
            }
            // Objects can be delegated directly
            GenericBvhNode::Object(object) => object.intersect(ray, interval, rng),
        }
    }
}

impl Object for BvhObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        Self::bvh_node_intersect(ray, interval, self.inner.root_id()?, self.inner.arena(), rng)
    }
}

impl HasAabb for BvhObject {
    /// The box computed when the tree was built, regardless of `time`
    fn aabb(&self, _time: &Interval<Number>) -> Option<Aabb> { self.inner.aabb() }
}
