//! Module containing **Bounding Volume Hierarchy** (BVH) structures
//!
//! These are used to accelerate ray-object intersection tests by narrowing the search space,
//! by skipping objects that obviously can't be intersected.

use getset::{CopyGetters, Getters};
use indextree::{Arena, NodeId};
use rand::seq::IteratorRandom;
use rand_core::RngCore;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::core::targets::BVH;
use crate::core::types::Number;
use crate::shared::aabb::{Aabb, Axis, HasAabb};
use crate::shared::interval::Interval;

#[derive(Getters, CopyGetters, Clone, Debug)]
pub struct GenericBvh<Node: HasAabb + Clone> {
    /// The backing store containing all of our objects, as well as their hierarchy
    #[get = "pub"]
    arena: Arena<GenericBvhNode<Node>>,
    /// The node of the root object in the tree, if there were any objects
    #[get_copy = "pub"]
    root_id: Option<NodeId>,
    /// The bounding box of the whole tree
    #[get_copy = "pub"]
    aabb: Option<Aabb>,
}

/// The type for each node in the BVH tree
///
/// Nodes are either a branch point [GenericBvhNode::Nested] (which always has exactly two children),
/// or a leaf [GenericBvhNode::Object] (which is an object)
#[derive(Clone, Debug)]
pub enum GenericBvhNode<Node> {
    // Don't need to keep track of children since the tree does that for us
    Nested(Aabb),
    Object(Node),
}

/// How the axis to partition along is chosen, for every node
pub enum SplitPolicy<'r> {
    /// Uniformly random axis per node
    RandomAxis(&'r mut dyn RngCore),
    /// Longest axis of the node's bounding box
    LongestAxis,
}

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum BvhBuildError {
    #[error("object at index {index} has no bounding box for the time window {time}")]
    Unbounded { index: usize, time: Interval<Number> },
}

/// An object waiting to be placed in the tree, with its boxes computed up front
struct BvhEntry<Node> {
    node: Node,
    /// Box over the whole construction window
    aabb: Aabb,
    /// Box at the instant `0`, only used to order the entries
    sort_min: [Number; 3],
}

impl<Node: HasAabb + Clone> GenericBvh<Node> {
    /// Creates a new tree from the given objects, bounded over the time window `time`.
    ///
    /// # Errors
    /// Every object must be bounded (i.e. [HasAabb::aabb()] returns [`Some(_)`]), otherwise
    /// [BvhBuildError::Unbounded] is returned and no tree is built.
    pub fn new(
        objects: impl IntoIterator<Item = Node>,
        time: Interval<Number>,
        mut policy: SplitPolicy,
    ) -> Result<Self, BvhBuildError> {
        let entries = objects
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let unbounded = BvhBuildError::Unbounded { index, time };
                let aabb = node.aabb(&time).ok_or(unbounded)?;
                let sort_min = node.aabb(&Interval::ZERO).ok_or(unbounded)?.min().to_array();
                Ok(BvhEntry { node, aabb, sort_min })
            })
            .collect::<Result<Vec<_>, BvhBuildError>>()?;

        let count = entries.len();
        let mut arena = Arena::with_capacity(count * 2);
        let (root_id, aabb) = if entries.is_empty() {
            (None, None)
        } else {
            let (root, aabb) = Self::generate_nodes(entries, &mut policy, &mut arena);
            (Some(root), Some(aabb))
        };

        debug!(target: BVH, count, nodes = arena.count(), ?aabb, "built bvh");

        Ok(Self { arena, root_id, aabb })
    }

    /// Recursively partitions the `entries` until they are exhausted, returning the new node and its box
    ///
    /// The slice of `entries` passed in must be non-empty.
    fn generate_nodes(
        mut entries: Vec<BvhEntry<Node>>,
        policy: &mut SplitPolicy,
        arena: &mut Arena<GenericBvhNode<Node>>,
    ) -> (NodeId, Aabb) {
        let axis = match policy {
            SplitPolicy::RandomAxis(rng) => Axis::iter().choose(rng).unwrap_or(Axis::X),
            SplitPolicy::LongestAxis => Aabb::encompass_iter(entries.iter().map(|e| e.aabb))
                .map_or(Axis::X, |aabb| aabb.longest_axis()),
        };
        entries.sort_by(|a, b| Number::total_cmp(&a.sort_min[axis.index()], &b.sort_min[axis.index()]));

        let (left, left_aabb, right, right_aabb) = match entries.len() {
            0 => unreachable!("internal invariant fail: must pass in a non-empty vec of entries"),
            // One object gets put in both sides, so that every nested node has two children
            1 => {
                let BvhEntry { node, aabb, .. } = entries.remove(0);
                let left = arena.new_node(GenericBvhNode::Object(node.clone()));
                let right = arena.new_node(GenericBvhNode::Object(node));
                (left, aabb, right, aabb)
            }
            2 => {
                let second = entries.remove(1);
                let first = entries.remove(0);
                let left = arena.new_node(GenericBvhNode::Object(first.node));
                let right = arena.new_node(GenericBvhNode::Object(second.node));
                (left, first.aabb, right, second.aabb)
            }
            n => {
                let upper = entries.split_off(n / 2);
                let (left, left_aabb) = Self::generate_nodes(entries, policy, arena);
                let (right, right_aabb) = Self::generate_nodes(upper, policy, arena);
                (left, left_aabb, right, right_aabb)
            }
        };

        let aabb = Aabb::encompass(left_aabb, right_aabb);
        let node = arena.new_node(GenericBvhNode::Nested(aabb));
        node.append(left, arena);
        node.append(right, arena);
        (node, aabb)
    }
}
