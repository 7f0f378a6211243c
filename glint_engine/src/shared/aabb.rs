use enum_dispatch::enum_dispatch;
use getset::CopyGetters;
use std::borrow::Borrow;
use std::sync::Arc;
use strum_macros::EnumIter;

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::RtRequirement;

/// An **Axis-Aligned Bounding Box** (AABB)
///
/// The box spans between the two corners `min` and `max`
#[derive(CopyGetters, Copy, Clone, Debug, PartialEq)]
#[getset(get_copy = "pub")]
pub struct Aabb {
    /// The lower corner of the [Aabb]; the corner with the smallest coordinates
    min: Point3,
    /// The upper corner of the [Aabb]; the corner with the largest coordinates
    max: Point3,
    /// The difference between [min](fn@Self::min) and [max](fn@Self::max); how large the [Aabb] is
    size: Vector3,
}

/// One of the three coordinate axes
#[derive(Copy, Clone, Debug, EnumIter, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub fn index(self) -> usize { self as usize }
}

// region Constructors

impl Aabb {
    /// Creates a new [Aabb] from two points, which do *not* have to be sorted by min/max
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>) -> Self {
        let (a, b) = (a.into(), b.into());
        let min = Point3::min(a, b);
        let max = Point3::max(a, b);
        Self {
            min,
            max,
            size: max - min,
        }
    }

    pub fn new_centred(centre: impl Into<Point3>, size: impl Into<Vector3>) -> Self {
        let (centre, size) = (centre.into(), size.into());
        Self::new(centre - size / 2., centre + size / 2.)
    }

    /// Returns the smallest [Aabb] that surrounds the two given boxes
    pub fn encompass(a: impl Borrow<Self>, b: impl Borrow<Self>) -> Self {
        let (a, b) = (a.borrow(), b.borrow());
        Self::new(Point3::min(a.min, b.min), Point3::max(a.max, b.max))
    }

    /// [Self::encompass] but for an arbitrary number of boxes.
    ///
    /// Returns [None] if there were no boxes to encompass
    pub fn encompass_iter<B: Borrow<Self>>(iter: impl IntoIterator<Item = B>) -> Option<Self> {
        iter.into_iter()
            .map(|b| *b.borrow())
            .reduce(|a, b| Self::encompass(a, b))
    }

    /// [Self::encompass] but for an arbitrary number of points
    pub fn encompass_points<B: Borrow<Point3>>(iter: impl IntoIterator<Item = B>) -> Option<Self> {
        iter.into_iter()
            .map(|p| *p.borrow())
            .fold(None, |acc: Option<(Point3, Point3)>, p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
            .map(|(min, max)| Self::new(min, max))
    }

    /// Ensures that an AABB has all sides of at least `thresh` thickness.
    /// If any side widths between corners are less than this threshold, the [Aabb] will
    /// be expanded (away from the centre) to fit.
    pub fn min_padded(&self, thresh: Number) -> Self {
        let dims = self.size.max(Vector3::splat(thresh));
        Self::new_centred(self.centre(), dims)
    }

    /// Moves the box by the given offset
    pub fn translated(&self, offset: Vector3) -> Self { Self::new(self.min + offset, self.max + offset) }
}

// endregion Constructors

// region Helper

impl Aabb {
    pub fn centre(&self) -> Point3 { self.min + (self.size / 2.) }

    /// The axis along which the box is largest
    pub fn longest_axis(&self) -> Axis {
        let s = self.size;
        if s.x >= s.y && s.x >= s.z {
            Axis::X
        } else if s.y >= s.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Checks if the other box lies entirely inside (or on the surface of) this one
    pub fn contains_aabb(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Returns the corners of the AABB
    pub fn corners(&self) -> [Point3; 8] {
        let (l, h) = (self.min, self.max);
        [
            Point3::new(l.x, l.y, l.z),
            Point3::new(l.x, l.y, h.z),
            Point3::new(l.x, h.y, l.z),
            Point3::new(l.x, h.y, h.z),
            Point3::new(h.x, l.y, l.z),
            Point3::new(h.x, l.y, h.z),
            Point3::new(h.x, h.y, l.z),
            Point3::new(h.x, h.y, h.z),
        ]
    }
}

// endregion Helper

// region Impl

impl Aabb {
    /// Checks whether the given ray intersects with the AABB at any point within the given distance interval
    pub fn hit(&self, ray: &Ray, interval: &Interval<Number>) -> bool {
        /*
        CREDITS:

        Author: Tavianator
        URL:
            - <https://tavianator.com/cgit/dimension.git/tree/libdimension/bvh/bvh.c#n196>
            - <https://tavianator.com/2011/ray_box.html>
        */

        let (pos, inv_dir) = (ray.pos().to_array(), ray.inv_dir().to_array());
        let (min, max) = (self.min.to_array(), self.max.to_array());

        let mut t_min = interval.start;
        let mut t_max = interval.end;
        for axis in 0..3 {
            // Parallel to the slab, so the ray is either inside it the whole way or never.
            // Handled separately since a ray lying in a face plane would give `0 * inf = NaN`
            if inv_dir[axis].is_infinite() {
                if !(min[axis] <= pos[axis] && pos[axis] <= max[axis]) {
                    return false;
                }
                continue;
            }

            let t0 = (min[axis] - pos[axis]) * inv_dir[axis];
            let t1 = (max[axis] - pos[axis]) * inv_dir[axis];

            t_min = Number::max(t_min, Number::min(t0, t1));
            t_max = Number::min(t_max, Number::max(t0, t1));

            if t_max <= t_min {
                return false;
            }
        }

        true
    }
}

// endregion Impl

// region HasAabb trait

// `enum_dispatch` may generate the enum implementation in this file's scope,
// depending on which of the trait/enum it sees first, so the enum has to be nameable here
#[allow(unused)]
use crate::object::ObjectInstance;

/// Trait for types that may be bounded by an [Aabb] over a window of time
#[enum_dispatch]
pub trait HasAabb: RtRequirement {
    /// Gets the bounding box for the whole of the time window `time`.
    ///
    /// Returns [None] if the object has no finite extent for that window.
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb>;
}

impl<T: HasAabb + ?Sized> HasAabb for Arc<T> {
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> { T::aabb(self, time) }
}

// endregion HasAabb trait
