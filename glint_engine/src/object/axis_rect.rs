use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::object::Object;
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// How much a rectangle's bounding box is thickened along its normal axis.
///
/// A zero-thickness box would never pass the slab test
pub const RECT_AABB_PADDING: Number = 1e-4;

/// The plane a rectangle lies in. The rectangle's normal is the remaining axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RectPlane {
    XY,
    XZ,
    YZ,
}

impl RectPlane {
    /// Indices of the `(a, b, k)` axes: the two in-plane axes, then the normal axis
    pub const fn axes(self) -> (usize, usize, usize) {
        match self {
            Self::XY => (0, 1, 2),
            Self::XZ => (0, 2, 1),
            Self::YZ => (1, 2, 0),
        }
    }

    /// Builds a point from coordinates given along the `(a, b, k)` axes
    pub fn point(self, a: Number, b: Number, k: Number) -> Point3 {
        let (ia, ib, ik) = self.axes();
        let mut arr = [0.; 3];
        arr[ia] = a;
        arr[ib] = b;
        arr[ik] = k;
        Point3::from_array(arr)
    }
}

/// A rectangle that is aligned to one of the coordinate planes, at a fixed offset `k` along the remaining axis
///
/// The outward normal always points along the positive normal axis; wrap it in a
/// [FlippedObject](crate::object::flip::FlippedObject) for the opposite orientation.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct AxisRectObject {
    #[get_copy = "pub"]
    plane: RectPlane,
    #[get_copy = "pub"]
    a: Interval<Number>,
    #[get_copy = "pub"]
    b: Interval<Number>,
    #[get_copy = "pub"]
    k: Number,
    #[get = "pub"]
    material: Arc<MaterialInstance>,
}

impl AxisRectObject {
    /// Creates a new rectangle spanning `a` and `b` along the plane's two axes.
    /// The extents do not need to be ordered.
    pub fn new(
        plane: RectPlane,
        a: impl Into<Interval<Number>>,
        b: impl Into<Interval<Number>>,
        k: Number,
        material: impl Into<Arc<MaterialInstance>>,
    ) -> Self {
        let sorted = |i: Interval<Number>| Interval::new(i.start.min(i.end), i.start.max(i.end));
        Self {
            plane,
            a: sorted(a.into()),
            b: sorted(b.into()),
            k,
            material: material.into(),
        }
    }
}

impl Object for AxisRectObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        _rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        let (ia, ib, ik) = self.plane.axes();
        let (pos, dir) = (ray.pos().to_array(), ray.dir().to_array());

        // Parallel rays give an infinite or NaN distance, which the interval rejects
        let t = (self.k - pos[ik]) / dir[ik];
        if !interval.contains(&t) {
            return None;
        }

        let a = pos[ia] + t * dir[ia];
        let b = pos[ib] + t * dir[ib];
        if !self.a.contains(&a) || !self.b.contains(&b) {
            return None;
        }

        // Zero-width extents have nowhere to spread the coordinate over, so pin it to the start
        let fraction = |x: Number, extent: &Interval<Number>| {
            let size = extent.size();
            if size > 0. {
                (x - extent.start) / size
            } else {
                0.
            }
        };
        let uv = Point2::new(fraction(a, &self.a), fraction(b, &self.b));
        let mut outward_normal = [0.; 3];
        outward_normal[ik] = 1.;
        let (normal, front_face) = Intersection::face_normal(ray, Vector3::from_array(outward_normal));

        Some(Intersection {
            pos: ray.at(t),
            normal,
            front_face,
            dist: t,
            uv,
            material: &self.material,
        })
    }
}

impl HasAabb for AxisRectObject {
    fn aabb(&self, _time: &Interval<Number>) -> Option<Aabb> {
        let min = self.plane.point(self.a.start, self.b.start, self.k - RECT_AABB_PADDING);
        let max = self.plane.point(self.a.end, self.b.end, self.k + RECT_AABB_PADDING);
        Some(Aabb::new(min, max))
    }
}
