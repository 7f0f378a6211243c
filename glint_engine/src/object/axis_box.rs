use std::sync::Arc;

use getset::Getters;
use rand_core::RngCore;

use crate::core::types::{Number, Point3};
use crate::material::MaterialInstance;
use crate::object::axis_rect::{AxisRectObject, RectPlane, RECT_AABB_PADDING};
use crate::object::flip::FlippedObject;
use crate::object::list::ObjectList;
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// An axis-aligned box, made of six [rectangles](AxisRectObject) sharing one material
///
/// The faces on the low side of each axis are [flipped](FlippedObject), so that every face
/// reports the outside of the box as its front.
#[derive(Clone, Debug, Getters)]
pub struct AxisBoxObject {
    bounds: Aabb,
    #[get = "pub"]
    sides: ObjectList,
}

impl AxisBoxObject {
    /// Creates a new box between the two corners, which do not need to be sorted
    pub fn new(a: impl Into<Point3>, b: impl Into<Point3>, material: impl Into<Arc<MaterialInstance>>) -> Self {
        let aabb = Aabb::new(a, b);
        let (p0, p1) = (aabb.min(), aabb.max());
        let material = material.into();

        let rect = |plane: RectPlane, a: (Number, Number), b: (Number, Number), k: Number| -> ObjectInstance {
            AxisRectObject::new(plane, a.0..=a.1, b.0..=b.1, k, material.clone()).into()
        };
        let flipped = |rect: ObjectInstance| -> ObjectInstance { FlippedObject::new(rect).into() };

        let sides = ObjectList::new([
            rect(RectPlane::XY, (p0.x, p1.x), (p0.y, p1.y), p1.z),
            flipped(rect(RectPlane::XY, (p0.x, p1.x), (p0.y, p1.y), p0.z)),
            rect(RectPlane::XZ, (p0.x, p1.x), (p0.z, p1.z), p1.y),
            flipped(rect(RectPlane::XZ, (p0.x, p1.x), (p0.z, p1.z), p0.y)),
            rect(RectPlane::YZ, (p0.y, p1.y), (p0.z, p1.z), p1.x),
            flipped(rect(RectPlane::YZ, (p0.y, p1.y), (p0.z, p1.z), p0.x)),
        ]);

        Self {
            bounds: aabb.min_padded(RECT_AABB_PADDING),
            sides,
        }
    }
}

impl Object for AxisBoxObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        self.sides.intersect(ray, interval, rng)
    }
}

impl HasAabb for AxisBoxObject {
    fn aabb(&self, _time: &Interval<Number>) -> Option<Aabb> { Some(self.bounds) }
}
