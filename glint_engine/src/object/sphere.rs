use std::f64::consts::{PI, TAU};
use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand_core::RngCore;

use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::material::MaterialInstance;
use crate::object::Object;
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;

/// A sphere with a fixed centre
///
/// A negative radius keeps the same surface, but turns the normals inwards (useful for hollow glass)
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct SphereObject {
    #[get_copy = "pub"]
    centre: Point3,
    #[get_copy = "pub"]
    radius: Number,
    #[get = "pub"]
    material: Arc<MaterialInstance>,
}

impl SphereObject {
    pub fn new(centre: impl Into<Point3>, radius: Number, material: impl Into<Arc<MaterialInstance>>) -> Self {
        Self {
            centre: centre.into(),
            radius,
            material: material.into(),
        }
    }
}

impl Object for SphereObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        _rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        sphere_intersect(self.centre, self.radius, ray, interval, &self.material)
    }
}

impl HasAabb for SphereObject {
    fn aabb(&self, _time: &Interval<Number>) -> Option<Aabb> { Some(sphere_aabb(self.centre, self.radius)) }
}

pub(super) fn sphere_aabb(centre: Point3, radius: Number) -> Aabb {
    let r = Vector3::splat(radius.abs());
    Aabb::new(centre - r, centre + r)
}

/// Solves the ray-sphere quadratic, accepting the nearest root strictly inside `interval`
pub(super) fn sphere_intersect<'o>(
    centre: Point3,
    radius: Number,
    ray: &Ray,
    interval: &Interval<Number>,
    material: &'o MaterialInstance,
) -> Option<Intersection<'o>> {
    let oc = ray.pos() - centre;
    let a = ray.dir().length_squared();
    let half_b = Vector3::dot(oc, ray.dir());
    let c = oc.length_squared() - (radius * radius);
    let discriminant = (half_b * half_b) - (a * c);

    // Also rejects NaN, from zero-length directions
    if !(discriminant > 0.) {
        return None;
    }

    // Find the nearest root that lies in the acceptable range.
    let sqrt_d = discriminant.sqrt();
    let mut root = (-half_b - sqrt_d) / a;
    if !interval.surrounds(&root) {
        root = (-half_b + sqrt_d) / a;
        if !interval.surrounds(&root) {
            return None;
        }
    }

    let pos = ray.at(root);
    let outward_normal = (pos - centre) / radius;
    let (normal, front_face) = Intersection::face_normal(ray, outward_normal);

    Some(Intersection {
        pos,
        normal,
        front_face,
        dist: root,
        uv: sphere_uv(outward_normal),
        material,
    })
}

/// Calculates the UV coordinates for a point on the unit sphere centred at the origin
///
/// `u` wraps around the Y axis, `v` runs from the bottom pole (`0`) to the top (`1`)
pub fn sphere_uv(p: Point3) -> Point2 {
    let theta = Number::atan2(p.z, p.x);
    let phi = Number::asin(p.y.clamp(-1., 1.));
    let u = 1. - (theta + PI) / TAU;
    let v = (phi + PI / 2.) / PI;
    Point2::new(u, v)
}
