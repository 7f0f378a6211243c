#![allow(dead_code)]

use rand::{Rng as _, SeedableRng};
use tracing_subscriber::EnvFilter;

use glint_engine::core::types::*;
use glint_engine::material::lambertian::LambertianMaterial;
use glint_engine::material::MaterialInstance;
use glint_engine::object::axis_rect::{AxisRectObject, RectPlane};
use glint_engine::object::moving_sphere::MovingSphereObject;
use glint_engine::object::sphere::SphereObject;
use glint_engine::object::ObjectInstance;
use glint_engine::shared::intersect::Intersection;
use glint_engine::shared::ray::Ray;
use glint_engine::shared::rng;

pub type Rng = rand::rngs::SmallRng;

/// Installs a log subscriber that prints through the test harness, filtered by `RUST_LOG`
///
/// Every test that wants logs calls this; only the first call in a test binary does anything.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A deterministic generator, so failures can be reproduced
pub fn seeded(seed: u64) -> Rng { Rng::seed_from_u64(seed) }

pub fn grey() -> MaterialInstance { LambertianMaterial::new(Colour::HALF_GREY).into() }

/// A small sphere somewhere inside the cube `-SPREAD..=SPREAD`
pub fn random_sphere(rng: &mut Rng) -> ObjectInstance {
    const SPREAD: Number = 10.;
    let centre = rng::vector_in_unit_cube(rng) * SPREAD;
    SphereObject::new(centre, rng.gen_range(0.1..1.5), grey()).into()
}

/// A small sphere like [random_sphere], drifting a short way over the time window `0..=1`
pub fn random_moving_sphere(rng: &mut Rng) -> ObjectInstance {
    const SPREAD: Number = 10.;
    let start = rng::vector_in_unit_cube(rng) * SPREAD;
    let end = start + (rng::vector_in_unit_cube(rng) * 2.);
    MovingSphereObject::new(start, end, 0. ..=1., rng.gen_range(0.1..1.5), grey()).into()
}

/// A small rectangle in a random plane, somewhere inside the cube `-SPREAD..=SPREAD`
pub fn random_rect(rng: &mut Rng) -> ObjectInstance {
    const SPREAD: Number = 10.;
    let plane = [RectPlane::XY, RectPlane::XZ, RectPlane::YZ][rng.gen_range(0..3)];
    let a = rng.gen_range(-SPREAD..SPREAD);
    let b = rng.gen_range(-SPREAD..SPREAD);
    let k = rng.gen_range(-SPREAD..SPREAD);
    AxisRectObject::new(plane, a..a + rng.gen_range(0.5..3.), b..b + rng.gen_range(0.5..3.), k, grey()).into()
}

/// A ray starting somewhere around the scene, heading in a random direction
pub fn random_ray(rng: &mut Rng) -> Ray {
    let pos = rng::vector_in_unit_cube(rng) * 20.;
    let dir = rng::vector_on_unit_sphere(rng);
    Ray::new(pos, dir)
}

/// Like [random_ray], but at a random instant in the time window `0..1`
pub fn random_timed_ray(rng: &mut Rng) -> Ray {
    let ray = random_ray(rng);
    Ray::new_at_time(ray.pos(), ray.dir(), rng.gen_range(0.0..1.0))
}

/// An intersection at the origin, for testing materials without any geometry
pub fn intersection_at_origin(material: &MaterialInstance, normal: Vector3, front_face: bool) -> Intersection<'_> {
    Intersection {
        pos: Point3::ZERO,
        normal,
        front_face,
        dist: 1.,
        uv: Point2::new(0.5, 0.5),
        material,
    }
}

pub fn colours_eq(a: Colour, b: Colour, thresh: Channel) -> bool { (a - b).abs().into_iter().all(|c| c <= thresh) }
