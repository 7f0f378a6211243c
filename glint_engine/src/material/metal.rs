use rand_core::RngCore;

use crate::core::types::{Number, Vector3};
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::{math, rng};
use crate::texture::{Texture, TextureInstance};

/// A reflective material, with optionally blurry reflections
#[derive(Clone, Debug)]
pub struct MetalMaterial {
    pub albedo: TextureInstance,
    /// Radius of the cloud of random offsets applied to reflections, `0..=1`
    fuzz: Number,
}

impl MetalMaterial {
    /// Creates a new metal. The `fuzz` is clamped to `0..=1`
    pub fn new(albedo: impl Into<TextureInstance>, fuzz: Number) -> Self {
        Self {
            albedo: albedo.into(),
            fuzz: fuzz.clamp(0., 1.),
        }
    }

    pub fn fuzz(&self) -> Number { self.fuzz }
}

impl Material for MetalMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let reflected = math::reflect(ray.dir().normalize_or_zero(), intersection.normal);
        // Generate some fuzzy reflections by adding a "cloud" of random points
        // around the reflection (a sphere with `radius=fuzz` centred at `reflected`)
        let dir = reflected + (rng::vector_in_unit_sphere(rng) * self.fuzz);

        // This might end up scattering beneath the surface, in which case it is absorbed
        if Vector3::dot(dir, intersection.normal) > 0. {
            Some(Scatter {
                attenuation: self.albedo.value(intersection.uv, intersection.pos),
                ray: Ray::new_at_time(intersection.pos, dir, ray.time()),
            })
        } else {
            None
        }
    }
}
