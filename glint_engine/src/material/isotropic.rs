use rand_core::RngCore;

use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::rng;
use crate::texture::{Texture, TextureInstance};

/// A material that uniformly scatters rays in all directions
///
/// Normally this is the phase function of a [crate::object::homogenous_volume::HomogeneousVolumeObject]
#[derive(Clone, Debug)]
pub struct IsotropicMaterial {
    pub albedo: TextureInstance,
}

impl IsotropicMaterial {
    pub fn new(albedo: impl Into<TextureInstance>) -> Self { Self { albedo: albedo.into() } }
}

impl Material for IsotropicMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        Some(Scatter {
            attenuation: self.albedo.value(intersection.uv, intersection.pos),
            ray: Ray::new_at_time(intersection.pos, rng::vector_in_unit_sphere(rng), ray.time()),
        })
    }
}
