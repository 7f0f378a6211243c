use rand_core::RngCore;

use crate::core::types::Colour;
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::rng;
use crate::texture::{Texture, TextureInstance};

/// A perfectly diffuse (matte) material
#[derive(Clone, Debug)]
pub struct LambertianMaterial {
    pub albedo: TextureInstance,
}

impl LambertianMaterial {
    pub fn new(albedo: impl Into<TextureInstance>) -> Self { Self { albedo: albedo.into() } }
}

impl Default for LambertianMaterial {
    fn default() -> Self { Self::new(Colour::HALF_GREY) }
}

impl Material for LambertianMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        // Offsetting the normal by a point on the unit sphere gives a `cos(theta)` distribution
        let dir = intersection.normal + rng::vector_on_unit_sphere(rng);
        // The two can cancel out, which would make a degenerate ray
        let dir = if dir.length_squared() < 1e-16 {
            intersection.normal
        } else {
            dir
        };

        Some(Scatter {
            attenuation: self.albedo.value(intersection.uv, intersection.pos),
            ray: Ray::new_at_time(intersection.pos, dir, ray.time()),
        })
    }
}
