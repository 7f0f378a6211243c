use rand::Rng;
use rand_core::RngCore;

use crate::core::types::{Colour, Number, Vector3};
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::math;
use crate::shared::ray::Ray;

/// A clear, non-absorbing refractive material like glass or water
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DielectricMaterial {
    pub refractive_index: Number,
}

impl DielectricMaterial {
    pub fn new(refractive_index: Number) -> Self { Self { refractive_index } }
}

impl Material for DielectricMaterial {
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter> {
        let index_ratio = if intersection.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };
        let unit_dir = ray.dir().normalize_or_zero();
        let cos_theta = Number::min(Vector3::dot(-unit_dir, intersection.normal), 1.0);
        let sin_theta = Number::sqrt(1.0 - cos_theta * cos_theta);

        let total_internal_reflection = index_ratio * sin_theta > 1.0;
        let dir = if total_internal_reflection
            || math::schlick_reflectance(cos_theta, index_ratio) > rng.gen::<Number>()
        {
            math::reflect(unit_dir, intersection.normal)
        } else {
            math::refract(unit_dir, intersection.normal, index_ratio)
        };

        Some(Scatter {
            attenuation: Colour::WHITE,
            ray: Ray::new_at_time(intersection.pos, dir, ray.time()),
        })
    }
}
