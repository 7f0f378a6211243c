use rand_core::RngCore;

use crate::core::types::Colour;
use crate::material::{Material, Scatter};
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::texture::{Texture, TextureInstance};

/// A simple diffuse emissive material for turning an object into a light.
///
/// Does not scatter.
#[derive(Clone, Debug)]
pub struct LightMaterial {
    pub emissive: TextureInstance,
}

impl LightMaterial {
    pub fn new(emissive: impl Into<TextureInstance>) -> Self {
        Self {
            emissive: emissive.into(),
        }
    }
}

impl Material for LightMaterial {
    fn scatter(&self, _ray: &Ray, _intersection: &Intersection, _rng: &mut dyn RngCore) -> Option<Scatter> { None }

    fn emitted_light(&self, intersection: &Intersection) -> Colour {
        self.emissive.value(intersection.uv, intersection.pos)
    }
}
