use crate::core::types::Colour;
use crate::shared::ray::Ray;
use crate::skybox::Skybox;

/// No background light at all, for scenes lit only by their own emitters
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSkybox;

impl Skybox for NoSkybox {
    fn sky_colour(&self, _ray: &Ray) -> Colour { Colour::BLACK }
}
