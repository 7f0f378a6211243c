use crate::core::types::{Colour, Point2, Point3};
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;

use self::{checker::CheckerTexture, image::ImageTexture, noise::NoiseTexture, solid::SolidTexture};

pub mod checker;
pub mod image;
pub mod noise;
pub mod solid;

/// The trait that defines what properties a texture has
#[enum_dispatch]
pub trait Texture: RtRequirement {
    /// Samples the texture, given the surface coordinates `uv` and world-space position `pos` of a point
    fn value(&self, uv: Point2, pos: Point3) -> Colour;
}

/// An optimised implementation of [Texture], using static dispatch
#[enum_dispatch(Texture)]
#[derive(Clone, Debug)]
pub enum TextureInstance {
    SolidTexture,
    CheckerTexture,
    NoiseTexture,
    ImageTexture,
}

impl From<Colour> for TextureInstance {
    fn from(value: Colour) -> Self { SolidTexture::from(value).into() }
}

impl Default for TextureInstance {
    fn default() -> Self { Colour::HALF_GREY.into() }
}
