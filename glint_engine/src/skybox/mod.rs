pub mod dynamic;
pub mod none;
pub mod simple;

use self::{
    dynamic::DynamicSkybox,
    none::NoSkybox,
    simple::{SimpleSkybox, WhiteSkybox},
};
use crate::core::types::Colour;
use crate::shared::ray::Ray;
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;

/// The background of a scene, seen by every ray that escapes without hitting anything
#[enum_dispatch]
pub trait Skybox: RtRequirement {
    fn sky_colour(&self, ray: &Ray) -> Colour;
}

#[enum_dispatch(Skybox)]
#[derive(Clone, Debug)]
pub enum SkyboxInstance {
    SimpleSkybox,
    WhiteSkybox,
    NoSkybox,
    DynamicSkybox,
}

impl Default for SkyboxInstance {
    fn default() -> Self { SimpleSkybox.into() }
}
