use rand_core::RngCore;

use crate::core::types::Colour;
use crate::shared::intersect::Intersection;
use crate::shared::ray::Ray;
use crate::shared::RtRequirement;
use enum_dispatch::enum_dispatch;

use self::{
    dielectric::DielectricMaterial, isotropic::IsotropicMaterial, lambertian::LambertianMaterial,
    light::LightMaterial, metal::MetalMaterial,
};

pub mod dielectric;
pub mod isotropic;
pub mod lambertian;
pub mod light;
pub mod metal;

/// The outcome of a ray scattering off a material
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scatter {
    /// The fraction of the light from [Self::ray] that makes it back along the incoming ray
    pub attenuation: Colour,
    /// The outgoing ray, starting at the intersection
    pub ray: Ray,
}

/// The trait that defines what properties a material has
#[enum_dispatch]
pub trait Material: RtRequirement {
    /// Scatters the input ray, according to the material's properties
    ///
    /// # Arguments
    ///
    /// * `ray`: The incoming ray that should be scattered
    /// * `intersection`: Information about the intersection we are calculating the scatter for
    ///     Includes surface normals, etc
    /// * `rng`: Source of randomness for probabilistic scattering
    ///
    /// # Return Value
    /// [None] if the ray was absorbed, otherwise the scattered ray and how much it is attenuated by
    ///
    /// # Examples
    ///
    /// ```
    /// # use rand_core::RngCore;
    /// # use glint_engine::core::types::Colour;
    /// # use glint_engine::material::{Material, Scatter};
    /// # use glint_engine::shared::intersect::Intersection;
    /// # use glint_engine::shared::math::reflect;
    /// # use glint_engine::shared::ray::Ray;
    /// #
    /// #[derive(Copy, Clone, Debug)]
    /// pub struct PerfectMirror;
    ///
    /// impl Material for PerfectMirror {
    ///     fn scatter(&self, ray: &Ray, intersection: &Intersection, _rng: &mut dyn RngCore) -> Option<Scatter> {
    ///         let dir = reflect(ray.dir(), intersection.normal);
    ///         Some(Scatter {
    ///             attenuation: Colour::WHITE,
    ///             ray: Ray::new_at_time(intersection.pos, dir, ray.time()),
    ///         })
    ///     }
    /// }
    /// ```
    fn scatter(&self, ray: &Ray, intersection: &Intersection, rng: &mut dyn RngCore) -> Option<Scatter>;

    /// Returns the light emitted by the material at the intersection, which is black for most materials
    fn emitted_light(&self, _intersection: &Intersection) -> Colour { Colour::BLACK }
}

/// An optimised implementation of [Material].
///
/// By using an enum, we can replace dynamic-dispatch with static dispatch.
#[enum_dispatch(Material)]
#[derive(Clone, Debug)]
pub enum MaterialInstance {
    LambertianMaterial,
    MetalMaterial,
    DielectricMaterial,
    LightMaterial,
    IsotropicMaterial,
}

impl Default for MaterialInstance {
    fn default() -> Self { LambertianMaterial::default().into() }
}
