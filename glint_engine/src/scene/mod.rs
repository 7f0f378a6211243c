use crate::object::ObjectInstance;
use crate::skybox::SkyboxInstance;

pub mod camera;
pub mod preset;

/// Everything the integrator needs to know about the world: what can be hit, and what is behind it
#[derive(Clone, Debug)]
pub struct Scene {
    /// The root object, normally a [BvhObject](crate::object::bvh::BvhObject) or
    /// [ObjectList](crate::object::list::ObjectList)
    pub objects: ObjectInstance,
    pub skybox: SkyboxInstance,
}
