use std::sync::Arc;

use derivative::Derivative;

use crate::core::types::{Colour, Vector3};
use crate::shared::ray::Ray;
use crate::skybox::Skybox;

/// A skybox backed by any function of the ray's direction
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct DynamicSkybox {
    #[derivative(Debug = "ignore")]
    func: Arc<dyn Fn(Vector3) -> Colour + Send + Sync>,
}

impl DynamicSkybox {
    pub fn new(func: impl Fn(Vector3) -> Colour + Send + Sync + 'static) -> Self { Self { func: Arc::new(func) } }
}

impl Skybox for DynamicSkybox {
    fn sky_colour(&self, ray: &Ray) -> Colour { (self.func)(ray.dir()) }
}
