use rand_core::RngCore;
use tracing::warn;

use crate::core::targets::RENDERER;
use crate::core::types::{Colour, Number};
use crate::material::Material;
use crate::object::Object;
use crate::render::render_opts::IntegratorOpts;
use crate::scene::Scene;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::validate;
use crate::skybox::Skybox;

/// The deepest a path is allowed to recurse, whatever the options ask for
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Estimates the light arriving along a ray, by following a single random path through the scene
#[derive(Copy, Clone, Debug)]
pub struct Integrator {
    opts: IntegratorOpts,
}

impl Integrator {
    pub fn new(mut opts: IntegratorOpts) -> Self {
        if opts.max_depth > MAX_DEPTH_LIMIT {
            warn!(target: RENDERER, max_depth = opts.max_depth, MAX_DEPTH_LIMIT, "max depth too large, clamping");
            opts.max_depth = MAX_DEPTH_LIMIT;
        }
        Self { opts }
    }

    pub fn opts(&self) -> &IntegratorOpts { &self.opts }

    /// [Self::radiance] with the configured depth budget
    pub fn sample(&self, scene: &Scene, ray: &Ray, rng: &mut dyn RngCore) -> Colour {
        self.radiance(scene, ray, self.opts.max_depth, rng)
    }

    /// Recursively calculates the radiance along `ray`, allowing at most `depth` more bounces.
    ///
    /// A path that runs out of depth contributes black. This biases the estimate darker, rather than
    /// modelling any physical absorption.
    pub fn radiance(&self, scene: &Scene, ray: &Ray, depth: usize, rng: &mut dyn RngCore) -> Colour {
        if depth == 0 {
            return Colour::BLACK;
        }

        let interval = Interval::new(self.opts.min_dist, Number::INFINITY);
        let Some(intersection) = scene.objects.intersect(ray, &interval, rng) else {
            return scene.skybox.sky_colour(ray);
        };
        validate::intersection(ray, &intersection, &interval);

        let material = intersection.material;
        let emitted = material.emitted_light(&intersection);
        match material.scatter(ray, &intersection, rng) {
            None => emitted,
            Some(scatter) => emitted + scatter.attenuation * self.radiance(scene, &scatter.ray, depth - 1, rng),
        }
    }
}

impl Default for Integrator {
    fn default() -> Self { Self::new(IntegratorOpts::default()) }
}
