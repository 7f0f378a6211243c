use std::sync::Arc;

use getset::{CopyGetters, Getters};
use rand::distributions::{Distribution, Open01};
use rand_core::RngCore;
use tracing::warn;

use crate::core::targets::OBJECT;
use crate::core::types::{Number, Point2, Vector3};
use crate::material::isotropic::IsotropicMaterial;
use crate::material::MaterialInstance;
use crate::object::{Object, ObjectInstance};
use crate::shared::aabb::{Aabb, HasAabb};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::texture::TextureInstance;

/// How far past the entry point the search for the exit point starts, so the entry isn't found twice
const EXIT_SEARCH_OFFSET: Number = 1e-4;

/// An object wrapper that treats the wrapped (closed) object as the boundary of a constant-density volume,
/// like smoke or fog
///
/// Rays scatter at a random depth inside the volume, according to an [IsotropicMaterial] phase function.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct HomogeneousVolumeObject {
    #[get = "pub"]
    boundary: Arc<ObjectInstance>,
    #[get_copy = "pub"]
    density: Number,
    neg_inv_density: Number,
    #[get = "pub"]
    phase: Arc<MaterialInstance>,
}

impl HomogeneousVolumeObject {
    pub fn new(boundary: impl Into<Arc<ObjectInstance>>, density: Number, albedo: impl Into<TextureInstance>) -> Self {
        if density.is_nan() || density <= 0. {
            warn!(target: OBJECT, density, "volume density should be positive");
        }
        let phase = MaterialInstance::from(IsotropicMaterial::new(albedo));
        Self {
            boundary: boundary.into(),
            density,
            neg_inv_density: -1.0 / density,
            phase: Arc::new(phase),
        }
    }
}

impl Object for HomogeneousVolumeObject {
    fn intersect<'o>(
        &'o self,
        ray: &Ray,
        interval: &Interval<Number>,
        rng: &mut dyn RngCore,
    ) -> Option<Intersection<'o>> {
        // Find where the ray enters and exits the boundary, ignoring the search interval for now
        // so that rays starting inside the volume still see the entry behind them
        let entering = self.boundary.intersect(ray, &Interval::FULL, rng)?;
        let exiting = self.boundary.intersect(
            ray,
            &Interval::FULL.with_start(entering.dist + EXIT_SEARCH_OFFSET),
            rng,
        )?;

        let enter_dist = Number::max(entering.dist, interval.start);
        let exit_dist = Number::min(exiting.dist, interval.end);
        if !(enter_dist < exit_dist) {
            return None;
        }
        let enter_dist = enter_dist.max(0.);

        // Distances inside the volume are in world units, not multiples of the ray direction
        let ray_length = ray.dir().length();
        let dist_inside = (exit_dist - enter_dist) * ray_length;
        let u: Number = Open01.sample(rng);
        let hit_dist = self.neg_inv_density * Number::ln(u);

        // Also rejects NaN
        if !(hit_dist <= dist_inside) {
            return None;
        }

        let dist = enter_dist + (hit_dist / ray_length);

        Some(Intersection {
            pos: ray.at(dist),
            // The following are all arbitrary, the phase function scatters uniformly
            normal: Vector3::X,
            front_face: true,
            uv: Point2::ZERO,
            dist,
            material: &self.phase,
        })
    }
}

impl HasAabb for HomogeneousVolumeObject {
    fn aabb(&self, time: &Interval<Number>) -> Option<Aabb> { self.boundary.aabb(time) }
}
