use std::time::{Duration, Instant};

use rand::Rng;
use rand_core::RngCore;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::core::targets::RENDERER;
use crate::core::types::{Channel, Colour, Number};
use crate::render::integrator::Integrator;
use crate::render::render_opts::RenderOpts;
use crate::render::sink::PixelSink;
use crate::scene::camera::{CamInvalidError, Camera};
use crate::scene::Scene;
use crate::shared::validate;

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum RenderError {
    #[error("couldn't calculate the viewport")]
    CameraInvalid {
        #[from]
        source: CamInvalidError,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// How long the render took
    pub duration: Duration,
    /// How many pixels were rendered
    pub num_px: usize,
    /// How many paths were traced in total
    pub num_samples: usize,
}

/// Renders scenes one pixel at a time on the calling thread
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    opts: RenderOpts,
    integrator: Integrator,
}

impl Renderer {
    pub fn new(opts: RenderOpts) -> Self {
        Self {
            integrator: Integrator::new(opts.integrator),
            opts,
        }
    }

    pub fn opts(&self) -> &RenderOpts { &self.opts }
    pub fn integrator(&self) -> &Integrator { &self.integrator }

    /// Renders the scene as seen through `camera`, writing every pixel into `sink`.
    ///
    /// Pixel `(0, 0)` is the top-left corner of the image. Each pixel is the mean of
    /// [RenderOpts::samples] paths, jittered across the pixel's area. Colours are left linear.
    pub fn render(
        &self,
        scene: &Scene,
        camera: &Camera,
        sink: &mut impl PixelSink,
        rng: &mut dyn RngCore,
    ) -> Result<RenderStats, RenderError> {
        let start = Instant::now();
        let [w, h] = [self.opts.width.get(), self.opts.height.get()];
        let samples = self.opts.samples.get();

        let viewport = camera.calculate_viewport(self.opts.aspect_ratio()).map_err(|err| {
            warn!(target: RENDERER, ?err, ?camera, "couldn't calculate viewport");
            RenderError::from(err)
        })?;

        debug!(target: RENDERER, w, h, samples, "begin render");

        for y in 0..h {
            trace!(target: RENDERER, y, "render row");
            for x in 0..w {
                let mut accum = Colour::BLACK;
                for _ in 0..samples {
                    let s = (x as Number + rng.gen::<Number>()) / w as Number;
                    let t = (y as Number + rng.gen::<Number>()) / h as Number;
                    let ray = viewport.calc_ray(s, t, rng);
                    accum += self.integrator.sample(scene, &ray, rng);
                }
                let colour = accum / samples as Channel;
                validate::colour(colour);
                sink.put_colour(x, y, colour);
            }
        }

        let stats = RenderStats {
            duration: start.elapsed(),
            num_px: w * h,
            num_samples: w * h * samples,
        };
        debug!(target: RENDERER, ?stats, "finished render");
        Ok(stats)
    }
}
