use derivative::Derivative;
use ::noise::{NoiseFn, Perlin};

use crate::core::types::{Channel, Colour, Number, Point2, Point3};
use crate::texture::Texture;

/// A marble-like procedural texture, made by phase-shifting stripes along `z` with [turbulence]
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct NoiseTexture {
    #[derivative(Debug = "ignore")]
    noise: Perlin,
    /// Frequency of the stripes
    pub scale: Number,
    /// Number of octaves summed by the turbulence
    pub depth: usize,
}

impl NoiseTexture {
    pub const DEFAULT_DEPTH: usize = 7;

    /// Creates a new noise texture. Textures made with the same `seed` are identical
    pub fn new(scale: Number, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            depth: Self::DEFAULT_DEPTH,
        }
    }
}

impl Texture for NoiseTexture {
    fn value(&self, _uv: Point2, pos: Point3) -> Colour {
        let marble = 0.5 * (1. + Number::sin(self.scale * pos.z + 10. * turbulence(&self.noise, pos, self.depth)));
        Colour::splat(marble as Channel)
    }
}

/// Sums `depth` octaves of the noise, each at double the frequency and half the weight of the last,
/// and takes the magnitude of the result
pub fn turbulence(noise: &impl NoiseFn<Number, 3>, pos: Point3, depth: usize) -> Number {
    let mut accum = 0.;
    let mut p = pos;
    let mut weight = 1.;
    for _ in 0..depth {
        accum += weight * noise.get(p.to_array());
        weight *= 0.5;
        p *= 2.;
    }
    accum.abs()
}
