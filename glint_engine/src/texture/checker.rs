use std::sync::Arc;

use crate::core::types::{Colour, Number, Point2, Point3};
use crate::texture::{Texture, TextureInstance};

/// A 3D checkerboard in world space, alternating between two other textures
///
/// The cells are chosen by the sign of `sin(scale*x) * sin(scale*y) * sin(scale*z)`,
/// so the pattern doesn't depend on how the surface is parameterised.
#[derive(Clone, Debug)]
pub struct CheckerTexture {
    pub even: Arc<TextureInstance>,
    pub odd: Arc<TextureInstance>,
    pub scale: Number,
}

impl CheckerTexture {
    pub const DEFAULT_SCALE: Number = 10.;

    pub fn new(even: impl Into<TextureInstance>, odd: impl Into<TextureInstance>) -> Self {
        Self {
            even: Arc::new(even.into()),
            odd: Arc::new(odd.into()),
            scale: Self::DEFAULT_SCALE,
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: Point2, pos: Point3) -> Colour {
        let p = pos * self.scale;
        let sines = p.x.sin() * p.y.sin() * p.z.sin();
        if sines < 0. {
            self.odd.value(uv, pos)
        } else {
            self.even.value(uv, pos)
        }
    }
}
