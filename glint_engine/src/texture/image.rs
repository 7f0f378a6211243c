use std::path::Path;
use std::sync::Arc;

use getset::CopyGetters;
use num_traits::ToPrimitive;
use thiserror::Error;
use tracing::warn;

use crate::core::targets::TEXTURE;
use crate::core::types::{Channel, Colour, Number, Point2, Point3};
use crate::texture::Texture;

/// How far the `v` coordinate is nudged so that `v = 0` samples the last row rather than past it
const ROW_NUDGE: Number = 1e-4;

#[derive(Error, Debug)]
pub enum RasterLoadError {
    #[error("failed to load image")]
    Image(#[from] ::image::ImageError),
    #[error("raster of {width}x{height} needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// A decoded image, stored as row-major RGB byte triples
#[derive(Clone, Debug, Default, PartialEq, CopyGetters)]
pub struct Raster {
    #[get_copy = "pub"]
    width: usize,
    #[get_copy = "pub"]
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RasterLoadError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(RasterLoadError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// A raster with no pixels in it
    pub fn empty() -> Self { Self::default() }

    /// Loads and decodes an image file, in any format the `image` crate supports
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RasterLoadError> {
        Ok(::image::open(path)?.into_rgb8().into())
    }

    pub fn has_data(&self) -> bool { self.width > 0 && self.height > 0 }

    /// Gets the pixel at `(x, y)` (`y = 0` at the top), with channels normalised to `0..=1`.
    ///
    /// Coordinates are clamped to the image; an empty raster gives black.
    pub fn sample(&self, x: usize, y: usize) -> Colour {
        if !self.has_data() {
            return Colour::BLACK;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let idx = (y * self.width + x) * 3;
        let px = &self.data[idx..idx + 3];
        Colour::new([px[0], px[1], px[2]].map(|c| c as Channel / 255.))
    }
}

impl From<::image::RgbImage> for Raster {
    fn from(img: ::image::RgbImage) -> Self {
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            data: img.into_raw(),
        }
    }
}

/// A texture that maps an image across the surface's UV coordinates, with nearest-pixel lookup
///
/// If the raster is empty, every lookup returns [Colour::DEBUG_CYAN]
#[derive(Clone, Debug)]
pub struct ImageTexture {
    pub raster: Arc<Raster>,
}

impl From<Raster> for ImageTexture {
    fn from(value: Raster) -> Self { Self::from(Arc::new(value)) }
}

impl From<Arc<Raster>> for ImageTexture {
    fn from(raster: Arc<Raster>) -> Self { Self { raster } }
}

impl ImageTexture {
    /// Loads the image at `path`.
    ///
    /// A missing or corrupt image is logged and replaced by an empty raster, so the texture still works
    /// (it just renders [Colour::DEBUG_CYAN]).
    pub fn open_or_fallback(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Raster::open(path) {
            Ok(raster) => raster.into(),
            Err(error) => {
                warn!(target: TEXTURE, ?error, ?path, "couldn't load image texture, using fallback");
                Raster::empty().into()
            }
        }
    }
}

impl Texture for ImageTexture {
    fn value(&self, uv: Point2, _pos: Point3) -> Colour {
        if !self.raster.has_data() {
            return Colour::DEBUG_CYAN;
        }

        // Flip v to image coords, where rows go top to bottom
        let (w, h) = (self.raster.width() as Number, self.raster.height() as Number);
        // NaN survives the clamp but fails to convert, and lands on the first pixel
        let i = (uv.x * w).clamp(0., w - 1.).to_usize().unwrap_or(0);
        let j = ((1. - uv.y) * h - ROW_NUDGE).clamp(0., h - 1.).to_usize().unwrap_or(0);

        self.raster.sample(i, j)
    }
}
