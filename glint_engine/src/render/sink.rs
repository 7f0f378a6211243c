use crate::core::types::Colour;

/// Somewhere finished pixels can be written to
///
/// Colours are linear and unclamped; any gamma correction or quantisation is up to the sink.
pub trait PixelSink {
    /// Stores the colour of the pixel at `(x, y)`, where `(0, 0)` is the top-left
    fn put_colour(&mut self, x: usize, y: usize, colour: Colour);
}

impl PixelSink for image::Rgb32FImage {
    fn put_colour(&mut self, x: usize, y: usize, colour: Colour) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(px) = self.get_pixel_mut_checked(x, y) {
            *px = colour.into();
        }
    }
}
