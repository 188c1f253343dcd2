use crate::color::Rgb565;

/// Anything the decoder can write pixels into.
///
/// The decoder only writes inside the clipped region it computed; it trusts
/// the caller's placement to fit the surface. Implementations may bounds-check
/// and silently drop out-of-range writes.
pub trait PixelSurface {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565);
}

impl<F: FnMut(u32, u32, Rgb565)> PixelSurface for F {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        self(x, y, color)
    }
}
