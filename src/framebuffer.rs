//! In-memory RGB565 framebuffer with basic drawing primitives.
//!
//! All drawing clips silently: writes outside the buffer are dropped, so
//! shapes may be placed partly off-screen. Any `i32` coordinates are
//! accepted, and the work done is bounded by the buffer size rather than by
//! the shape's extent.

use alloc::vec;
use alloc::vec::Vec;

use imgref::ImgVec;

use crate::color::Rgb565;
use crate::surface::PixelSurface;

/// Panel width of the reference board, in pixels.
pub const DISPLAY_WIDTH: u32 = 135;
/// Panel height of the reference board, in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;

/// A `width` x `height` surface of packed colors.
///
/// Either dimension may be zero; an empty framebuffer ignores every write.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    img: ImgVec<Rgb565>,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl Framebuffer {
    /// A black framebuffer of exactly `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        // imgref rejects a zero stride, even for zero-width images.
        Self {
            img: ImgVec::new_stride(vec![Rgb565::BLACK; w * h], w, h, w.max(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.img.height() as u32
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.img.width() && y < self.img.height()).then(|| y * self.img.stride() + x)
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb565) {
        if let Some(i) = self.offset(x, y) {
            self.img.buf_mut()[i] = color;
        }
    }

    /// Fill columns `left..=right` of row `y`, clipped to the buffer.
    fn span(&mut self, left: i64, right: i64, y: i64, color: Rgb565) {
        let left = left.max(0);
        let right = right.min(self.img.width() as i64 - 1);
        if y < 0 || y >= self.img.height() as i64 || left > right {
            return;
        }
        let row = y as usize * self.img.stride();
        self.img.buf_mut()[row + left as usize..=row + right as usize].fill(color);
    }

    /// Color at `(x, y)`, or black outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.offset(x.into(), y.into()).map_or(Rgb565::BLACK, |i| self.img.buf()[i])
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        self.plot(x.into(), y.into(), color);
    }

    pub fn fill(&mut self, color: Rgb565) {
        self.img.buf_mut().fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(Rgb565::BLACK);
    }

    pub fn hline(&mut self, x: i32, y: i32, len: i32, color: Rgb565) {
        self.fill_rect(x, y, len, 1, color);
    }

    pub fn vline(&mut self, x: i32, y: i32, len: i32, color: Rgb565) {
        self.fill_rect(x, y, 1, len, color);
    }

    /// Filled rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        let (x, y) = (i64::from(x), i64::from(y));
        let right = x + i64::from(w) - 1;
        let top = y.max(0);
        let bottom = (y + i64::from(h)).min(self.img.height() as i64);
        for row in top..bottom {
            self.span(x, right, row, color);
        }
    }

    /// Rectangle outline, or filled when `fill` is set.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565, fill: bool) {
        if w <= 0 || h <= 0 {
            return;
        }
        if fill {
            self.fill_rect(x, y, w, h, color);
            return;
        }
        // Edges past i32::MAX saturate, which is off-screen either way.
        self.hline(x, y, w, color);
        self.hline(x, y.saturating_add(h - 1), w, color);
        self.vline(x, y, h, color);
        self.vline(x.saturating_add(w - 1), y, h, color);
    }

    /// Bresenham line including both endpoints.
    ///
    /// Every step along the longer axis advances one pixel and the shorter
    /// axis rounds to the nearest pixel. Only steps whose major coordinate
    /// falls inside the buffer are visited.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb565) {
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (dx, dy) = (i64::from(x1) - x0, i64::from(y1) - y0);
        if dx.abs() >= dy.abs() {
            let extent = self.img.width() as i64;
            for (i, minor) in line_steps(x0, dx, dy, extent) {
                self.plot(x0 + i * dx.signum(), y0 + minor, color);
            }
        } else {
            let extent = self.img.height() as i64;
            for (i, minor) in line_steps(y0, dy, dx, extent) {
                self.plot(x0 + minor, y0 + i * dy.signum(), color);
            }
        }
    }

    /// Circle centred on `(cx, cy)`, outline or filled.
    ///
    /// Covers the pixels with `dx² + dy² <= r² + r`, the set traced by the
    /// midpoint algorithm, scanned one buffer row at a time.
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb565, fill: bool) {
        if radius <= 0 {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let half = |k: i64| -> i64 {
            if k.abs() > r {
                -1
            } else {
                (r * r + r - k * k).unsigned_abs().isqrt() as i64
            }
        };
        let top = (cy - r).max(0);
        let bottom = (cy + r).min(self.img.height() as i64 - 1);
        for y in top..=bottom {
            let k = y - cy;
            let outer = half(k);
            if fill {
                self.span(cx - outer, cx + outer, y, color);
                continue;
            }
            // Pixels whose vertical neighbours are both inside form the
            // interior; the rest of the row's span is outline.
            let inner = half(k - 1).min(half(k + 1));
            let edge = (inner + 1).min(outer);
            self.span(cx + edge, cx + outer, y, color);
            self.span(cx - outer, cx - edge, y, color);
        }
    }

    /// Row-major packed colors.
    pub fn pixels(&self) -> &[Rgb565] {
        self.img.buf()
    }

    /// Bytes in the order a display transfer sends them.
    ///
    /// Packed colors are already byte-swapped, so a little-endian store of
    /// each value puts the RGB565 high byte first.
    pub fn as_transport_bytes(&self) -> Vec<u8> {
        self.img
            .buf()
            .iter()
            .flat_map(|c| c.to_raw().to_le_bytes())
            .collect()
    }
}

impl PixelSurface for Framebuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        self.plot(x.into(), y.into(), color);
    }
}

/// Visible steps of a line along its major axis.
///
/// Yields `(i, minor)` for each step `i` in `0..=|major|` whose major
/// coordinate `start + i * sign(major)` lies in `0..extent`, with `minor` the
/// rounded offset along the other axis.
fn line_steps(
    start: i64,
    major: i64,
    minor: i64,
    extent: i64,
) -> impl Iterator<Item = (i64, i64)> {
    let len = major.abs();
    let (first, last) = if major >= 0 {
        ((-start).max(0), len.min(extent - 1 - start))
    } else {
        ((start - (extent - 1)).max(0), len.min(start))
    };
    let (len, run) = (i128::from(len), i128::from(minor.abs()));
    (first..=last).map(move |i| {
        let offset = if len == 0 {
            0
        } else {
            ((2 * i128::from(i) * run + len) / (2 * len)) as i64
        };
        (i, offset * minor.signum())
    })
}
