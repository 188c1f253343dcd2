//! Packed 16-bit color codec.
//!
//! There is exactly one packed representation in this crate: RGB565 with the
//! two bytes swapped, so that a native little-endian `u16` store lays the
//! high byte first, which is the order the display transport expects.

use rgb::RGB8;

/// A byte-swapped RGB565 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self::pack(0, 0, 0);
    pub const WHITE: Self = Self::pack(255, 255, 255);
    pub const RED: Self = Self::pack(255, 0, 0);
    pub const GREEN: Self = Self::pack(0, 255, 0);
    pub const BLUE: Self = Self::pack(0, 0, 255);
    pub const YELLOW: Self = Self::pack(255, 255, 0);
    pub const CYAN: Self = Self::pack(0, 255, 255);
    pub const MAGENTA: Self = Self::pack(255, 0, 255);

    /// Pack 8-bit channels: top 5 bits of red, 6 of green, 5 of blue, then
    /// byte-swap.
    pub const fn pack(r: u8, g: u8, b: u8) -> Self {
        let color = (((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3);
        Self(color.swap_bytes())
    }

    /// Wrap an already packed (byte-swapped) value.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The packed (byte-swapped) value.
    pub const fn to_raw(self) -> u16 {
        self.0
    }

    /// Recover approximate 8-bit channels.
    ///
    /// Each channel is reconstructed at the middle of its quantization step,
    /// so `pack(unpack(c)) == c` and every channel is within 4 (red, blue) or
    /// 2 (green) of the value originally packed.
    pub const fn unpack(self) -> RGB8 {
        let color = self.0.swap_bytes();
        let r = ((color >> 8) & 0xF8) as u8 | 0x04;
        let g = ((color >> 3) & 0xFC) as u8 | 0x02;
        let b = ((color << 3) & 0xF8) as u8 | 0x04;
        RGB8 { r, g, b }
    }

    /// Linear blend in unpacked space: `alpha` of `self` over `1 - alpha` of
    /// `other`. Endpoints return the inputs unchanged.
    pub fn blend(self, other: Self, alpha: f32) -> Self {
        if alpha <= 0.0 {
            return other;
        }
        if alpha >= 1.0 {
            return self;
        }
        let a = self.unpack();
        let b = other.unpack();
        let mix = |x: u8, y: u8| channel(f32::from(x) * alpha + f32::from(y) * (1.0 - alpha));
        Self::pack(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// Scale every channel toward 0 by `factor` (1.0 keeps the color).
    pub fn darken(self, factor: f32) -> Self {
        let c = self.unpack();
        let scale = |x: u8| channel(f32::from(x) * factor);
        Self::pack(scale(c.r), scale(c.g), scale(c.b))
    }

    /// Move every channel toward 255 by `factor` (0.0 keeps the color).
    pub fn lighten(self, factor: f32) -> Self {
        let c = self.unpack();
        let lift = |x: u8| channel(f32::from(x) + (255.0 - f32::from(x)) * factor);
        Self::pack(lift(c.r), lift(c.g), lift(c.b))
    }
}

// Truncates like an integer cast; NaN maps to 0.
fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

impl From<RGB8> for Rgb565 {
    fn from(c: RGB8) -> Self {
        Self::pack(c.r, c.g, c.b)
    }
}

impl From<Rgb565> for RGB8 {
    fn from(c: Rgb565) -> Self {
        c.unpack()
    }
}
