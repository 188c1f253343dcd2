use crate::pixel::BitDepth;

/// Header-level facts about a bitmap, read without touching pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    /// Declared file size; informational, never checked against the data.
    pub file_size: u32,
    /// Palette entries an 8-bit image uses (0 for 24-bit).
    pub palette_colors: u32,
}

impl BitmapInfo {
    pub fn bits_per_pixel(&self) -> u16 {
        self.depth.bits_per_pixel()
    }

    pub(crate) fn from_header(h: &crate::bmp::BmpHeader) -> Self {
        Self {
            width: h.width,
            height: h.height,
            depth: h.depth,
            file_size: h.file_size,
            palette_colors: h.palette_colors(),
        }
    }
}
