use crate::error::FormatError;

/// Stored pixel encoding of a supported bitmap.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// One palette index per pixel.
    Indexed8,
    /// Blue, green, red byte triple per pixel.
    Bgr24,
}

impl BitDepth {
    /// Map a header `bitsPerPixel` value to a supported depth.
    pub fn from_bits(bits: u16) -> Result<Self, FormatError> {
        match bits {
            8 => Ok(Self::Indexed8),
            24 => Ok(Self::Bgr24),
            other => Err(FormatError::UnsupportedDepth(other)),
        }
    }

    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            Self::Indexed8 => 8,
            Self::Bgr24 => 24,
        }
    }

    /// Bytes per stored pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Indexed8 => 1,
            Self::Bgr24 => 3,
        }
    }

    /// Whether pixels are palette indices.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed8)
    }

    /// Padded bytes per stored row: `ceil(width * bpp / 4) * 4`.
    ///
    /// Returns `None` on overflow.
    pub fn row_stride(&self, width: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(self.bytes_per_pixel())?
            .checked_add(3)
            .map(|n| n & !3)
    }
}
