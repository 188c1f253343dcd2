//! File header + 40-byte info header parsing and validation.

use super::utils::{i32_le, u16_le, u32_le};
use crate::error::{BitmapError, FormatError};
use crate::pixel::BitDepth;
use crate::source::ByteSource;

pub(crate) const FILE_HEADER_SIZE: usize = 14;
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// Offset of the palette in 8-bit images: directly after both headers.
pub(crate) const PALETTE_OFFSET: u64 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u64;
pub(crate) const MAX_PALETTE_COLORS: u32 = 256;

const SIGNATURE: [u8; 2] = *b"BM";

/// Parsed and validated headers. Immutable once read.
#[derive(Clone, Debug)]
pub(crate) struct BmpHeader {
    pub file_size: u32,
    pub pixel_data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    /// Raw `colorsUsed` field; 0 means "maximum for the depth".
    pub colors_used: u32,
}

impl BmpHeader {
    /// Read both headers from the start of `source` and validate them.
    ///
    /// Checks run in container order: signature, depth, compression,
    /// planes, then dimensions and palette size.
    pub(crate) fn read<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self, BitmapError> {
        let mut file_header = [0u8; FILE_HEADER_SIZE];
        source.seek_to(0)?;
        let got = source.read_full(&mut file_header)?;
        let present = got.min(SIGNATURE.len());
        if file_header[..present] != SIGNATURE[..present] {
            return Err(FormatError::BadSignature.into());
        }
        if got < FILE_HEADER_SIZE {
            return Err(FormatError::TruncatedHeader.into());
        }
        let file_size = u32_le(&file_header, 2);
        let pixel_data_offset = u32_le(&file_header, 10);

        let mut info = [0u8; INFO_HEADER_SIZE];
        if source.read_full(&mut info)? < INFO_HEADER_SIZE {
            return Err(FormatError::TruncatedHeader.into());
        }
        // Offsets below are relative to the info header (file offset - 14).
        let width = i32_le(&info, 4);
        let height = i32_le(&info, 8);
        let planes = u16_le(&info, 12);
        let bits = u16_le(&info, 14);
        let compression = u32_le(&info, 16);
        let colors_used = u32_le(&info, 32);

        let depth = BitDepth::from_bits(bits)?;
        if compression != 0 {
            return Err(FormatError::CompressionUnsupported(compression).into());
        }
        if planes != 1 {
            return Err(FormatError::BadPlaneCount(planes).into());
        }
        if width < 0 || height < 0 {
            return Err(FormatError::BadDimensions { width, height }.into());
        }
        if depth.is_indexed() && colors_used > MAX_PALETTE_COLORS {
            return Err(FormatError::PaletteTooLarge(colors_used).into());
        }

        let header = Self {
            file_size,
            pixel_data_offset,
            width: width as u32,
            height: height as u32,
            depth,
            colors_used,
        };
        log::debug!(
            "bmp header: {}x{} {}bpp, data at {}, {} palette colors",
            header.width,
            header.height,
            bits,
            header.pixel_data_offset,
            header.palette_colors()
        );
        Ok(header)
    }

    /// Number of palette entries to read; 0 for true-color images.
    pub(crate) fn palette_colors(&self) -> u32 {
        match self.depth {
            BitDepth::Indexed8 if self.colors_used == 0 => MAX_PALETTE_COLORS,
            BitDepth::Indexed8 => self.colors_used,
            BitDepth::Bgr24 => 0,
        }
    }

    pub(crate) fn row_stride(&self) -> Result<usize, BitmapError> {
        self.depth
            .row_stride(self.width)
            .ok_or(BitmapError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}
