//! Row-at-a-time decode of 8-bit palettized and 24-bit BGR pixel data.
//!
//! Only one padded scanline is held in memory at a time. Rows are stored
//! bottom-up in the file and consumed top-down here, so each destination row
//! seeks to its own source row.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use super::header::{BmpHeader, PALETTE_OFFSET};
use crate::color::Rgb565;
use crate::error::{BitmapError, FormatError};
use crate::limits::Limits;
use crate::pixel::BitDepth;
use crate::source::ByteSource;
use crate::surface::PixelSurface;

/// Rows decoded between cooperative stop checks.
pub const ROW_YIELD_INTERVAL: u32 = 20;

/// Color substituted for palette indices past the end of the palette.
pub const FALLBACK_COLOR: Rgb565 = Rgb565::BLACK;

/// Largest single growth step of the row buffer.
const ROW_GROWTH: usize = 64 * 1024;

/// Where the caller wants the image: top-left destination and optional
/// clip bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Placement {
    pub x: u32,
    pub y: u32,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

impl Placement {
    /// Clip the image to the caller's bounds, and to the `u32` coordinate
    /// space so that `x + width` never overflows.
    pub(crate) fn clip(self, header: &BmpHeader) -> Region {
        let width = header.width.min(self.max_width.unwrap_or(header.width));
        let height = header.height.min(self.max_height.unwrap_or(header.height));
        Region {
            x: self.x,
            y: self.y,
            width: width.min(u32::MAX - self.x),
            height: height.min(u32::MAX - self.y),
        }
    }
}

/// The clipped extent actually copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Palette resolved to packed colors, built once per decode.
pub(crate) struct Palette {
    entries: Vec<Rgb565>,
}

impl Palette {
    /// Read `colors` 4-byte (blue, green, red, reserved) entries from
    /// directly after the info header.
    pub(crate) fn read<S: ByteSource + ?Sized>(
        source: &mut S,
        colors: u32,
    ) -> Result<Self, BitmapError> {
        let mut raw = vec![0u8; colors as usize * 4];
        source.seek_to(PALETTE_OFFSET)?;
        if source.read_full(&mut raw)? < raw.len() {
            return Err(FormatError::TruncatedPalette.into());
        }
        let entries = raw
            .chunks_exact(4)
            .map(|bgrx| Rgb565::pack(bgrx[2], bgrx[1], bgrx[0]))
            .collect();
        Ok(Self { entries })
    }

    /// Look up an index, substituting [`FALLBACK_COLOR`] when out of range.
    pub(crate) fn get(&self, index: u8) -> Rgb565 {
        self.entries
            .get(usize::from(index))
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }
}

/// Scratch state for exactly one decode.
pub(crate) struct StreamDecoder<'h> {
    header: &'h BmpHeader,
    stride: usize,
    palette: Option<Palette>,
    row: Vec<u8>,
}

impl<'h> StreamDecoder<'h> {
    /// Resolve stride and palette. The row buffer starts empty and is grown
    /// on the first row read.
    pub(crate) fn new<S: ByteSource + ?Sized>(
        header: &'h BmpHeader,
        source: &mut S,
        limits: Option<&Limits>,
    ) -> Result<Self, BitmapError> {
        let stride = header.row_stride()?;
        let palette_colors = header.palette_colors();
        if let Some(limits) = limits {
            limits.check_memory(stride.saturating_add(palette_colors as usize * 4))?;
        }
        let palette = match header.depth {
            BitDepth::Indexed8 => Some(Palette::read(source, palette_colors)?),
            BitDepth::Bgr24 => None,
        };
        Ok(Self {
            header,
            stride,
            palette,
            row: Vec::new(),
        })
    }

    pub(crate) fn stride(&self) -> usize {
        self.stride
    }

    /// Write every pixel of `region` exactly once, top row first.
    pub(crate) fn decode_into<S, P>(
        &mut self,
        source: &mut S,
        surface: &mut P,
        region: Region,
        stop: &dyn Stop,
    ) -> Result<(), BitmapError>
    where
        S: ByteSource + ?Sized,
        P: PixelSurface + ?Sized,
    {
        for row in 0..region.height {
            self.read_row(source, self.header.height - 1 - row)?;

            let y = region.y + row;
            let used = region.width as usize * self.header.depth.bytes_per_pixel();
            let pixels = &self.row[..used];
            match &self.palette {
                Some(palette) => {
                    for (col, &index) in (0u32..).zip(pixels) {
                        surface.set_pixel(region.x + col, y, palette.get(index));
                    }
                }
                None => {
                    for (col, bgr) in (0u32..).zip(pixels.chunks_exact(3)) {
                        let color = Rgb565::pack(bgr[2], bgr[1], bgr[0]);
                        surface.set_pixel(region.x + col, y, color);
                    }
                }
            }

            if (row + 1) % ROW_YIELD_INTERVAL == 0 {
                log::trace!("bmp decode: {} of {} rows", row + 1, region.height);
                stop.check()?;
            }
        }
        Ok(())
    }

    /// Load stored row `bmp_row` (0 = bottom of the image) into the row buffer.
    ///
    /// The buffer grows in bounded steps only while the source keeps
    /// supplying bytes, so a header declaring a huge width over a short file
    /// fails as a truncated row instead of allocating the full stride.
    fn read_row<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        bmp_row: u32,
    ) -> Result<(), BitmapError> {
        let offset = u64::from(self.header.pixel_data_offset)
            + u64::from(bmp_row) * self.stride as u64;
        source.seek_to(offset)?;
        let mut filled = 0;
        while filled < self.stride {
            if filled == self.row.len() {
                let grow = (self.stride - filled).min(ROW_GROWTH);
                self.row
                    .try_reserve_exact(grow)
                    .map_err(|_| BitmapError::DimensionsTooLarge {
                        width: self.header.width,
                        height: self.header.height,
                    })?;
                self.row.resize(filled + grow, 0);
            }
            let want = self.row.len() - filled;
            if source.read_full(&mut self.row[filled..])? < want {
                return Err(FormatError::TruncatedRow(bmp_row).into());
            }
            filled = self.row.len();
        }
        Ok(())
    }
}
