//! # stickbmp
//!
//! Streaming BMP decoder and RGB565 framebuffer for small display boards.
//!
//! ## Streaming Decoding
//!
//! Bitmaps are decoded one scanline at a time straight into any
//! [`PixelSurface`]. Peak memory is one padded row plus the palette,
//! regardless of image size, which matters when the destination framebuffer
//! already takes most of the RAM.
//!
//! ## Supported Formats
//!
//! - Uncompressed BMP with a 40-byte info header, stored bottom-up
//! - 8-bit palettized (out-of-range indices decode as [`FALLBACK_COLOR`])
//! - 24-bit BGR
//!
//! Every decoded color is converted to [`Rgb565`], the crate's single packed
//! representation (RGB565, byte-swapped for the display transport).
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields) bitmaps, other bit depths, top-down rows
//! - Encoding
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use stickbmp::{Framebuffer, SliceSource};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Read headers without decoding
//! let info = stickbmp::inspect(SliceSource::new(data))?;
//! println!("{}x{} {}bpp", info.width, info.height, info.bits_per_pixel());
//!
//! // Decode onto the framebuffer, clipped to the screen
//! let mut fb = Framebuffer::default();
//! let (w, h) = (fb.width(), fb.height());
//! let region = stickbmp::decode_into(SliceSource::new(data), &mut fb, 0, 0, Some(w), Some(h))?;
//! println!("wrote {}x{}", region.width, region.height);
//! # Ok::<(), stickbmp::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod color;
mod decode;
mod error;
mod framebuffer;
mod info;
mod limits;
mod pixel;
mod source;
mod surface;

#[cfg(feature = "std")]
mod loader;

// Re-exports
pub use bmp::{FALLBACK_COLOR, ROW_YIELD_INTERVAL};
pub use color::Rgb565;
pub use decode::{DecodeRequest, DecodedRegion};
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, FormatError, SourceError};
pub use framebuffer::{DISPLAY_HEIGHT, DISPLAY_WIDTH, Framebuffer};
pub use info::BitmapInfo;
pub use limits::Limits;
pub use pixel::BitDepth;
#[cfg(feature = "std")]
pub use source::IoSource;
pub use source::{ByteSource, SliceSource};
pub use surface::PixelSurface;

#[cfg(feature = "std")]
pub use loader::{bmp_info, load_bmp};

/// Read and validate the headers of a bitmap without touching pixel data.
pub fn inspect<S: ByteSource>(source: S) -> Result<BitmapInfo, BitmapError> {
    DecodeRequest::new(source).inspect()
}

/// Stream a bitmap into `surface` with its top-left pixel at `(x, y)`.
///
/// The copied region is the image clipped to `max_width` x `max_height`.
/// Not transactional: on error, a prefix of rows may already be written.
pub fn decode_into<S: ByteSource, P: PixelSurface + ?Sized>(
    source: S,
    surface: &mut P,
    x: u32,
    y: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<DecodedRegion, BitmapError> {
    let mut request = DecodeRequest::new(source).at(x, y);
    if let Some(w) = max_width {
        request = request.max_width(w);
    }
    if let Some(h) = max_height {
        request = request.max_height(h);
    }
    request.decode_into(surface, Unstoppable)
}
