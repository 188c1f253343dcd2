//! Streaming BMP decoder for uncompressed 8-bit and 24-bit bitmaps (internal).
//!
//! Use top-level [`crate::inspect`], [`crate::decode_into`] or
//! [`crate::DecodeRequest`].

mod decode;
mod header;
mod utils;

pub(crate) use decode::{Placement, Region};
pub use decode::{FALLBACK_COLOR, ROW_YIELD_INTERVAL};
pub(crate) use header::BmpHeader;

use crate::error::BitmapError;
use crate::info::BitmapInfo;
use crate::limits::Limits;
use crate::source::ByteSource;
use crate::surface::PixelSurface;
use enough::Stop;

/// Read and validate headers only. Never reads palette or pixel bytes.
pub(crate) fn inspect<S: ByteSource + ?Sized>(
    source: &mut S,
    limits: Option<&Limits>,
) -> Result<BitmapInfo, BitmapError> {
    let header = BmpHeader::read(source)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    Ok(BitmapInfo::from_header(&header))
}

/// Decode into `surface` at the placement's origin, clipped to its bounds.
pub(crate) fn decode<S, P>(
    source: &mut S,
    surface: &mut P,
    placement: Placement,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(BitmapInfo, Region), BitmapError>
where
    S: ByteSource + ?Sized,
    P: PixelSurface + ?Sized,
{
    let header = BmpHeader::read(source)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    stop.check()?;

    let mut decoder = decode::StreamDecoder::new(&header, source, limits)?;
    let region = placement.clip(&header);
    log::debug!(
        "bmp decode: {}x{} region at ({}, {}), row stride {}",
        region.width,
        region.height,
        region.x,
        region.y,
        decoder.stride()
    );
    decoder.decode_into(source, surface, region, stop)?;
    Ok((BitmapInfo::from_header(&header), region))
}
