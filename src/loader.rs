//! Path-based loading onto a [`Framebuffer`] (requires `std`).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use enough::Unstoppable;

use crate::decode::{DecodeRequest, DecodedRegion};
use crate::error::BitmapError;
use crate::framebuffer::Framebuffer;
use crate::info::BitmapInfo;
use crate::source::IoSource;

/// Load a BMP file onto `fb` with its top-left corner at `(x, y)`.
///
/// Clip bounds default to the space remaining on the framebuffer to the
/// right of `x` and below `y`. Failures are logged and returned; rows
/// already drawn stay drawn.
pub fn load_bmp(
    fb: &mut Framebuffer,
    path: impl AsRef<Path>,
    x: u32,
    y: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<DecodedRegion, BitmapError> {
    let path = path.as_ref();
    let result = open(path).and_then(|source| {
        DecodeRequest::new(source)
            .at(x, y)
            .max_width(max_width.unwrap_or(fb.width().saturating_sub(x)))
            .max_height(max_height.unwrap_or(fb.height().saturating_sub(y)))
            .decode_into(fb, Unstoppable)
    });
    if let Err(e) = &result {
        log::warn!("failed to load {}: {e}", path.display());
    }
    result
}

/// Read the headers of a BMP file without decoding pixels.
pub fn bmp_info(path: impl AsRef<Path>) -> Result<BitmapInfo, BitmapError> {
    let path = path.as_ref();
    let result = open(path).and_then(|source| DecodeRequest::new(source).inspect());
    if let Err(e) = &result {
        log::warn!("failed to read bmp info from {}: {e}", path.display());
    }
    result
}

fn open(path: &Path) -> Result<IoSource<BufReader<File>>, BitmapError> {
    Ok(IoSource::new(BufReader::new(File::open(path)?)))
}
