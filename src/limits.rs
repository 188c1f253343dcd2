use crate::error::BitmapError;

/// Resource limits applied before any pixel row is read.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height) of the source image.
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the transient row buffer and palette together.
    pub max_memory_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check declared image dimensions.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check the size of a transient allocation.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BitmapError> {
        exceeds("allocation of", bytes as u64, self.max_memory_bytes)
    }
}
