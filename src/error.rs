use alloc::string::String;
use enough::StopReason;

/// Ways the input bytes fail to conform to the supported BMP subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("missing 'BM' signature")]
    BadSignature,

    #[error("file or info header is truncated")]
    TruncatedHeader,

    #[error("unsupported bit depth {0} (only 8 and 24 are supported)")]
    UnsupportedDepth(u16),

    #[error("compression method {0} is not supported")]
    CompressionUnsupported(u32),

    #[error("plane count must be 1, got {0}")]
    BadPlaneCount(u16),

    #[error("invalid dimensions {width}x{height}")]
    BadDimensions { width: i32, height: i32 },

    #[error("palette declares {0} colors (max 256)")]
    PaletteTooLarge(u32),

    #[error("palette is truncated")]
    TruncatedPalette,

    #[error("pixel row {0} is truncated")]
    TruncatedRow(u32),
}

/// Failure of the underlying byte source, independent of the container structure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from bitmap inspection and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid bitmap: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] SourceError),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl BitmapError {
    /// The format error kind, if this is a format failure.
    pub fn format_kind(&self) -> Option<FormatError> {
        match self {
            Self::Format(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BitmapError {
    fn from(e: std::io::Error) -> Self {
        BitmapError::Io(SourceError::Io(e))
    }
}
