use enough::Stop;

use crate::bmp::{self, Placement};
use crate::error::BitmapError;
use crate::info::BitmapInfo;
use crate::limits::Limits;
use crate::source::ByteSource;
use crate::surface::PixelSurface;

/// What a successful decode wrote.
///
/// Every pixel of `[x, x + width) x [y, y + height)` was written exactly
/// once; nothing outside it was touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRegion {
    pub x: u32,
    pub y: u32,
    /// Clipped width actually copied.
    pub width: u32,
    /// Clipped height actually copied.
    pub height: u32,
    /// Headers of the source image.
    pub info: BitmapInfo,
}

/// Builder for a single streaming decode.
///
/// ```no_run
/// use stickbmp::{DecodeRequest, Framebuffer, SliceSource, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let mut fb = Framebuffer::new(135, 240);
/// let region = DecodeRequest::new(SliceSource::new(data))
///     .at(0, 164)
///     .max_height(240 - 164)
///     .decode_into(&mut fb, Unstoppable)?;
/// println!("wrote {}x{}", region.width, region.height);
/// # Ok::<(), stickbmp::BitmapError>(())
/// ```
#[derive(Debug)]
pub struct DecodeRequest<'a, S> {
    source: S,
    placement: Placement,
    limits: Option<&'a Limits>,
}

impl<'a, S: ByteSource> DecodeRequest<'a, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            placement: Placement::default(),
            limits: None,
        }
    }

    /// Destination of the image's top-left pixel.
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.placement.x = x;
        self.placement.y = y;
        self
    }

    /// Copy at most `width` columns.
    pub fn max_width(mut self, width: u32) -> Self {
        self.placement.max_width = Some(width);
        self
    }

    /// Copy at most `height` rows.
    pub fn max_height(mut self, height: u32) -> Self {
        self.placement.max_height = Some(height);
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read headers only.
    pub fn inspect(mut self) -> Result<BitmapInfo, BitmapError> {
        bmp::inspect(&mut self.source, self.limits)
    }

    /// Stream the image into `surface`.
    ///
    /// Not transactional: on error, a prefix of rows may already be written.
    pub fn decode_into<P: PixelSurface + ?Sized>(
        mut self,
        surface: &mut P,
        stop: impl Stop,
    ) -> Result<DecodedRegion, BitmapError> {
        let (info, region) =
            bmp::decode(&mut self.source, surface, self.placement, self.limits, &stop)?;
        Ok(DecodedRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            info,
        })
    }
}
