//! Seekable byte sources the decoder reads from.

use crate::error::SourceError;

/// A byte-addressable, seekable read capability.
///
/// Short reads are only allowed at end of data; the decoder turns them into
/// the matching truncation error.
pub trait ByteSource {
    /// Move the read position to an absolute byte offset. Seeking past the
    /// end is not an error; subsequent reads return 0 bytes.
    fn seek_to(&mut self, offset: u64) -> Result<(), SourceError>;

    /// Read up to `buf.len()` bytes, returning how many were read.
    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, SourceError>;

    /// Fill as much of `buf` as the source allows.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_some(&mut buf[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(filled)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn seek_to(&mut self, offset: u64) -> Result<(), SourceError> {
        (**self).seek_to(offset)
    }

    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        (**self).read_some(buf)
    }
}

/// In-memory source over a byte slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn seek_to(&mut self, offset: u64) -> Result<(), SourceError> {
        self.pos = usize::try_from(offset)
            .unwrap_or(usize::MAX)
            .min(self.data.len());
        Ok(())
    }

    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        let available = &self.data[self.pos..];
        let n = buf.len().min(available.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}

/// Adapter for any `std::io::Read + Seek` (files, `io::Cursor`, ...).
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> ByteSource for IoSource<R> {
    fn seek_to(&mut self, offset: u64) -> Result<(), SourceError> {
        self.inner.seek(std::io::SeekFrom::Start(offset))?;
        Ok(())
    }

    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize, SourceError> {
        loop {
            match self.inner.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
