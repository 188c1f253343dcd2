//! Synthetic bitmap construction shared by the integration tests.
#![allow(dead_code)]

use stickbmp::Rgb565;

/// Builder for minimal uncompressed BMP files.
///
/// Rows are given top-down; they are written bottom-up as the format stores them.
pub struct BmpBuilder {
    pub width: i32,
    pub height: i32,
    pub bits: u16,
    pub planes: u16,
    pub compression: u32,
    pub colors_used: u32,
    /// Palette entries as (r, g, b); written as the stored palette.
    pub palette: Vec<(u8, u8, u8)>,
    /// Unpadded pixel bytes per row, top row first.
    pub rows: Vec<Vec<u8>>,
}

impl BmpBuilder {
    /// 24-bit image from top-down rows of (r, g, b).
    pub fn bgr24(rows: &[Vec<(u8, u8, u8)>]) -> Self {
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        Self {
            width,
            height: rows.len() as i32,
            bits: 24,
            planes: 1,
            compression: 0,
            colors_used: 0,
            palette: Vec::new(),
            rows: rows
                .iter()
                .map(|row| row.iter().flat_map(|&(r, g, b)| [b, g, r]).collect())
                .collect(),
        }
    }

    /// 8-bit image from top-down rows of palette indices.
    pub fn indexed8(palette: &[(u8, u8, u8)], rows: &[Vec<u8>]) -> Self {
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        Self {
            width,
            height: rows.len() as i32,
            bits: 8,
            planes: 1,
            compression: 0,
            colors_used: palette.len() as u32,
            palette: palette.to_vec(),
            rows: rows.to_vec(),
        }
    }

    pub fn stride(&self) -> usize {
        let bpp = (self.bits as usize).div_ceil(8);
        (self.width.max(0) as usize * bpp).div_ceil(4) * 4
    }

    pub fn build(&self) -> Vec<u8> {
        let palette_bytes = self.palette.len() * 4;
        let data_offset = 54 + palette_bytes;
        let stride = self.stride();
        let file_size = data_offset + stride * self.rows.len();

        let mut out = Vec::with_capacity(file_size);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(file_size as u32).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(data_offset as u32).to_le_bytes());

        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&((stride * self.rows.len()) as u32).to_le_bytes());
        out.extend_from_slice(&2835u32.to_le_bytes());
        out.extend_from_slice(&2835u32.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(out.len(), 54);

        for &(r, g, b) in &self.palette {
            out.extend_from_slice(&[b, g, r, 0]);
        }
        for row in self.rows.iter().rev() {
            let mut padded = row.clone();
            padded.resize(stride, 0xEE);
            out.extend_from_slice(&padded);
        }
        out
    }
}

/// Surface that records every write in order.
#[derive(Default)]
pub struct Recorder {
    pub writes: Vec<(u32, u32, Rgb565)>,
}

impl stickbmp::PixelSurface for Recorder {
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        self.writes.push((x, y, color));
    }
}

/// Deterministic xorshift noise, as (r, g, b) rows.
pub fn noise_rows(w: usize, h: usize) -> Vec<Vec<(u8, u8, u8)>> {
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    (0..h)
        .map(|_| (0..w).map(|_| (next(), next(), next())).collect())
        .collect()
}
