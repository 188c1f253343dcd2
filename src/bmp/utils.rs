//! Little-endian field access for fixed-size header blocks.

pub(crate) fn u16_le(block: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([block[at], block[at + 1]])
}

pub(crate) fn u32_le(block: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([block[at], block[at + 1], block[at + 2], block[at + 3]])
}

pub(crate) fn i32_le(block: &[u8], at: usize) -> i32 {
    u32_le(block, at) as i32
}
