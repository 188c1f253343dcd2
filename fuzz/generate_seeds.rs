#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, bits: u16, colors: u32, stride: usize) -> Vec<u8> {
    let palette = if bits == 8 { colors.max(1) as usize * 4 } else { 0 };
    let offset = 54 + palette;
    let size = offset + stride * height as usize;
    let mut h = Vec::with_capacity(size);
    h.extend_from_slice(b"BM");
    h.extend_from_slice(&(size as u32).to_le_bytes());
    h.extend_from_slice(&[0; 4]);
    h.extend_from_slice(&(offset as u32).to_le_bytes());
    h.extend_from_slice(&40u32.to_le_bytes());
    h.extend_from_slice(&width.to_le_bytes());
    h.extend_from_slice(&height.to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes());
    h.extend_from_slice(&bits.to_le_bytes());
    h.extend_from_slice(&[0; 16]);
    h.extend_from_slice(&colors.to_le_bytes());
    h.extend_from_slice(&[0; 4]);
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 24-bit 1x1: 3 pixel bytes + 1 padding
    let mut bmp = header(1, 1, 24, 0, 4);
    bmp.extend_from_slice(&[0x00, 0x00, 0xFF, 0x00]);
    fs::write(format!("{dir}/bgr24_1x1.bmp"), bmp).unwrap();

    // 24-bit 2x2
    let mut bmp = header(2, 2, 24, 0, 8);
    bmp.extend_from_slice(&[0, 0, 255, 0, 255, 0, 0, 0]);
    bmp.extend_from_slice(&[255, 0, 0, 255, 255, 255, 0, 0]);
    fs::write(format!("{dir}/bgr24_2x2.bmp"), bmp).unwrap();

    // 8-bit 5x2 with a 2-color palette and an out-of-range index
    let mut bmp = header(5, 2, 8, 2, 8);
    bmp.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
    bmp.extend_from_slice(&[0, 1, 0, 1, 7, 0, 0, 0]);
    bmp.extend_from_slice(&[1, 1, 0, 0, 1, 0, 0, 0]);
    fs::write(format!("{dir}/pal8_5x2.bmp"), bmp).unwrap();

    println!("Seeds written to {dir}/");
}
