#![no_main]
use libfuzzer_sys::fuzz_target;
use stickbmp::{Framebuffer, Limits, SliceSource};

fuzz_target!(|data: &[u8]| {
    // Header inspection and full decode must never panic.
    let _ = stickbmp::inspect(SliceSource::new(data));

    let limits = Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(1 << 16),
        ..Default::default()
    };
    let mut fb = Framebuffer::new(64, 64);
    let _ = stickbmp::DecodeRequest::new(SliceSource::new(data))
        .with_limits(&limits)
        .max_width(fb.width())
        .max_height(fb.height())
        .decode_into(&mut fb, enough::Unstoppable);

    // Placement near the end of the coordinate space must not overflow.
    let mut count = 0u32;
    let mut sink = |_x: u32, _y: u32, _c: stickbmp::Rgb565| count += 1;
    let _ = stickbmp::DecodeRequest::new(SliceSource::new(data))
        .with_limits(&limits)
        .at(u32::MAX - 1, u32::MAX - 1)
        .decode_into(&mut sink, enough::Unstoppable);
});
