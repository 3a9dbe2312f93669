#![allow(dead_code)]

use layer_shift::image::RgbImage;

/// Image whose pixels are all distinct (for up to 2^16 pixels): red and
/// green carry the row-major index, blue a checker bit.
pub fn unique_rgb(width: usize, height: usize) -> RgbImage {
    assert!(width * height <= 1 << 16, "too many pixels for unique colors");
    let mut img = RgbImage::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let i = row * width + col;
            let checker = if (row + col) & 1 == 0 { 32u8 } else { 220u8 };
            img.set(row, col, [(i & 0xff) as u8, (i >> 8) as u8, checker]);
        }
    }
    img
}

/// Row-major index encoded by [`unique_rgb`].
pub fn index_of(px: [u8; 3]) -> usize {
    px[0] as usize | (px[1] as usize) << 8
}

/// Small deterministic pseudo-random image (xorshift), colors may repeat.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> RgbImage {
    assert!(seed != 0, "xorshift seed must be non-zero");
    let mut state = seed;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let mut img = RgbImage::new(width, height);
    for row in 0..height {
        for col in 0..width {
            let v = next().to_le_bytes();
            img.set(row, col, [v[0], v[1], v[2]]);
        }
    }
    img
}
