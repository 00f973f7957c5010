use chalkboard::image::ImageBuffer;

pub fn uniform_u8(width: i32, height: i32, value: u8) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |_, _| value)
}

/// Dark left half, bright right half starting at column `step_x`.
pub fn vertical_step_u8(width: i32, height: i32, step_x: i32, dark: u8, bright: u8) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, _| if x < step_x { dark } else { bright })
}

/// Deterministic pseudo-random texture, no two neighbors alike.
pub fn noise_u8(width: i32, height: i32, seed: u32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        let mut v = (x as u32)
            .wrapping_mul(374761393)
            .wrapping_add((y as u32).wrapping_mul(668265263))
            .wrapping_add(seed.wrapping_mul(2246822519));
        v = (v ^ (v >> 13)).wrapping_mul(1274126177);
        (v >> 24) as u8
    })
}

pub fn checkerboard_u8(width: i32, height: i32, cell: i32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            0
        } else {
            255
        }
    })
}
