//! Gradient edge detection for the chalkboard mask.
//!
//! Each interior pixel gets a central-difference gradient
//! `sqrt((I[x+1] - I[x-1])^2 + (I[y+1] - I[y-1])^2)`, truncated to an integer.
//! The pixel counts as an edge when the gradient exceeds `threshold`, or
//! exceeds the raw intensity of any of its 8 neighbors plus `threshold`.
//! The 1-pixel border is never evaluated.
//!
//! The gradient is kept as `i32` over its full range (up to 360 for a
//! 0/255 corner) and is not narrowed to a byte, so values above 255 never
//! wrap around before the comparison.
use crate::image::ConstImage;

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn gradient_magnitude<T: ConstImage + ?Sized>(img: &T, x: i32, y: i32) -> i32 {
    let dx = img.pixel(x + 1, y) as i32 - img.pixel(x - 1, y) as i32;
    let dy = img.pixel(x, y + 1) as i32 - img.pixel(x, y - 1) as i32;
    ((dx * dx + dy * dy) as f64).sqrt() as i32
}

pub fn is_edge<T: ConstImage + ?Sized>(img: &T, x: i32, y: i32, threshold: i32) -> bool {
    let gradient = gradient_magnitude(img, x, y);
    gradient > threshold
        || NEIGHBORS
            .iter()
            .any(|&(nx, ny)| gradient > img.pixel(x + nx, y + ny) as i32 + threshold)
}

/// Calls `on_edge` for every interior edge pixel in row-major order and returns
/// how many were found. Images smaller than 3x3 have no interior.
pub fn mark_edges<T, F>(img: &T, threshold: i32, mut on_edge: F) -> usize
where
    T: ConstImage + ?Sized,
    F: FnMut(i32, i32),
{
    let mut n_edges = 0;
    for y in 1..(img.height() - 1) {
        for x in 1..(img.width() - 1) {
            if is_edge(img, x, y, threshold) {
                on_edge(x, y);
                n_edges += 1;
            }
        }
    }
    n_edges
}
