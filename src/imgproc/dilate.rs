use crate::image::{Image, Point};

/// Set every pixel within `radius` of `center` (chebyshev distance) to `val`,
/// clipped to the image. A negative radius leaves the image untouched.
pub fn stamp_square<T: Image + ?Sized>(img: &mut T, center: Point, radius: i32, val: u8) {
    if radius < 0 {
        return;
    }
    let x_begin = (center.x - radius).max(0);
    let x_end = (center.x + radius + 1).min(img.width());
    let y_begin = (center.y - radius).max(0);
    let y_end = (center.y + radius + 1).min(img.height());
    if x_begin >= x_end {
        return;
    }
    for y in y_begin..y_end {
        img.mut_row(y)[x_begin as usize..x_end as usize].fill(val);
    }
}
