use crate::image::Image;

pub fn invert<T: Image + ?Sized>(img: &mut T) {
    for y in 0..img.height() {
        for v in img.mut_row(y).iter_mut() {
            *v = u8::MAX - *v;
        }
    }
}
