use ::image as imagex; // external, for codecs

use super::*;

// Rec. 601 luma on 16 bit channels, weights sum to 1 << 16
const LUMA_R: u32 = 19595;
const LUMA_G: u32 = 38470;
const LUMA_B: u32 = 7471;

// Colors are premultiplied by alpha first, so transparent pixels become black
pub fn gray_from_rgba16(pixel: imagex::Rgba<u16>) -> u8 {
    let [r, g, b, a] = pixel.0.map(u32::from);
    let premul = |c: u32| c * a / 0xffff;
    ((LUMA_R * premul(r) + LUMA_G * premul(g) + LUMA_B * premul(b) + (1 << 15)) >> 24) as u8
}

pub fn from_dynamic(img: imagex::DynamicImage) -> ImageBuffer {
    match img {
        imagex::DynamicImage::ImageLuma8(gray) => from_luma8(gray),
        other => {
            let rgba = other.into_rgba16();
            ImageBuffer::from_fn(rgba.width() as i32, rgba.height() as i32, |x, y| {
                gray_from_rgba16(*rgba.get_pixel(x as u32, y as u32))
            })
        }
    }
}

pub fn from_luma8(img: imagex::GrayImage) -> ImageBuffer {
    let (width, height) = img.dimensions();
    ImageBuffer::from_vec(img.into_raw(), width as i32, height as i32)
}

pub fn to_luma8(image: &impl ConstImage) -> imagex::GrayImage {
    let mut out = imagex::GrayImage::new(image.width() as u32, image.height() as u32);
    for y in 0..image.height() {
        let row = image.row(y);
        for (x, &val) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, imagex::Luma([val]));
        }
    }
    out
}
