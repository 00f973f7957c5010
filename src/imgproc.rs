pub mod dilate;
pub mod edge_mask;
pub mod invert;

use log::debug;

use crate::image::{ConstImage, Image, ImageBuffer};

pub const MASK_BACKGROUND: u8 = 0;
pub const MASK_EDGE: u8 = u8::MAX;

pub const DEFAULT_THRESHOLD: i32 = 20;
pub const DEFAULT_THICKNESS: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskOptions {
    pub threshold: i32,
    // dilation radius, each edge pixel becomes a (2*thickness+1)^2 square
    pub thickness: i32,
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions {
            threshold: DEFAULT_THRESHOLD,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

pub struct EdgeMaskImgproc {
    opts: MaskOptions,
}

impl EdgeMaskImgproc {
    pub fn new(opts: MaskOptions) -> Self {
        EdgeMaskImgproc { opts }
    }

    pub fn process(&self, input_gray_img: &impl ConstImage, output_mask: &mut impl Image) {
        assert_eq!(input_gray_img.size(), output_mask.size());
        let t_start = std::time::Instant::now();

        output_mask.fill(MASK_BACKGROUND);
        let n_edges = edge_mask::mark_edges(input_gray_img, self.opts.threshold, |x, y| {
            dilate::stamp_square(&mut *output_mask, (x, y).into(), self.opts.thickness, MASK_EDGE);
        });

        debug!(
            "Edge mask done: {} edge pixels, {} of {} marked, cost: {:?}",
            n_edges,
            output_mask.count_pixels(MASK_EDGE),
            output_mask.size().area(),
            t_start.elapsed()
        );
    }

    pub fn create_mask(&self, input_gray_img: &impl ConstImage) -> ImageBuffer {
        let mut mask = ImageBuffer::new(input_gray_img.width(), input_gray_img.height());
        self.process(input_gray_img, &mut mask);
        mask
    }
}
