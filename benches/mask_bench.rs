use chalkboard::image::ImageBuffer;
use chalkboard::imgproc::{invert::invert, EdgeMaskImgproc, MaskOptions};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn noise_image(width: i32, height: i32) -> ImageBuffer {
    ImageBuffer::from_fn(width, height, |x, y| ((x * 7919 + y * 104729) % 251) as u8)
}

fn mask_bench(c: &mut Criterion) {
    let img = noise_image(1000, 1000);
    c.bench_function("Edge mask, 1k*1k", |b| {
        let imgproc = EdgeMaskImgproc::new(MaskOptions::default());
        b.iter(|| black_box(imgproc.create_mask(&img)));
    });
    c.bench_function("Edge mask thickness 3, 1k*1k", |b| {
        let imgproc = EdgeMaskImgproc::new(MaskOptions { threshold: 20, thickness: 3 });
        b.iter(|| black_box(imgproc.create_mask(&img)));
    });
    c.bench_function("Invert, 1k*1k", |b| {
        let mut mask = noise_image(1000, 1000);
        b.iter(|| invert(black_box(&mut mask)));
    });
}

criterion_group!(benches, mask_bench);
criterion_main!(benches);
