use clap::Parser;
use log::{error, info};

use chalkboard::cli::{Args, Settings};
use chalkboard::imgproc::{invert::invert, EdgeMaskImgproc};
use chalkboard::sink;
use chalkboard::source::FileSource;

fn run(settings: &Settings) -> anyhow::Result<()> {
    let source = FileSource::open(&settings.input_pattern)?;
    let gray_img = source.get_frame()?;

    info!(
        "Creating mask of {} with threshold {}, thickness {}, invert: {}",
        source.path().display(),
        settings.mask.threshold,
        settings.mask.thickness,
        settings.invert
    );
    let mut mask = EdgeMaskImgproc::new(settings.mask).create_mask(&gray_img);
    if settings.invert {
        invert(&mut mask);
    }

    sink::save_mask(&settings.output, &mask)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    println!("CHALKBOARD: chalkboard edge mask generator");

    let settings = Args::parse().into_settings();
    if let Err(err) = run(&settings) {
        error!("{:#}", err);
        std::process::exit(1);
    }

    println!("Mask created and saved successfully.");
}
