use clap::Parser;
use log::{debug, warn};
use std::path::PathBuf;

use crate::imgproc::{MaskOptions, DEFAULT_THICKNESS, DEFAULT_THRESHOLD};
use crate::sink::OUTPUT_FILE_NAME;

// used when a threshold/thickness argument is given but cannot be parsed
pub const FALLBACK_THRESHOLD: i32 = 50;
pub const FALLBACK_THICKNESS: i32 = 1;

const INVERT_FLAGS: [&str; 2] = ["-invert", "--invert"];

// Positional slots are filled in order, and `-invert` takes a slot like any
// other argument: `photo.jpg 35 -invert` reads thickness from "-invert",
// falls back to 1 and still inverts.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Turn a photo into a chalkboard style edge mask",
    long_about = None,
    after_help = "Pass -invert anywhere after the input path to invert the mask."
)]
pub struct Args {
    /// Input image path, expanded as a glob pattern
    pub input_image_path: String,

    /// Edge threshold, only used together with thickness
    #[arg(allow_hyphen_values = true)]
    pub threshold: Option<String>,

    /// Line thickness (dilation radius in pixels)
    #[arg(allow_hyphen_values = true)]
    pub thickness: Option<String>,

    /// Ignored, except for -invert
    #[arg(allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub input_pattern: String,
    pub mask: MaskOptions,
    pub invert: bool,
    pub output: PathBuf,
}

fn is_invert_flag(arg: &str) -> bool {
    INVERT_FLAGS.contains(&arg)
}

fn parse_or(what: &str, value: &str, fallback: i32) -> i32 {
    value.trim().parse().unwrap_or_else(|_| {
        warn!("Invalid {} value {:?}. Using default ({}).", what, value, fallback);
        fallback
    })
}

impl Args {
    pub fn into_settings(self) -> Settings {
        let invert = self
            .threshold
            .iter()
            .chain(self.thickness.iter())
            .chain(self.extra.iter())
            .any(|arg| is_invert_flag(arg));

        let mask = match (&self.threshold, &self.thickness) {
            (Some(threshold), Some(thickness)) => MaskOptions {
                threshold: parse_or("threshold", threshold, FALLBACK_THRESHOLD),
                thickness: parse_or("thickness", thickness, FALLBACK_THICKNESS),
            },
            (Some(threshold), None) if !is_invert_flag(threshold) => {
                warn!(
                    "Threshold {:?} ignored without a thickness. Using defaults ({}, {}).",
                    threshold, DEFAULT_THRESHOLD, DEFAULT_THICKNESS
                );
                MaskOptions::default()
            }
            _ => MaskOptions::default(),
        };

        let ignored: Vec<&String> = self.extra.iter().filter(|arg| !is_invert_flag(arg)).collect();
        if !ignored.is_empty() {
            debug!("Ignoring extra arguments: {:?}", ignored);
        }

        Settings {
            input_pattern: self.input_image_path,
            mask,
            invert,
            output: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}
