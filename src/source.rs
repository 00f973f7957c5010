use anyhow::Context;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::image::{convert, ConstImage, ImageBuffer};

// Expand `pattern` as a glob and return the first match, so that paths with
// spaces or wildcards behave the same on every shell
pub fn resolve_input(pattern: &str) -> anyhow::Result<PathBuf> {
    let mut paths = glob::glob(pattern)
        .with_context(|| format!("Error processing file path: {}", pattern))?;
    match paths.next() {
        Some(path) => Ok(path.with_context(|| format!("Error processing file path: {}", pattern))?),
        None => anyhow::bail!("No image files found matching {}", pattern),
    }
}

pub fn read_gray(path: &Path) -> anyhow::Result<ImageBuffer> {
    let img = ::image::io::Reader::open(path)
        .with_context(|| format!("Cannot open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Cannot read {}", path.display()))?
        .decode()
        .with_context(|| format!("Cannot decode {}", path.display()))?;
    debug!("Decoded {} as {:?}", path.display(), img.color());
    Ok(convert::from_dynamic(img))
}

// Source of the single grayscale frame the pipeline works on
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn open(pattern: &str) -> anyhow::Result<FileSource> {
        let path = resolve_input(pattern)?;
        info!("Using input image {}", path.display());
        Ok(FileSource { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_frame(&self) -> anyhow::Result<ImageBuffer> {
        let frame = read_gray(&self.path)?;
        info!("Loaded {}x{} image", frame.width(), frame.height());
        Ok(frame)
    }
}
