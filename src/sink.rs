use anyhow::Context;
use log::info;
use std::path::Path;

use crate::image::{convert, ConstImage};

pub const OUTPUT_FILE_NAME: &str = "output.png";

// Always PNG, whatever the extension of `path`
pub fn save_mask(path: &Path, mask: &impl ConstImage) -> anyhow::Result<()> {
    convert::to_luma8(mask)
        .save_with_format(path, ::image::ImageFormat::Png)
        .with_context(|| format!("Error saving mask to {}", path.display()))?;
    info!("Saved {}x{} mask to {}", mask.width(), mask.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageBuffer;

    #[test]
    fn test_save_png() {
        let dir = std::env::temp_dir().join(format!("chalkboard-sink-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mask.out");
        let mask = ImageBuffer::from_fn(5, 3, |x, _| if x == 2 { 255 } else { 0 });

        save_mask(&path, &mask).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(::image::guess_format(&bytes).unwrap(), ::image::ImageFormat::Png);
        let loaded = ::image::load_from_memory(&bytes).unwrap();
        assert_eq!(loaded.color(), ::image::ColorType::L8);
        assert_eq!(loaded.into_luma8().as_raw().as_slice(), mask.data());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_missing_dir() {
        let path = std::env::temp_dir()
            .join(format!("chalkboard-sink-missing-{}", std::process::id()))
            .join("mask.png");
        let mask = ImageBuffer::new(2, 2);
        let err = save_mask(&path, &mask).unwrap_err();
        assert!(err.to_string().contains("Error saving mask"));
    }
}
