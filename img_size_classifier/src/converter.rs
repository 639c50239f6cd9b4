//! Reference JPEG conversion.
//!
//! 所有源图像统一转码为同一质量的 JPEG，以 JPEG 体积作为比较基准。

use crate::error::ConversionFailure;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Given a source image, produce a JPEG at `target`.
///
/// Implementations must either write a complete file or return an error.
/// Callers handle placement, so `target` may be a temporary path.
pub trait JpegConverter {
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConversionFailure>;
}

impl<T: JpegConverter + ?Sized> JpegConverter for &T {
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConversionFailure> {
        (**self).convert(source, target)
    }
}

/// Converter backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageCrateConverter {
    quality: u8,
}

impl ImageCrateConverter {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for ImageCrateConverter {
    fn default() -> Self {
        Self::new(75)
    }
}

impl JpegConverter for ImageCrateConverter {
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConversionFailure> {
        let img = image::open(source)?;
        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

        let mut writer = BufWriter::new(File::create(target)?);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        rgb.write_with_encoder(encoder)?;
        writer.flush()?;

        debug!(
            source = %source.display(),
            width = rgb.width(),
            height = rgb.height(),
            quality = self.quality,
            "Encoded reference JPEG"
        );
        Ok(())
    }
}
