use super::{IconEncoder, OutputFormat};
use anyhow::{Context, Result};
use icon_core::{rasterize, Drawing};
use image::codecs::png::{CompressionType, FilterType, PngEncoder as PngWriter};
use image::{ExtendedColorType, ImageEncoder};

/// Rasterizes the drawing and writes an opaque RGB PNG
pub struct PngEncoder;

impl IconEncoder for PngEncoder {
    fn format(&self) -> OutputFormat {
        OutputFormat::Png
    }

    fn encode(&self, drawing: &Drawing, _stem: &str) -> Result<Vec<u8>> {
        let img = rasterize(drawing);
        let mut bytes = Vec::new();
        PngWriter::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive)
            .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
            .context("Failed to encode PNG")?;
        Ok(bytes)
    }
}
