use base64::{engine::general_purpose::STANDARD, Engine};
use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbaImage};

use crate::error::{LipikaError, Result};

/// Fixed integer upscale applied before recognition. Compensates for
/// low-resolution phone-camera captures.
const SCALE_FACTOR: u32 = 2;

/// Channel-average cutoff separating black from white.
const LUMA_THRESHOLD: u16 = 128;

/// A binarized, upscaled bitmap ready for the recognition engine.
#[derive(Debug, Clone)]
pub struct PreprocessedBitmap {
    png: Vec<u8>,
    width: u32,
    height: u32,
}

impl PreprocessedBitmap {
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Shareable `data:` URL encoding of the PNG buffer.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Preprocess image bytes for OCR optimization.
///
/// Applies the following transformations:
/// 1. Decodes the source image (format guessed from content)
/// 2. Upscales to exactly 2x width and height with nearest-neighbor
///    resampling, keeping stroke edges sharp
/// 3. Forces every pixel to pure black or pure white based on a fixed
///    channel-average threshold of 128, leaving alpha untouched
/// 4. Re-encodes the result as PNG
pub fn preprocess_image(bytes: &[u8]) -> Result<PreprocessedBitmap> {
    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LipikaError::Preprocess(format!("Failed to read image: {e}")))?;

    let img = reader
        .decode()
        .map_err(|e| LipikaError::Preprocess(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();
    let scaled = img.resize_exact(
        width * SCALE_FACTOR,
        height * SCALE_FACTOR,
        FilterType::Nearest,
    );

    let mut rgba = scaled.to_rgba8();
    binarize(&mut rgba);

    let (out_width, out_height) = rgba.dimensions();
    let mut png = Vec::new();
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| LipikaError::Preprocess(format!("Failed to encode image: {e}")))?;

    Ok(PreprocessedBitmap {
        png,
        width: out_width,
        height: out_height,
    })
}

/// Force every pixel to pure black or white based on the unweighted average
/// of its color channels. Alpha is left unchanged.
fn binarize(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let avg = (pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16) / 3;
        let value = if avg > LUMA_THRESHOLD { 255 } else { 0 };
        pixel[0] = value;
        pixel[1] = value;
        pixel[2] = value;
    }
}
