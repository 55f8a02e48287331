use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage, RgbaImage};
use tintbox_application::ApplicationError;
use tintbox_domain::SourceImage;

pub const EXPORT_JPEG_QUALITY: u8 = 100;

pub fn decode_source(bytes: &[u8]) -> Result<SourceImage, ApplicationError> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|error| ApplicationError::Decode(error.to_string()))?
        .decode()
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;
    source_from_rgba(decoded.to_rgba8())
}

/// Proportional downscale so the longer edge fits `max_edge`. Images already
/// inside the bound come back as a plain copy.
pub fn downscale_to_fit(
    source: &SourceImage,
    max_edge: u32,
) -> Result<SourceImage, ApplicationError> {
    if source.width() <= max_edge && source.height() <= max_edge {
        return Ok(source.clone());
    }
    let buffer = rgba_from_source(source)?;
    let longer = source.width().max(source.height()) as f32;
    let scale = max_edge as f32 / longer;
    let width = ((source.width() as f32 * scale).round() as u32).max(1);
    let height = ((source.height() as f32 * scale).round() as u32).max(1);
    let resized = imageops::resize(&buffer, width, height, FilterType::Triangle);
    source_from_rgba(resized)
}

/// The export canvas: the source drawn unchanged, alpha dropped.
pub fn rgb_canvas(source: &SourceImage) -> Result<RgbImage, ApplicationError> {
    let mut rgb = Vec::with_capacity(source.pixels().len() / 4 * 3);
    for pixel in source.pixels().chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    RgbImage::from_raw(source.width(), source.height(), rgb).ok_or_else(|| {
        ApplicationError::Encode("canvas dimensions do not match the pixel buffer".to_string())
    })
}

pub fn encode_jpeg(canvas: &RgbImage) -> Result<Vec<u8>, ApplicationError> {
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, EXPORT_JPEG_QUALITY);
    canvas
        .write_with_encoder(encoder)
        .map_err(|error| ApplicationError::Encode(error.to_string()))?;
    Ok(bytes)
}

fn rgba_from_source(source: &SourceImage) -> Result<RgbaImage, ApplicationError> {
    RgbaImage::from_raw(source.width(), source.height(), source.pixels().to_vec()).ok_or_else(
        || ApplicationError::Decode("pixel buffer does not match its dimensions".to_string()),
    )
}

fn source_from_rgba(buffer: RgbaImage) -> Result<SourceImage, ApplicationError> {
    let width = buffer.width();
    let height = buffer.height();
    SourceImage::new(width, height, buffer.into_raw()).map_err(ApplicationError::from)
}
