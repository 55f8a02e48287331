use crate::{color, DomainError, Preset};

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::EmptyImage);
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(DomainError::PixelLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Display path: the four-stage chain over RGBA8 pixels. Pure in both
/// arguments; the source is never written to. The identity preset returns
/// the source bytes verbatim without entering the chain.
pub fn render_preview(source: &SourceImage, preset: &Preset) -> PreviewFrame {
    let mut pixels = source.pixels().to_vec();
    if !preset.is_identity {
        for pixel in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            let rgb = [
                pixel[0] as f32 / 255.0,
                pixel[1] as f32 / 255.0,
                pixel[2] as f32 / 255.0,
            ];
            let out = color::apply_chain(rgb, &preset.params);
            pixel[0] = (out[0] * 255.0).round() as u8;
            pixel[1] = (out[1] * 255.0).round() as u8;
            pixel[2] = (out[2] * 255.0).round() as u8;
        }
    }
    PreviewFrame {
        width: source.width(),
        height: source.height(),
        pixels,
    }
}
