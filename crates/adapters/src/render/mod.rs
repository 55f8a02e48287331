use image::RgbImage;
use tintbox_application::{AdjustmentRenderer, ApplicationError};
use tintbox_domain::{
    apply_fill, export_fill_plan, render_preview, FillOp, Preset, PreviewFrame, SourceImage,
};

use crate::codec;

#[derive(Debug, Default)]
pub struct CpuAdjustmentRenderer;

impl AdjustmentRenderer for CpuAdjustmentRenderer {
    fn render(
        &self,
        source: &SourceImage,
        preset: &Preset,
    ) -> Result<PreviewFrame, ApplicationError> {
        Ok(render_preview(source, preset))
    }
}

/// Bake path seam for the export pipeline: source plus preset in, encoded
/// JPEG bytes out.
pub trait BakeRenderer: Send + Sync {
    fn bake(&self, source: &SourceImage, preset: &Preset) -> Result<Vec<u8>, ApplicationError>;
}

#[derive(Debug, Default)]
pub struct CpuExportRenderer;

impl BakeRenderer for CpuExportRenderer {
    fn bake(&self, source: &SourceImage, preset: &Preset) -> Result<Vec<u8>, ApplicationError> {
        let mut canvas = codec::rgb_canvas(source)?;
        let plan = export_fill_plan(preset);
        for op in &plan {
            fill_canvas(&mut canvas, op);
        }
        if !plan.is_empty() {
            log::debug!(
                "baked {} fill operations for preset {}",
                plan.len(),
                preset.name
            );
        }
        codec::encode_jpeg(&canvas)
    }
}

fn fill_canvas(canvas: &mut RgbImage, op: &FillOp) {
    for pixel in canvas.pixels_mut() {
        let rgb = [
            pixel.0[0] as f32 / 255.0,
            pixel.0[1] as f32 / 255.0,
            pixel.0[2] as f32 / 255.0,
        ];
        let out = apply_fill(rgb, op);
        pixel.0 = [
            (out[0] * 255.0).round() as u8,
            (out[1] * 255.0).round() as u8,
            (out[2] * 255.0).round() as u8,
        ];
    }
}
