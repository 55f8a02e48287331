use crate::color::{clamp01_rgb, COOL_FILL_RGB, WARM_FILL_RGB, WHITE_FILL_RGB};
use crate::Preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBlend {
    SourceOver,
    Multiply,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOp {
    pub rgb: [f32; 3],
    pub alpha: f32,
    pub blend: FillBlend,
}

/// The compositing operations the bake applies on top of the base draw.
/// Identity presets bake nothing. Every other preset composites the warmth
/// fill (orange for non-negative warmth, blue otherwise) source-over at
/// `|warmth|`, then a white multiplicative fill. Only warmth is baked; the
/// brightness, contrast and saturation stages stay preview-only.
pub fn export_fill_plan(preset: &Preset) -> Vec<FillOp> {
    if preset.is_identity {
        return Vec::new();
    }

    let warmth = preset.params.warmth;
    let rgb = if warmth >= 0.0 {
        WARM_FILL_RGB
    } else {
        COOL_FILL_RGB
    };

    vec![
        FillOp {
            rgb,
            alpha: warmth.abs().min(1.0),
            blend: FillBlend::SourceOver,
        },
        FillOp {
            rgb: WHITE_FILL_RGB,
            alpha: 1.0,
            blend: FillBlend::Multiply,
        },
    ]
}

/// One fill op over one opaque pixel.
///
/// ```text
/// source-over: out = dst + (fill - dst) * alpha
/// multiply:    out = dst * (1 + (fill - 1) * alpha)
/// ```
pub fn apply_fill(rgb: [f32; 3], op: &FillOp) -> [f32; 3] {
    let alpha = op.alpha.clamp(0.0, 1.0);
    let out = match op.blend {
        FillBlend::SourceOver => [
            rgb[0] + (op.rgb[0] - rgb[0]) * alpha,
            rgb[1] + (op.rgb[1] - rgb[1]) * alpha,
            rgb[2] + (op.rgb[2] - rgb[2]) * alpha,
        ],
        FillBlend::Multiply => [
            rgb[0] * (1.0 + (op.rgb[0] - 1.0) * alpha),
            rgb[1] * (1.0 + (op.rgb[1] - 1.0) * alpha),
            rgb[2] * (1.0 + (op.rgb[2] - 1.0) * alpha),
        ],
    };
    clamp01_rgb(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{built_in_presets, AdjustParams};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn identity_preset_bakes_nothing() {
        assert!(export_fill_plan(&built_in_presets()[0]).is_empty());
    }

    #[test]
    fn warm_preset_plans_orange_then_white_multiply() {
        let preset = Preset {
            name: "Warm",
            params: AdjustParams {
                warmth: 0.4,
                ..AdjustParams::IDENTITY
            },
            is_identity: false,
        };
        let plan = export_fill_plan(&preset);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].rgb, WARM_FILL_RGB);
        assert!((plan[0].alpha - 0.4).abs() < EPSILON);
        assert_eq!(plan[0].blend, FillBlend::SourceOver);
        assert_eq!(plan[1].rgb, WHITE_FILL_RGB);
        assert_eq!(plan[1].blend, FillBlend::Multiply);
    }

    #[test]
    fn cool_preset_plans_a_blue_fill() {
        let preset = Preset {
            name: "Cool",
            params: AdjustParams {
                warmth: -0.3,
                ..AdjustParams::IDENTITY
            },
            is_identity: false,
        };
        let plan = export_fill_plan(&preset);
        assert_eq!(plan[0].rgb, COOL_FILL_RGB);
        assert!((plan[0].alpha - 0.3).abs() < EPSILON);
    }

    #[test]
    fn pop_art_bakes_exactly_two_fills() {
        let plan = export_fill_plan(&built_in_presets()[3]);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].rgb, WARM_FILL_RGB);
        assert!((plan[0].alpha - 0.2).abs() < EPSILON);
        assert_eq!(plan[1].blend, FillBlend::Multiply);
    }

    #[test]
    fn every_non_identity_preset_bakes_two_fills() {
        for preset in built_in_presets().iter().skip(1) {
            assert_eq!(export_fill_plan(preset).len(), 2, "preset {}", preset.name);
        }
    }

    #[test]
    fn source_over_blends_toward_the_fill() {
        let op = FillOp {
            rgb: WARM_FILL_RGB,
            alpha: 0.4,
            blend: FillBlend::SourceOver,
        };
        let out = apply_fill([0.5, 0.5, 0.5], &op);
        assert!((out[0] - 0.7).abs() < EPSILON);
        assert!((out[1] - 0.5).abs() < EPSILON);
        assert!((out[2] - 0.3).abs() < EPSILON);
    }

    #[test]
    fn white_multiply_preserves_the_input() {
        let op = FillOp {
            rgb: WHITE_FILL_RGB,
            alpha: 1.0,
            blend: FillBlend::Multiply,
        };
        let rgb = [0.12, 0.56, 0.91];
        let out = apply_fill(rgb, &op);
        for channel in 0..3 {
            assert!((out[channel] - rgb[channel]).abs() < EPSILON);
        }
    }

    #[test]
    fn multiply_by_black_darkens_fully() {
        let op = FillOp {
            rgb: [0.0, 0.0, 0.0],
            alpha: 1.0,
            blend: FillBlend::Multiply,
        };
        assert_eq!(apply_fill([0.8, 0.8, 0.8], &op), [0.0, 0.0, 0.0]);
    }
}
