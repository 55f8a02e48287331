use crate::AdjustParams;

pub const LUMA_REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

pub const WARM_FILL_RGB: [f32; 3] = [1.0, 0.5, 0.0];
pub const COOL_FILL_RGB: [f32; 3] = [0.0, 0.0, 1.0];
pub const WHITE_FILL_RGB: [f32; 3] = [1.0, 1.0, 1.0];

const NEUTRAL_EPSILON: f32 = 1e-7;

/// Additive brightness offset, `out = v + b`, clamped to [0, 1].
pub fn apply_brightness(rgb: [f32; 3], brightness: f32) -> [f32; 3] {
    if brightness.abs() < NEUTRAL_EPSILON {
        return rgb;
    }
    rgb.map(|channel| clamp01(channel + brightness))
}

/// Contrast scale around the mid-gray pivot, `out = (v - 0.5) * c + 0.5`.
pub fn apply_contrast(rgb: [f32; 3], contrast: f32) -> [f32; 3] {
    if (contrast - 1.0).abs() < NEUTRAL_EPSILON {
        return rgb;
    }
    rgb.map(|channel| clamp01((channel - 0.5) * contrast + 0.5))
}

/// Chroma scale around Rec. 709 luma; 0 collapses to grayscale.
pub fn apply_saturation(rgb: [f32; 3], saturation: f32) -> [f32; 3] {
    if (saturation - 1.0).abs() < NEUTRAL_EPSILON {
        return rgb;
    }
    let luma = luma_rec709(rgb);
    rgb.map(|channel| clamp01(luma + (channel - luma) * saturation))
}

/// Warmth tint: blend toward the orange fill for positive warmth, the blue
/// fill for negative, with `|warmth|` as the blend ratio.
pub fn apply_warmth(rgb: [f32; 3], warmth: f32) -> [f32; 3] {
    if warmth.abs() < NEUTRAL_EPSILON {
        return rgb;
    }
    let fill = if warmth >= 0.0 {
        WARM_FILL_RGB
    } else {
        COOL_FILL_RGB
    };
    let ratio = warmth.abs().min(1.0);
    [
        clamp01(rgb[0] + (fill[0] - rgb[0]) * ratio),
        clamp01(rgb[1] + (fill[1] - rgb[1]) * ratio),
        clamp01(rgb[2] + (fill[2] - rgb[2]) * ratio),
    ]
}

/// The display chain in its fixed order: brightness, contrast, saturation,
/// warmth. Callers short-circuit the identity preset before reaching this.
pub fn apply_chain(rgb: [f32; 3], params: &AdjustParams) -> [f32; 3] {
    let rgb = apply_brightness(rgb, params.brightness);
    let rgb = apply_contrast(rgb, params.contrast);
    let rgb = apply_saturation(rgb, params.saturation);
    apply_warmth(rgb, params.warmth)
}

pub fn luma_rec709(rgb: [f32; 3]) -> f32 {
    rgb[0] * LUMA_REC709[0] + rgb[1] * LUMA_REC709[1] + rgb[2] * LUMA_REC709[2]
}

pub(crate) fn clamp01_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(clamp01)
}

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_rgb_close(actual: [f32; 3], expected: [f32; 3]) {
        for channel in 0..3 {
            assert!(
                (actual[channel] - expected[channel]).abs() < EPSILON,
                "channel {channel}: got {}, expected {}",
                actual[channel],
                expected[channel]
            );
        }
    }

    #[test]
    fn neutral_values_return_input_unchanged() {
        let rgb = [0.25, 0.5, 0.75];
        assert_eq!(apply_brightness(rgb, 0.0), rgb);
        assert_eq!(apply_contrast(rgb, 1.0), rgb);
        assert_eq!(apply_saturation(rgb, 1.0), rgb);
        assert_eq!(apply_warmth(rgb, 0.0), rgb);
    }

    #[test]
    fn brightness_shifts_and_clamps() {
        assert_rgb_close(apply_brightness([0.2, 0.5, 0.95], 0.1), [0.3, 0.6, 1.0]);
        assert_rgb_close(apply_brightness([0.05, 0.5, 0.9], -0.1), [0.0, 0.4, 0.8]);
    }

    #[test]
    fn contrast_leaves_mid_gray_stable() {
        assert_rgb_close(apply_contrast([0.5, 0.5, 0.5], 1.4), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn contrast_spreads_values_away_from_pivot() {
        assert_rgb_close(apply_contrast([0.25, 0.5, 0.75], 2.0), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn saturation_zero_produces_luma_gray() {
        let rgb = [0.8, 0.4, 0.2];
        let luma = luma_rec709(rgb);
        assert_rgb_close(apply_saturation(rgb, 0.0), [luma, luma, luma]);
    }

    #[test]
    fn warmth_sign_selects_the_fill_color() {
        let gray = [0.5, 0.5, 0.5];
        assert_rgb_close(apply_warmth(gray, 0.4), [0.7, 0.5, 0.3]);
        assert_rgb_close(apply_warmth(gray, -0.4), [0.3, 0.3, 0.7]);
    }

    #[test]
    fn chain_applies_stages_in_order() {
        // Mid-gray under Pop Art values, staged by hand: 0.5 -> 0.65 after
        // brightness, 0.71 after contrast, unchanged by saturation on gray,
        // then blended 0.2 toward orange.
        let params = AdjustParams {
            brightness: 0.15,
            contrast: 1.4,
            saturation: 1.6,
            warmth: 0.2,
        };
        let out = apply_chain([0.5, 0.5, 0.5], &params);
        assert_rgb_close(out, [0.768, 0.668, 0.568]);
    }
}
