use crate::{AdjustParams, DomainError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub params: AdjustParams,
    pub is_identity: bool,
}

const fn styled(
    name: &'static str,
    brightness: f32,
    contrast: f32,
    saturation: f32,
    warmth: f32,
) -> Preset {
    Preset {
        name,
        params: AdjustParams {
            brightness,
            contrast,
            saturation,
            warmth,
        },
        is_identity: false,
    }
}

const BUILT_IN: [Preset; 9] = [
    Preset {
        name: "Normal",
        params: AdjustParams::IDENTITY,
        is_identity: true,
    },
    styled("Sunset Glow", 0.1, 1.2, 1.3, 0.4),
    styled("Ocean Blue", 0.0, 1.3, 1.1, -0.3),
    styled("Pop Art", 0.15, 1.4, 1.6, 0.2),
    styled("Candy Pink", 0.1, 1.1, 1.5, 0.5),
    styled("Electric", 0.0, 1.5, 1.8, 0.0),
    styled("Tropical", 0.2, 1.3, 1.4, 0.3),
    styled("Aqua Dream", 0.05, 1.2, 1.2, -0.2),
    styled("Golden Hour", 0.2, 1.2, 1.3, 0.5),
];

pub fn built_in_presets() -> &'static [Preset] {
    &BUILT_IN
}

pub fn validate_catalog(presets: &[Preset]) -> Result<(), DomainError> {
    if presets.is_empty() {
        return Err(DomainError::EmptyCatalog);
    }

    let identity_count = presets.iter().filter(|preset| preset.is_identity).count();
    if identity_count != 1 {
        return Err(DomainError::IdentityCount(identity_count));
    }

    for (position, preset) in presets.iter().enumerate() {
        preset.params.validate()?;
        let duplicated = presets[..position]
            .iter()
            .any(|earlier| earlier.name == preset.name);
        if duplicated {
            return Err(DomainError::DuplicatePresetName(preset.name.to_string()));
        }
    }

    Ok(())
}
