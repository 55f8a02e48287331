use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdjustParams {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub warmth: f32,
}

impl AdjustParams {
    pub const IDENTITY: Self = Self {
        brightness: 0.0,
        contrast: 1.0,
        saturation: 1.0,
        warmth: 0.0,
    };

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.brightness.is_finite() {
            return Err(DomainError::NonFiniteAdjustParam("brightness"));
        }
        if !self.contrast.is_finite() {
            return Err(DomainError::NonFiniteAdjustParam("contrast"));
        }
        if !self.saturation.is_finite() {
            return Err(DomainError::NonFiniteAdjustParam("saturation"));
        }
        if !self.warmth.is_finite() {
            return Err(DomainError::NonFiniteAdjustParam("warmth"));
        }
        Ok(())
    }
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_neutral() {
        let params = AdjustParams::default();
        assert_eq!(params.brightness, 0.0);
        assert_eq!(params.contrast, 1.0);
        assert_eq!(params.saturation, 1.0);
        assert_eq!(params.warmth, 0.0);
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let params = AdjustParams {
            warmth: f32::NAN,
            ..AdjustParams::IDENTITY
        };
        assert!(matches!(
            params.validate(),
            Err(DomainError::NonFiniteAdjustParam("warmth"))
        ));
    }
}
