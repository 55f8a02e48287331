use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NonFiniteAdjustParam(&'static str),
    EmptyCatalog,
    IdentityCount(usize),
    DuplicatePresetName(String),
    EmptyImage,
    PixelLengthMismatch { expected: usize, actual: usize },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteAdjustParam(name) => {
                write!(f, "adjustment parameter {name} must be finite")
            }
            Self::EmptyCatalog => write!(f, "preset catalog must not be empty"),
            Self::IdentityCount(count) => {
                write!(f, "preset catalog must have exactly one identity entry, got {count}")
            }
            Self::DuplicatePresetName(name) => {
                write!(f, "preset name {name} appears more than once")
            }
            Self::EmptyImage => write!(f, "image dimensions must be non-zero"),
            Self::PixelLengthMismatch { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
