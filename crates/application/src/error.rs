use std::fmt::{Display, Formatter};

use tintbox_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    Decode(String),
    Encode(String),
    PermissionDenied(String),
    Storage(String),
    Io(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
            Self::PermissionDenied(msg) => write!(f, "write permission denied: {msg}"),
            Self::Storage(msg) => write!(f, "storage error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
