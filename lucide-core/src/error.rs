//! Error types shared by every lucide crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Unknown icon name: {0}")]
    UnknownIcon(String),

    #[error("Font asset not found at {}", path.display())]
    AssetMissing { path: PathBuf },

    #[error("Font asset could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font asset is empty")]
    EmptyAsset,

    #[error("Font registration rejected: {reason}")]
    RegistrationRejected { reason: String },

    #[error("Icon font '{family}' is not registered")]
    NotRegistered { family: String },

    #[error("Icon font '{family}' unavailable at size {size} after registration")]
    FontUnavailable { family: String, size: f32 },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IconError::AssetMissing {
            path: PathBuf::from("/tmp/lucide.ttf"),
        };
        assert_eq!(err.to_string(), "Font asset not found at /tmp/lucide.ttf");

        let err = IconError::FontUnavailable {
            family: "lucide".into(),
            size: 24.0,
        };
        assert!(err.to_string().contains("'lucide'"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: IconError = io.into();
        assert!(matches!(err, IconError::Io(_)));
    }
}
