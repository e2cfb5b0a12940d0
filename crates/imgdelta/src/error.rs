use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    #[error("dimension mismatch: {left_w}x{left_h} vs {right_w}x{right_h}")]
    SizeMismatch {
        left_w: u32,
        left_h: u32,
        right_w: u32,
        right_h: u32,
    },

    #[error("input image {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unusable font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },
}

impl DiffError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SizeMismatch { .. } => 2,
            Self::Missing { .. } | Self::Decode { .. } => 1,
            Self::Write { .. } | Self::Font { .. } => 1,
        }
    }
}
