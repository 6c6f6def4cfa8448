use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the outline pipeline.
///
/// Every variant except `FileSystem` is recovered per file by the batch
/// driver: the file is reported, skipped, and the batch continues.
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported channel count {channels} in {path:?}")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("Could not write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parameter: {name} {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl OutlineError {
    /// Whether the batch driver may skip the file and carry on. Only the
    /// per-file failures qualify.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::UnsupportedChannels { .. } | Self::Write { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OutlineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_per_file_errors_are_recoverable() {
        let unsupported = OutlineError::UnsupportedChannels {
            path: PathBuf::from("a.png"),
            channels: 2,
        };
        assert!(unsupported.is_recoverable());

        let missing = OutlineError::FileSystem {
            path: PathBuf::from("nowhere"),
            operation: "directory scan".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!missing.is_recoverable());

        let bad_params = OutlineError::InvalidParameter {
            name: "blur_kernel_size".to_string(),
            reason: "must be odd".to_string(),
        };
        assert!(!bad_params.is_recoverable());
    }

    #[test]
    fn test_display_names_the_file() {
        let err = OutlineError::UnsupportedChannels {
            path: PathBuf::from("gray-alpha.png"),
            channels: 2,
        };
        let message = err.to_string();
        assert!(message.contains("gray-alpha.png"));
        assert!(message.contains('2'));
    }
}
