//! Upload acceptance rules of the transcription endpoint

use thiserror::Error;

use crate::domain::error::UnsupportedFormatError;
use crate::domain::size::ByteSize;

use super::format::UploadFormat;

/// Why a file cannot be uploaded as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error("File is too large ({size}). Files up to {limit} are accepted")]
    TooLarge { size: ByteSize, limit: ByteSize },
}

/// Extension allowlist plus a size ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    max_size: ByteSize,
}

impl UploadPolicy {
    pub fn new(max_size: ByteSize) -> Self {
        Self { max_size }
    }

    /// Check a file by name and size. The format check runs first.
    pub fn check(&self, file_name: &str, size: ByteSize) -> Result<UploadFormat, UploadRejection> {
        let format = UploadFormat::from_file_name(file_name)?;
        if size > self.max_size {
            return Err(UploadRejection::TooLarge {
                size,
                limit: self.max_size,
            });
        }
        Ok(format)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(ByteSize::default_max_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_supported_file() {
        let policy = UploadPolicy::default();
        let format = policy.check("memo.mp3", ByteSize::from_mib(1)).unwrap();
        assert_eq!(format, UploadFormat::Mp3);
    }

    #[test]
    fn accepts_file_exactly_at_limit() {
        let policy = UploadPolicy::default();
        assert!(policy.check("memo.wav", ByteSize::from_mib(4)).is_ok());
    }

    #[test]
    fn rejects_large_file() {
        let policy = UploadPolicy::default();
        let err = policy
            .check("memo.wav", ByteSize::from_bytes(4 * 1024 * 1024 + 1))
            .unwrap_err();
        assert!(matches!(err, UploadRejection::TooLarge { .. }));
    }

    #[test]
    fn rejects_unsupported_format_before_size() {
        let policy = UploadPolicy::new(ByteSize::from_bytes(1));
        let err = policy.check("memo.aiff", ByteSize::from_mib(100)).unwrap_err();
        assert!(matches!(err, UploadRejection::UnsupportedFormat(_)));
        assert!(err.to_string().contains("flac, m4a"));
    }
}
