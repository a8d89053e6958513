//! Audio decoding port interface

use thiserror::Error;

use crate::domain::audio::AudioBuffer;

/// Decoding errors
#[derive(Debug, Clone, Error)]
pub enum DecodeError {
    #[error("Unrecognized or unsupported audio container: {0}")]
    UnsupportedFormat(String),

    #[error("No decodable audio track found")]
    NoAudioTrack,

    #[error("Audio decoding failed: {0}")]
    DecodeFailed(String),

    #[error("Decoded stream contains no audio frames")]
    Empty,
}

/// Port for turning an encoded audio container into PCM samples
pub trait AudioDecoder: Send + Sync {
    /// Decode a complete in-memory audio file.
    ///
    /// # Arguments
    /// * `data` - The encoded file bytes
    /// * `extension_hint` - File extension used to speed up format probing
    ///
    /// # Returns
    /// The decoded planar buffer, or an error; never a partial buffer
    fn decode(&self, data: &[u8], extension_hint: Option<&str>)
        -> Result<AudioBuffer, DecodeError>;
}
