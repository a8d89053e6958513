//! Domain error types

use thiserror::Error;

/// Error when parsing a byte size string
#[derive(Debug, Clone, Error)]
#[error("Invalid size: \"{input}\". Expected a positive number with an optional unit B, KB, MB or GB (e.g., 4MiB, 512KB, 4194304)")]
pub struct ByteSizeParseError {
    pub input: String,
}

/// Error when a file extension is not an accepted upload format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported file format: \"{extension}\". Supported formats: flac, m4a, mp3, mp4, mpeg, mpga, oga, ogg, wav, webm")]
pub struct UnsupportedFormatError {
    pub extension: String,
}

/// Error when an audio buffer would violate its invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBufferError {
    #[error("Audio buffer needs at least one channel")]
    NoChannels,

    #[error("Sample rate must be greater than zero")]
    ZeroSampleRate,

    #[error("Channel {channel} has {actual} frames, expected {expected}")]
    UnevenChannels {
        channel: usize,
        expected: usize,
        actual: usize,
    },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
