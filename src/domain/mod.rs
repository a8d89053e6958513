//! Domain layer - Core business logic
//!
//! Contains value objects, the audio pipeline stages, and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod config;
pub mod error;
pub mod size;
pub mod upload;

// Re-export common types
pub use audio::{AudioBuffer, AudioInfo, RatePlan};
pub use config::AppConfig;
pub use error::*;
pub use size::ByteSize;
pub use upload::{AudioFile, UploadFormat, UploadPolicy, UploadRejection};
