//! Upload domain module

mod audio_file;
mod format;
mod policy;

pub use audio_file::{base_name, optimized_file_name, AudioFile, OPTIMIZED_SUFFIX};
pub use format::{UploadFormat, ALL_FORMATS};
pub use policy::{UploadPolicy, UploadRejection};
