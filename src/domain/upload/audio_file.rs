//! Audio file value object

use crate::domain::size::ByteSize;

use super::format::UploadFormat;

/// Suffix appended to the base name of optimized files
pub const OPTIMIZED_SUFFIX: &str = "_optimized";

/// Value object representing a named audio file held in memory.
/// The bytes are opaque; nothing here decodes them.
#[derive(Debug, Clone)]
pub struct AudioFile {
    name: String,
    data: Vec<u8>,
}

impl AudioFile {
    /// Create an AudioFile from a name and raw bytes
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// File name (no directory part)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Last extension of the file name, if any
    pub fn extension(&self) -> Option<&str> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
    }

    /// Upload format implied by the extension, if accepted
    pub fn format(&self) -> Option<UploadFormat> {
        UploadFormat::from_file_name(&self.name).ok()
    }

    /// MIME type implied by the extension, falling back to a generic type
    pub fn mime_type(&self) -> &'static str {
        self.format()
            .map(|f| f.mime_type())
            .unwrap_or("application/octet-stream")
    }

    /// Get the size
    pub fn size(&self) -> ByteSize {
        ByteSize::from(self.data.len())
    }
}

/// Strip the final `.ext` from a file name. The extension may not contain
/// `.` or `/`; a name without one is returned as-is.
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..dot]
            }
        }
        None => file_name,
    }
}

/// Name of the optimized WAV derived from the original file name
pub fn optimized_file_name(original: &str) -> String {
    format!(
        "{}{}.{}",
        base_name(original),
        OPTIMIZED_SUFFIX,
        UploadFormat::Wav.extension()
    )
}
