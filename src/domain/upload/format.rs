//! Upload formats accepted by the speech-to-text API

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnsupportedFormatError;

/// All formats the transcription endpoint accepts
pub const ALL_FORMATS: &[UploadFormat] = &[
    UploadFormat::Flac,
    UploadFormat::M4a,
    UploadFormat::Mp3,
    UploadFormat::Mp4,
    UploadFormat::Mpeg,
    UploadFormat::Mpga,
    UploadFormat::Oga,
    UploadFormat::Ogg,
    UploadFormat::Wav,
    UploadFormat::Webm,
];

/// Audio container accepted for upload, identified by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadFormat {
    Flac,
    M4a,
    Mp3,
    Mp4,
    Mpeg,
    Mpga,
    Oga,
    Ogg,
    Wav,
    Webm,
}

impl UploadFormat {
    /// Get the MIME type string
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::M4a => "audio/mp4",
            Self::Mp3 | Self::Mpeg | Self::Mpga => "audio/mpeg",
            Self::Mp4 => "audio/mp4",
            Self::Oga | Self::Ogg => "audio/ogg",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::M4a => "m4a",
            Self::Mp3 => "mp3",
            Self::Mp4 => "mp4",
            Self::Mpeg => "mpeg",
            Self::Mpga => "mpga",
            Self::Oga => "oga",
            Self::Ogg => "ogg",
            Self::Wav => "wav",
            Self::Webm => "webm",
        }
    }

    /// Detect the format from a file name's last extension
    pub fn from_file_name(name: &str) -> Result<Self, UnsupportedFormatError> {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        extension.parse()
    }

    /// Comma-separated list of accepted extensions
    pub fn supported_list() -> String {
        ALL_FORMATS
            .iter()
            .map(|f| f.extension())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for UploadFormat {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_FORMATS
            .iter()
            .copied()
            .find(|f| f.extension() == lower)
            .ok_or_else(|| UnsupportedFormatError {
                extension: s.to_string(),
            })
    }
}

impl fmt::Display for UploadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_extensions() {
        for format in ALL_FORMATS {
            assert_eq!(format.extension().parse::<UploadFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("M4A".parse::<UploadFormat>().unwrap(), UploadFormat::M4a);
        assert_eq!("Wav".parse::<UploadFormat>().unwrap(), UploadFormat::Wav);
    }

    #[test]
    fn parse_unsupported() {
        assert!("aiff".parse::<UploadFormat>().is_err());
        assert!("".parse::<UploadFormat>().is_err());
    }

    #[test]
    fn from_file_name_uses_last_extension() {
        assert_eq!(
            UploadFormat::from_file_name("meeting.notes.mp3").unwrap(),
            UploadFormat::Mp3
        );
        assert_eq!(
            UploadFormat::from_file_name("Voice Memo.M4A").unwrap(),
            UploadFormat::M4a
        );
        assert!(UploadFormat::from_file_name("no_extension").is_err());
        assert!(UploadFormat::from_file_name("clip.aac").is_err());
    }

    #[test]
    fn mime_types() {
        assert_eq!(UploadFormat::Wav.mime_type(), "audio/wav");
        assert_eq!(UploadFormat::M4a.mime_type(), "audio/mp4");
        assert_eq!(UploadFormat::Mp3.mime_type(), "audio/mpeg");
    }

    #[test]
    fn supported_list_is_complete() {
        let list = UploadFormat::supported_list();
        assert_eq!(list, "flac, m4a, mp3, mp4, mpeg, mpga, oga, ogg, wav, webm");
    }

    #[test]
    fn all_formats_constant() {
        assert_eq!(ALL_FORMATS.len(), 10);
    }
}
