//! Symphonia-backed audio decoder
//!
//! Decodes any container/codec pair Symphonia supports (WAV, FLAC, MP3,
//! AAC/M4A, Ogg Vorbis, ...) from memory into planar f32 samples.

use std::io::{Cursor, ErrorKind};

use log::{debug, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioDecoder, DecodeError};
use crate::domain::audio::AudioBuffer;

/// Decoder adapter using Symphonia's default format and codec registries
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Split interleaved samples onto the per-channel planes
    fn deinterleave(planes: &mut [Vec<f32>], samples: &[f32]) {
        let channels = planes.len();
        for frame in samples.chunks_exact(channels) {
            for (plane, &sample) in planes.iter_mut().zip(frame) {
                plane.push(sample);
            }
        }
    }
}

impl AudioDecoder for SymphoniaDecoder {
    fn decode(
        &self,
        data: &[u8],
        extension_hint: Option<&str>,
    ) -> Result<AudioBuffer, DecodeError> {
        let source = Cursor::new(data.to_vec());
        let mss = MediaSourceStream::new(Box::new(source), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = extension_hint {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;

        let mut format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(DecodeError::NoAudioTrack)?;

        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| DecodeError::UnsupportedFormat(e.to_string()))?;

        let mut planes: Vec<Vec<f32>> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(SymphoniaError::ResetRequired) => {
                    debug!("stream reset requested, stopping at current position");
                    break;
                }
                Err(e) => return Err(DecodeError::DecodeFailed(e.to_string())),
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    warn!("skipping corrupt packet: {}", e);
                    continue;
                }
                Err(e) => return Err(DecodeError::DecodeFailed(e.to_string())),
            };

            let spec = *decoded.spec();
            let channels = spec.channels.count();

            if planes.is_empty() {
                planes = vec![Vec::new(); channels];
                sample_rate = spec.rate;
            } else if planes.len() != channels {
                return Err(DecodeError::DecodeFailed(format!(
                    "channel count changed mid-stream from {} to {}",
                    planes.len(),
                    channels
                )));
            }

            let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            Self::deinterleave(&mut planes, sample_buf.samples());
        }

        if planes.is_empty() || planes[0].is_empty() {
            return Err(DecodeError::Empty);
        }

        AudioBuffer::new(planes, sample_rate).map_err(|e| DecodeError::DecodeFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::encode_wav;

    fn wav_bytes(channels: Vec<Vec<f32>>, rate: u32) -> Vec<u8> {
        encode_wav(&AudioBuffer::new(channels, rate).unwrap()).unwrap()
    }

    #[test]
    fn decodes_mono_wav() {
        let bytes = wav_bytes(vec![vec![0.0, 0.5, -0.5, 1.0]], 8000);
        let buffer = SymphoniaDecoder::new().decode(&bytes, Some("wav")).unwrap();

        assert_eq!(buffer.num_channels(), 1);
        assert_eq!(buffer.sample_rate(), 8000);
        assert_eq!(buffer.frames(), 4);
        let expected = [0.0, 0.5, -0.5, 1.0];
        for (got, want) in buffer.channel(0).iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "{} vs {}", got, want);
        }
    }

    #[test]
    fn decodes_stereo_wav_into_planes() {
        let left = vec![0.25; 1000];
        let right = vec![-0.25; 1000];
        let bytes = wav_bytes(vec![left, right], 44100);
        let buffer = SymphoniaDecoder::new().decode(&bytes, None).unwrap();

        assert_eq!(buffer.num_channels(), 2);
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.frames(), 1000);
        assert!(buffer.channel(0).iter().all(|&s| (s - 0.25).abs() < 1e-3));
        assert!(buffer.channel(1).iter().all(|&s| (s + 0.25).abs() < 1e-3));
    }

    #[test]
    fn garbage_is_rejected() {
        let result = SymphoniaDecoder::new().decode(b"definitely not audio at all", Some("mp3"));
        assert!(result.is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(SymphoniaDecoder::new().decode(&[], None).is_err());
    }

    #[test]
    fn wav_without_frames_is_empty() {
        let bytes = wav_bytes(vec![Vec::new()], 16000);
        assert!(SymphoniaDecoder::new().decode(&bytes, Some("wav")).is_err());
    }
}
