//! Canonical PCM WAV encoder
//!
//! Layout:
//! - 44-byte RIFF/WAVE header with a 16-byte `fmt ` chunk
//! - PCM format tag 1, 16-bit little-endian samples
//! - Frames interleaved channel by channel

use thiserror::Error;

use super::buffer::AudioBuffer;

/// Size of the canonical RIFF/WAVE header
pub const WAV_HEADER_SIZE: usize = 44;

/// Bits per encoded sample
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per encoded sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// `fmt ` chunk size for plain PCM
const FMT_CHUNK_SIZE: u32 = 16;

/// WAVE_FORMAT_PCM
const FORMAT_PCM: u16 = 1;

/// WAV encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WavEncodeError {
    #[error("Too many channels for a WAV header: {0}")]
    TooManyChannels(usize),

    #[error("Audio data too large for a WAV file: {frames} frames x {channels} channels")]
    TooLarge { frames: usize, channels: usize },
}

/// Exact encoded size of `frames` frames of `channels` channels
pub const fn encoded_size(frames: usize, channels: usize) -> usize {
    WAV_HEADER_SIZE + frames * channels * BYTES_PER_SAMPLE
}

/// Convert a float sample to signed 16-bit.
/// Clamps to [-1, 1]; negatives scale by 32768, the rest by 32767.
pub fn sample_to_i16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0) as i16
    } else {
        (s * 32767.0) as i16
    }
}

/// Serialize `buffer` as a 16-bit PCM WAV file
pub fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>, WavEncodeError> {
    let channels = buffer.num_channels();
    let frames = buffer.frames();
    let too_large = || WavEncodeError::TooLarge { frames, channels };

    let num_channels =
        u16::try_from(channels).map_err(|_| WavEncodeError::TooManyChannels(channels))?;
    let block_align = num_channels
        .checked_mul(BYTES_PER_SAMPLE as u16)
        .ok_or(WavEncodeError::TooManyChannels(channels))?;
    let byte_rate = buffer
        .sample_rate()
        .checked_mul(block_align as u32)
        .ok_or_else(too_large)?;
    let data_size = frames
        .checked_mul(block_align as usize)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_large)?;
    let riff_size = data_size
        .checked_add((WAV_HEADER_SIZE - 8) as u32)
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&buffer.sample_rate().to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    let planes = buffer.channels();
    for frame in 0..frames {
        for plane in planes {
            out.extend_from_slice(&sample_to_i16(plane[frame]).to_le_bytes());
        }
    }

    Ok(out)
}
