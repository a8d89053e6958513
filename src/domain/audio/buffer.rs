//! Decoded audio buffer

use serde::Serialize;

use crate::domain::error::InvalidBufferError;

/// Planar floating-point audio, the canonical decoded representation.
///
/// Every channel holds the same number of frames and the sample rate is
/// never zero. Samples are nominally in [-1.0, 1.0] but are not clamped
/// until encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Build a buffer from planar channel data
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self, InvalidBufferError> {
        if sample_rate == 0 {
            return Err(InvalidBufferError::ZeroSampleRate);
        }
        let expected = channels
            .first()
            .map(Vec::len)
            .ok_or(InvalidBufferError::NoChannels)?;
        if let Some((channel, data)) = channels
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() != expected)
        {
            return Err(InvalidBufferError::UnevenChannels {
                channel,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Assemble a buffer whose invariants the caller already upholds.
    /// Used by pipeline stages that derive a buffer from a valid one.
    pub(crate) fn from_valid_parts(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        debug_assert!(!channels.is_empty() && sample_rate > 0);
        debug_assert!(channels.iter().all(|c| c.len() == channels[0].len()));
        Self {
            channels,
            sample_rate,
        }
    }

    /// Build a single-channel buffer
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Result<Self, InvalidBufferError> {
        Self::new(vec![samples], sample_rate)
    }

    /// Allocate a zero-filled buffer
    pub fn silent(
        num_channels: usize,
        frames: usize,
        sample_rate: u32,
    ) -> Result<Self, InvalidBufferError> {
        Self::new(vec![vec![0.0; frames]; num_channels], sample_rate)
    }

    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.channels[0].len()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Samples of one channel.
    ///
    /// # Panics
    /// If `index` is not a valid channel index.
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    /// Consume the buffer and return its planar channel data
    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Summary of this buffer's shape
    pub fn info(&self) -> AudioInfo {
        AudioInfo {
            sample_rate: self.sample_rate,
            channels: self.num_channels(),
            frames: self.frames(),
            duration_secs: self.duration_secs(),
        }
    }
}

/// Shape of an audio buffer, kept after the samples are gone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: usize,
    pub duration_secs: f64,
}
