//! Target sample-rate selection
//!
//! Picks a speech-grade sample rate from the source duration, then shrinks it
//! geometrically until the estimated mono 16-bit WAV fits the size ceiling or
//! the rate floor is reached.

use log::debug;
use serde::Serialize;

use super::wav::{BYTES_PER_SAMPLE, WAV_HEADER_SIZE};
use crate::domain::size::ByteSize;

/// Seed rate for sources up to 5 minutes
pub const SHORT_SOURCE_RATE: u32 = 16000;

/// Seed rate for sources over 5 and up to 10 minutes
pub const MEDIUM_SOURCE_RATE: u32 = 11025;

/// Seed rate for sources over 10 minutes (telephone quality)
pub const LONG_SOURCE_RATE: u32 = 8000;

/// The shrink loop never goes below this rate
pub const MIN_SAMPLE_RATE: u32 = 4000;

/// Each shrink step multiplies the rate by this factor
pub const SHRINK_FACTOR: f64 = 0.75;

/// Pick the starting rate for a source of the given length
pub fn seed_rate(duration_secs: f64) -> u32 {
    let minutes = duration_secs / 60.0;
    if minutes > 10.0 {
        LONG_SOURCE_RATE
    } else if minutes > 5.0 {
        MEDIUM_SOURCE_RATE
    } else {
        SHORT_SOURCE_RATE
    }
}

/// Estimated size in bytes of a mono 16-bit WAV
pub fn estimate_wav_size(duration_secs: f64, sample_rate: f64) -> f64 {
    duration_secs * sample_rate * BYTES_PER_SAMPLE as f64 + WAV_HEADER_SIZE as f64
}

/// Outcome of the rate search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePlan {
    target_rate: u32,
    estimated_size: u64,
    attempted_rates: Vec<u32>,
}

impl RatePlan {
    /// Run the greedy shrink for a source of `duration_secs` under `max_size`.
    ///
    /// The search runs on the exact geometric value; the chosen rate is that
    /// value rounded down to whole hertz. The plan may still not fit when the
    /// floor is reached.
    pub fn select(duration_secs: f64, max_size: ByteSize) -> Self {
        let ceiling = max_size.as_bytes() as f64;
        let floor = MIN_SAMPLE_RATE as f64;

        let mut rate = seed_rate(duration_secs) as f64;
        let mut estimate = estimate_wav_size(duration_secs, rate);
        let mut attempted_rates = vec![rate as u32];

        debug!(
            "seed rate {} Hz for {:.1}s source, estimated {} bytes",
            rate, duration_secs, estimate as u64
        );

        while estimate > ceiling && rate > floor {
            rate = (rate * SHRINK_FACTOR).max(floor);
            estimate = estimate_wav_size(duration_secs, rate);
            attempted_rates.push(rate.floor() as u32);
            debug!(
                "reducing rate to {:.2} Hz, estimated {} bytes",
                rate, estimate as u64
            );
        }

        Self {
            target_rate: rate.floor() as u32,
            estimated_size: estimate.ceil() as u64,
            attempted_rates,
        }
    }

    /// The chosen output sample rate
    pub fn target_rate(&self) -> u32 {
        self.target_rate
    }

    /// Estimated output size at the chosen rate
    pub fn estimated_size(&self) -> ByteSize {
        ByteSize::from_bytes(self.estimated_size)
    }

    /// Every rate the search visited, seed first
    pub fn attempted_rates(&self) -> &[u32] {
        &self.attempted_rates
    }

    /// Whether the estimate fits under `max_size`
    pub fn fits(&self, max_size: ByteSize) -> bool {
        self.estimated_size <= max_size.as_bytes()
    }
}
