//! Audio domain module
//!
//! Decoded buffers and the pure pipeline stages applied to them.
//! Each stage takes its input by value and returns a new buffer.

mod buffer;
mod mixdown;
mod rate_plan;
mod resample;
mod truncate;
mod wav;

pub use buffer::{AudioBuffer, AudioInfo};
pub use mixdown::mix_to_mono;
pub use rate_plan::{
    estimate_wav_size, seed_rate, RatePlan, LONG_SOURCE_RATE, MEDIUM_SOURCE_RATE,
    MIN_SAMPLE_RATE, SHORT_SOURCE_RATE, SHRINK_FACTOR,
};
pub use resample::{resample_linear, resampled_len};
pub use truncate::{truncate_duration, truncate_frames, MAX_DURATION_SECS};
pub use wav::{
    encode_wav, encoded_size, sample_to_i16, WavEncodeError, BITS_PER_SAMPLE, BYTES_PER_SAMPLE,
    WAV_HEADER_SIZE,
};
