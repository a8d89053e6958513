//! Optimize audio use case

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::domain::audio::{
    encode_wav, mix_to_mono, resample_linear, truncate_duration, AudioInfo, RatePlan,
    WavEncodeError, MAX_DURATION_SECS,
};
use crate::domain::size::{compression_ratio, ByteSize};
use crate::domain::upload::{optimized_file_name, AudioFile};

use super::ports::{AudioDecoder, DecodeError};

/// Errors from the optimize use case
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Could not decode audio: {0}")]
    Decode(#[from] DecodeError),

    #[error("WAV encoding failed: {0}")]
    Encoding(#[from] WavEncodeError),

    #[error("Optimized file is still too large ({actual}, limit {limit}). Use a shorter recording or a larger --max-size")]
    SizeExceeded { actual: ByteSize, limit: ByteSize },
}

/// Input parameters for the optimize use case
#[derive(Debug, Clone)]
pub struct OptimizeInput {
    /// The source file, any container the decoder understands
    pub file: AudioFile,
    /// Ceiling for the optimized WAV
    pub max_size: ByteSize,
}

/// What the pipeline did to the audio
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeReport {
    pub input_name: String,
    pub input_size: ByteSize,
    pub original: AudioInfo,
    pub plan: RatePlan,
    pub resampled: bool,
    pub truncated: bool,
    pub output_name: String,
    pub output_size: ByteSize,
    pub output: AudioInfo,
    pub max_size: ByteSize,
}

impl OptimizeReport {
    /// Percentage saved relative to the input file
    pub fn compression_ratio(&self) -> f64 {
        compression_ratio(self.input_size, self.output_size)
    }
}

/// Output from the optimize use case
#[derive(Debug, Clone)]
pub struct OptimizeOutput {
    /// The optimized WAV file
    pub file: AudioFile,
    pub report: OptimizeReport,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct OptimizeCallbacks {
    /// Called once the source is decoded
    pub on_decoded: Option<Box<dyn Fn(&AudioInfo) + Send + Sync>>,
    /// Called once the target rate is chosen
    pub on_rate_selected: Option<Box<dyn Fn(&RatePlan) + Send + Sync>>,
    /// Called when the source is cut to the duration limit
    pub on_truncated: Option<Box<dyn Fn(u32) + Send + Sync>>,
    /// Called with the encoded size, before the ceiling check
    pub on_encoded: Option<Box<dyn Fn(ByteSize) + Send + Sync>>,
}

/// Audio optimization use case
pub struct OptimizeAudioUseCase<D>
where
    D: AudioDecoder,
{
    decoder: D,
}

impl<D> OptimizeAudioUseCase<D>
where
    D: AudioDecoder,
{
    /// Create a new use case instance
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Run decode, mixdown, rate selection, resampling, truncation and
    /// encoding, then enforce the size ceiling.
    ///
    /// Synchronous and CPU-bound; async callers should run it on a
    /// blocking thread.
    pub fn execute(
        &self,
        input: OptimizeInput,
        callbacks: &OptimizeCallbacks,
    ) -> Result<OptimizeOutput, OptimizeError> {
        let OptimizeInput { file, max_size } = input;

        let buffer = self.decoder.decode(file.data(), file.extension())?;
        let original = buffer.info();
        info!(
            "decoded {}: {:.2}s, {} Hz, {} channel(s), {} frames",
            file.name(),
            original.duration_secs,
            original.sample_rate,
            original.channels,
            original.frames
        );
        if let Some(ref cb) = callbacks.on_decoded {
            cb(&original);
        }

        let buffer = mix_to_mono(buffer);

        let plan = RatePlan::select(buffer.duration_secs(), max_size);
        debug!(
            "target rate {} Hz, estimated {}",
            plan.target_rate(),
            plan.estimated_size()
        );
        if let Some(ref cb) = callbacks.on_rate_selected {
            cb(&plan);
        }

        let resampled = plan.target_rate() != buffer.sample_rate();
        let buffer = if resampled {
            resample_linear(buffer, plan.target_rate())
        } else {
            buffer
        };

        let (buffer, truncated) = truncate_duration(buffer, MAX_DURATION_SECS);
        if truncated {
            info!("audio truncated to {} seconds", MAX_DURATION_SECS);
            if let Some(ref cb) = callbacks.on_truncated {
                cb(MAX_DURATION_SECS);
            }
        }

        let output = buffer.info();
        let wav = encode_wav(&buffer)?;
        drop(buffer);

        let output_size = ByteSize::from(wav.len());
        info!("final optimized size {}", output_size);
        if let Some(ref cb) = callbacks.on_encoded {
            cb(output_size);
        }

        if output_size > max_size {
            return Err(OptimizeError::SizeExceeded {
                actual: output_size,
                limit: max_size,
            });
        }

        let output_name = optimized_file_name(file.name());
        let report = OptimizeReport {
            input_name: file.name().to_string(),
            input_size: file.size(),
            original,
            plan,
            resampled,
            truncated,
            output_name: output_name.clone(),
            output_size,
            output,
            max_size,
        };

        Ok(OptimizeOutput {
            file: AudioFile::new(output_name, wav),
            report,
        })
    }
}
