//! Duration truncation

use super::buffer::AudioBuffer;

/// Longest audio kept in the optimized output (10 minutes)
pub const MAX_DURATION_SECS: u32 = 600;

/// Cut every channel down to at most `max_frames` frames. No fade-out.
pub fn truncate_frames(buffer: AudioBuffer, max_frames: usize) -> AudioBuffer {
    if buffer.frames() <= max_frames {
        return buffer;
    }

    let sample_rate = buffer.sample_rate();
    let channels = buffer
        .into_channels()
        .into_iter()
        .map(|mut samples| {
            samples.truncate(max_frames);
            samples
        })
        .collect();

    AudioBuffer::from_valid_parts(channels, sample_rate)
}

/// Cut the buffer to `max_secs` seconds if it is longer.
/// Returns the buffer and whether anything was cut.
pub fn truncate_duration(buffer: AudioBuffer, max_secs: u32) -> (AudioBuffer, bool) {
    if buffer.duration_secs() <= max_secs as f64 {
        return (buffer, false);
    }
    let max_frames = (max_secs as f64 * buffer.sample_rate() as f64).floor() as usize;
    (truncate_frames(buffer, max_frames), true)
}
