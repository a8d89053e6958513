//! Channel mixdown

use super::buffer::AudioBuffer;

/// Mix a buffer down to a single channel.
///
/// Mono input is returned untouched. Otherwise each output frame is the
/// average of the first two channels; any further channels are dropped.
pub fn mix_to_mono(buffer: AudioBuffer) -> AudioBuffer {
    if buffer.num_channels() == 1 {
        return buffer;
    }

    let sample_rate = buffer.sample_rate();
    let mut channels = buffer.into_channels();
    let right = channels.swap_remove(1);
    let mut left = channels.swap_remove(0);

    for (l, r) in left.iter_mut().zip(&right) {
        *l = (*l + *r) / 2.0;
    }

    AudioBuffer::from_valid_parts(vec![left], sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_is_unchanged() {
        let buffer = AudioBuffer::mono(vec![0.1, -0.4, 0.9], 22050).unwrap();
        let mixed = mix_to_mono(buffer.clone());
        assert_eq!(mixed, buffer);
    }

    #[test]
    fn mixdown_is_idempotent() {
        let buffer = AudioBuffer::new(vec![vec![0.2, 0.4], vec![0.6, -0.4]], 8000).unwrap();
        let once = mix_to_mono(buffer);
        let twice = mix_to_mono(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn stereo_is_averaged() {
        let buffer =
            AudioBuffer::new(vec![vec![1.0, 0.5, -1.0], vec![0.0, 0.5, 1.0]], 44100).unwrap();
        let mixed = mix_to_mono(buffer);
        assert_eq!(mixed.num_channels(), 1);
        assert_eq!(mixed.channel(0), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn extra_channels_are_ignored() {
        let buffer = AudioBuffer::new(
            vec![vec![0.2; 3], vec![0.4; 3], vec![1.0; 3], vec![-1.0; 3]],
            48000,
        )
        .unwrap();
        let mixed = mix_to_mono(buffer);
        assert_eq!(mixed.num_channels(), 1);
        for &sample in mixed.channel(0) {
            assert!((sample - 0.3).abs() < 1e-6);
        }
    }

    #[test]
    fn keeps_rate_and_length() {
        let buffer = AudioBuffer::silent(2, 1234, 32000).unwrap();
        let mixed = mix_to_mono(buffer);
        assert_eq!(mixed.frames(), 1234);
        assert_eq!(mixed.sample_rate(), 32000);
    }
}
