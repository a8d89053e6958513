//! Linear-interpolation resampler
//!
//! Not band-limited: there is no anti-aliasing filter. The output only feeds
//! speech recognition, where the aliasing is tolerable.

use super::buffer::AudioBuffer;

/// Number of output frames when converting `frames` at `source_rate` to `target_rate`
pub fn resampled_len(frames: usize, source_rate: u32, target_rate: u32) -> usize {
    let ratio = source_rate as f64 / target_rate as f64;
    (frames as f64 / ratio).floor() as usize
}

/// Resample the first channel of `buffer` to `target_rate`, producing mono output.
///
/// # Panics
/// If `target_rate` is zero.
pub fn resample_linear(buffer: AudioBuffer, target_rate: u32) -> AudioBuffer {
    assert!(target_rate > 0, "target sample rate must be positive");

    let ratio = buffer.sample_rate() as f64 / target_rate as f64;
    let new_len = resampled_len(buffer.frames(), buffer.sample_rate(), target_rate);
    let input = buffer.channel(0);

    let output = (0..new_len)
        .map(|i| {
            let position = i as f64 * ratio;
            let index = position.floor() as usize;
            let frac = position - index as f64;

            // Interpolate in f64, round to f32 once
            match (input.get(index), input.get(index + 1)) {
                (Some(&a), Some(&b)) => (a as f64 * (1.0 - frac) + b as f64 * frac) as f32,
                (Some(&a), None) => a,
                _ => 0.0,
            }
        })
        .collect();

    AudioBuffer::from_valid_parts(vec![output], target_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downsample_length_is_floored() {
        let buffer = AudioBuffer::mono(vec![0.0; 48001], 48000).unwrap();
        let out = resample_linear(buffer, 16000);
        assert_eq!(out.frames(), 16000);
        assert_eq!(out.sample_rate(), 16000);
    }

    #[test]
    fn length_matches_formula() {
        for (frames, from, to) in [(44100, 44100, 11025), (1000, 8000, 6000), (7, 16000, 4000)] {
            let buffer = AudioBuffer::mono(vec![0.0; frames], from).unwrap();
            let out = resample_linear(buffer, to);
            let ratio = from as f64 / to as f64;
            assert_eq!(out.frames(), (frames as f64 / ratio).floor() as usize);
        }
    }

    #[test]
    fn integer_ratio_picks_every_nth_sample() {
        let input: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let buffer = AudioBuffer::mono(input, 48000).unwrap();
        let out = resample_linear(buffer, 16000);
        assert_eq!(out.channel(0), &[0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn fractional_positions_interpolate() {
        // ratio 1.5: positions 0, 1.5, 3
        let buffer = AudioBuffer::mono(vec![0.0, 1.0, 2.0, 3.0, 4.0], 12000).unwrap();
        let out = resample_linear(buffer, 8000);
        assert_eq!(out.frames(), 3);
        assert_eq!(out.channel(0), &[0.0, 1.5, 3.0]);
    }

    #[test]
    fn upsample_holds_last_sample() {
        // ratio 0.5: last output position 1.5 has no right neighbour past index 1
        let buffer = AudioBuffer::mono(vec![0.0, 1.0], 8000).unwrap();
        let out = resample_linear(buffer, 16000);
        assert_eq!(out.channel(0), &[0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn only_first_channel_is_read() {
        let buffer = AudioBuffer::new(vec![vec![0.25; 8], vec![1.0; 8]], 16000).unwrap();
        let out = resample_linear(buffer, 8000);
        assert_eq!(out.num_channels(), 1);
        assert!(out.channel(0).iter().all(|&s| s == 0.25));
    }

    #[test]
    fn interpolation_matches_f64_reference() {
        let input: Vec<f32> = (0..44100)
            .map(|i| (i as f32 * 440.0 * std::f32::consts::TAU / 44100.0).sin() * 0.8)
            .collect();
        let buffer = AudioBuffer::mono(input.clone(), 44100).unwrap();
        let out = resample_linear(buffer, 9000);

        let ratio = 44100.0 / 9000.0;
        assert_eq!(out.frames(), 9000);
        for (i, &got) in out.channel(0).iter().enumerate() {
            let position = i as f64 * ratio;
            let index = position.floor() as usize;
            let frac = position - index as f64;
            let expected = match input.get(index + 1) {
                Some(&b) => (input[index] as f64 * (1.0 - frac) + b as f64 * frac) as f32,
                None => input[index],
            };
            assert_eq!(got.to_bits(), expected.to_bits(), "sample {}", i);
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let buffer = AudioBuffer::mono(Vec::new(), 44100).unwrap();
        let out = resample_linear(buffer, 8000);
        assert_eq!(out.frames(), 0);
        assert_eq!(out.sample_rate(), 8000);
    }
}
