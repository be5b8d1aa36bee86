// SPDX-License-Identifier: LGPL-3.0-or-later

//! In-place signal adjustments for decoded audio.
//!
//! Decoded PCM often carries a small DC offset and rarely uses the full
//! amplitude range. These utilities clean that up before playback:
//! per-channel DC-bias removal and normalization of the buffer-wide peak
//! to a target decibel ceiling.

use log::{debug, warn};

use crate::sampling::SampleBuffer;
use crate::units;

/// Subtract each channel's arithmetic mean from that channel.
///
/// Channels are corrected independently, so an offset on one channel
/// never bleeds into another.
///
/// # Arguments
/// * `buffer` - Buffer to correct in place
pub fn remove_dc_bias(buffer: &mut SampleBuffer) {
    let frames = buffer.frames();
    let channels = buffer.channels();
    if frames == 0 {
        return;
    }

    for ch in 0..channels {
        let mean = buffer.samples()[ch..]
            .iter()
            .step_by(channels)
            .sum::<f32>()
            / frames as f32;

        for sample in buffer.samples_mut()[ch..].iter_mut().step_by(channels) {
            *sample -= mean;
        }
    }
}

/// Return the largest absolute sample value across all channels.
pub fn peak(buffer: &SampleBuffer) -> f32 {
    buffer
        .samples()
        .iter()
        .fold(0.0f32, |acc, sample| acc.max(sample.abs()))
}

/// Normalize the buffer so its peak reaches the given decibel ceiling.
///
/// Removes per-channel DC bias first, then scales every sample by
/// `gain(db) / peak`. A ceiling of 0 dB brings the peak to 1.0, -6 dB to
/// roughly 0.5, and so on.
///
/// A silent buffer (peak exactly zero) is left untouched; there is no
/// meaningful gain for it and scaling by a non-finite value would poison
/// every sample.
///
/// # Arguments
/// * `buffer` - Buffer to normalize in place
/// * `db` - Target ceiling in decibels
pub fn normalize(buffer: &mut SampleBuffer, db: f32) {
    remove_dc_bias(buffer);

    let peak = peak(buffer);
    if peak == 0.0 {
        warn!("normalize: buffer is silent, leaving samples untouched");
        return;
    }

    let gain = units::db_to_gain(db) / peak;
    debug!("normalize: peak {peak}, target {db} dB, gain {gain}");

    for sample in buffer.samples_mut() {
        *sample *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(data: &[f32], channels: usize) -> SampleBuffer {
        SampleBuffer::from_interleaved(data, channels, 44100).unwrap()
    }

    #[test]
    fn test_remove_dc_bias_mono() {
        let mut buffer = buffer_from(&[1.5, 2.5, 3.5, 4.5], 1);
        remove_dc_bias(&mut buffer);
        assert_eq!(buffer.samples(), &[-1.5, -0.5, 0.5, 1.5]);
    }

    #[test]
    fn test_remove_dc_bias_per_channel() {
        // Left has +1 offset, right has -2.
        let mut buffer = buffer_from(&[1.5, -2.5, 0.5, -1.5], 2);
        remove_dc_bias(&mut buffer);

        assert_eq!(buffer.sample_at(0, 0).unwrap(), 0.5);
        assert_eq!(buffer.sample_at(1, 0).unwrap(), -0.5);
        assert_eq!(buffer.sample_at(0, 1).unwrap(), -0.5);
        assert_eq!(buffer.sample_at(1, 1).unwrap(), 0.5);
    }

    #[test]
    fn test_remove_dc_bias_centered_is_stable() {
        let mut buffer = buffer_from(&[-0.5, 0.5, -0.5, 0.5], 1);
        remove_dc_bias(&mut buffer);
        assert_eq!(buffer.samples(), &[-0.5, 0.5, -0.5, 0.5]);
    }

    #[test]
    fn test_peak() {
        let buffer = buffer_from(&[0.1, -0.8, 0.3, 0.2], 2);
        assert_eq!(peak(&buffer), 0.8);
    }

    #[test]
    fn test_peak_of_silence() {
        let buffer = SampleBuffer::new(16, 44100, 2);
        assert_eq!(peak(&buffer), 0.0);
    }

    #[test]
    fn test_normalize_to_zero_db() {
        let mut buffer = buffer_from(&[0.25, -0.5, 0.25, 0.0], 1);
        normalize(&mut buffer, 0.0);
        assert!((peak(&buffer) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_to_minus_six_db() {
        let mut buffer = buffer_from(&[0.4, -0.2, 0.1, -0.3], 1);
        normalize(&mut buffer, -6.0);
        assert!((peak(&buffer) - units::db_to_gain(-6.0)).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_silent_buffer_is_noop() {
        let mut buffer = SampleBuffer::new(8, 44100, 2);
        normalize(&mut buffer, 0.0);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
        assert!(buffer.samples().iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_normalize_is_stable_when_repeated() {
        let mut buffer = buffer_from(&[0.6, -0.4, 0.2, -0.1, 0.05, 0.3], 1);
        normalize(&mut buffer, -3.0);
        let first: Vec<f32> = buffer.samples().to_vec();

        normalize(&mut buffer, -3.0);
        for (a, b) in first.iter().zip(buffer.samples()) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize_removes_offset_first() {
        // A strong DC offset must not dominate the peak measurement.
        let mut buffer = buffer_from(&[0.9, 1.0, 0.9, 1.0], 1);
        normalize(&mut buffer, 0.0);

        // After DC removal the signal is +/-0.05, scaled to +/-1.0.
        assert!((buffer.sample_at(0, 0).unwrap() + 1.0).abs() < 1e-4);
        assert!((buffer.sample_at(1, 0).unwrap() - 1.0).abs() < 1e-4);
    }
}
