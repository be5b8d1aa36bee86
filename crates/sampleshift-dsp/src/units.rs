// SPDX-License-Identifier: LGPL-3.0-or-later

//! Unit conversion functions.
//!
//! Conversions between musical intervals, gain levels, and sample/time
//! quantities used by the resampling engine.

/// Convert a pitch offset in cents to a playback-rate ratio.
///
/// 1200 cents is one octave, so +1200 doubles the rate and -1200 halves it.
///
/// # Arguments
/// * `cents` - Pitch offset in cents
///
/// # Returns
/// Playback-rate multiplier
///
/// # Examples
/// ```
/// # use sampleshift_dsp::units::cents_to_ratio;
/// assert!((cents_to_ratio(1200.0) - 2.0).abs() < 1e-9);
/// assert!((cents_to_ratio(-1200.0) - 0.5).abs() < 1e-9);
/// assert!((cents_to_ratio(0.0) - 1.0).abs() < 1e-9);
/// ```
#[inline]
pub fn cents_to_ratio(cents: f32) -> f64 {
    2.0_f64.powf(f64::from(cents) / 1200.0)
}

/// Convert a playback-rate ratio to a pitch offset in cents.
///
/// # Arguments
/// * `ratio` - Playback-rate multiplier
///
/// # Returns
/// Pitch offset in cents
#[inline]
pub fn ratio_to_cents(ratio: f64) -> f32 {
    (1200.0 * ratio.log2()) as f32
}

/// Convert decibels to linear gain (amplitude ratio).
///
/// # Arguments
/// * `db` - Level in decibels
///
/// # Returns
/// Linear gain (amplitude ratio)
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    (db * (std::f32::consts::LN_10 / 20.0)).exp()
}

/// Convert linear gain (amplitude ratio) to decibels.
///
/// # Arguments
/// * `gain` - Linear gain (amplitude ratio)
///
/// # Returns
/// Level in decibels
#[inline]
pub fn gain_to_db(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Convert a time in seconds to a fractional sample count.
///
/// # Arguments
/// * `sr` - Sample rate in Hz
/// * `seconds` - Time in seconds
///
/// # Returns
/// Fractional number of samples
#[inline]
pub fn seconds_to_samples(sr: u32, seconds: f64) -> f64 {
    seconds * f64::from(sr)
}

/// Convert a sample count to a time in seconds.
///
/// # Arguments
/// * `sr` - Sample rate in Hz
/// * `samples` - Number of samples
///
/// # Returns
/// Time in seconds
#[inline]
pub fn samples_to_seconds(sr: u32, samples: f64) -> f64 {
    samples / f64::from(sr)
}
