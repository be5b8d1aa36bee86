// SPDX-License-Identifier: LGPL-3.0-or-later

//! Fractional playback position over a sample buffer.
//!
//! A cursor tracks a fractional frame index into one channel of a
//! [`SampleBuffer`], advancing by a configurable rate (speed factor times
//! a pitch-derived ratio) and reading linearly interpolated values at the
//! current position. An optional loop region keeps the position cycling
//! through `[loop_begin, loop_end]` instead of running off the end.

use crate::error::{Error, Result};
use crate::units;

use super::buffer::SampleBuffer;

/// Playback-position cursor with speed and pitch control.
///
/// The cursor borrows its buffer read-only, so the buffer must outlive
/// every cursor bound to it. Position starts at frame zero and advances
/// by `speed_factor * pitch_ratio` source frames per output step.
///
/// Once the position reaches the last source frame, a non-looping cursor
/// is exhausted: [`read`](Self::read) returns silence from then on while
/// [`advance`](Self::advance) keeps moving the position forward. A looping
/// cursor instead wraps back into the loop region and never exhausts.
///
/// # Examples
/// ```
/// use sampleshift_dsp::{ResampleCursor, SampleBuffer};
///
/// let buffer = SampleBuffer::from_interleaved(&[0.0, 1.0, 2.0, 3.0], 1, 44100).unwrap();
/// let mut cursor = ResampleCursor::new(&buffer, 0, 1.0, 0, 0).unwrap();
///
/// assert_eq!(cursor.read(), 0.0);
/// cursor.advance();
/// assert_eq!(cursor.read(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ResampleCursor<'a> {
    /// Source buffer, read-only.
    buffer: &'a SampleBuffer,
    /// Bound channel index.
    channel: usize,
    /// Playback rate multiplier relative to the buffer's native rate.
    speed_factor: f32,
    /// Pitch-derived rate multiplier, 1.0 until a pitch offset is set.
    pitch_ratio: f64,
    /// Fractional playback position in source-frame units.
    position: f64,
    /// First frame of the loop region.
    loop_begin: usize,
    /// Last frame of the loop region.
    loop_end: usize,
    /// Whether the loop region is active, fixed at construction.
    looping: bool,
}

impl<'a> ResampleCursor<'a> {
    /// Create a cursor over one channel of a buffer.
    ///
    /// The loop region is `[loop_begin, loop_end]` in frame indices and is
    /// active only when `loop_begin < loop_end`; passing an empty or
    /// inverted region (for example `0, 0`) disables looping. The region
    /// cannot be changed after construction.
    ///
    /// # Arguments
    /// * `buffer` - Source sample buffer
    /// * `channel` - Channel index to read from (0-based)
    /// * `speed_factor` - Playback rate multiplier, positive and finite
    /// * `loop_begin` - First frame of the loop region
    /// * `loop_end` - Last frame of the loop region
    ///
    /// # Errors
    /// Returns an error if `channel` is not present in the buffer or if
    /// `speed_factor` is not positive and finite.
    pub fn new(
        buffer: &'a SampleBuffer,
        channel: usize,
        speed_factor: f32,
        loop_begin: usize,
        loop_end: usize,
    ) -> Result<Self> {
        if channel >= buffer.channels() {
            return Err(Error::ChannelUnavailable {
                channel,
                channels: buffer.channels(),
            });
        }
        if !(speed_factor.is_finite() && speed_factor > 0.0) {
            return Err(Error::InvalidSpeedFactor(speed_factor));
        }

        Ok(Self {
            buffer,
            channel,
            speed_factor,
            pitch_ratio: 1.0,
            position: 0.0,
            loop_begin,
            loop_end,
            looping: loop_begin < loop_end,
        })
    }

    /// Jump to an absolute time in seconds.
    ///
    /// The position becomes `seconds * speed_factor * pitch_ratio` source
    /// frames, projected through the buffer's sample rate. No loop wrap is
    /// applied here; only [`advance`](Self::advance) enforces the loop, so
    /// seeking past `loop_end` leaves the position there.
    ///
    /// # Arguments
    /// * `seconds` - Target time in seconds of output
    pub fn seek(&mut self, seconds: f64) {
        let step = f64::from(self.speed_factor) * self.pitch_ratio;
        self.position = units::seconds_to_samples(self.buffer.sample_rate(), seconds) * step;
    }

    /// Set the pitch offset in cents.
    ///
    /// Replaces any previous pitch setting; offsets do not accumulate.
    /// +1200 cents doubles the effective rate, -1200 halves it.
    ///
    /// # Arguments
    /// * `cents` - Pitch offset in cents
    pub fn set_pitch(&mut self, cents: f32) {
        self.pitch_ratio = units::cents_to_ratio(cents);
    }

    /// Read the interpolated sample at the current position.
    ///
    /// Returns silence once the position has reached the last source
    /// frame. For a looping cursor whose position sits at or past
    /// `loop_end`, the interpolation target wraps to `loop_begin` instead
    /// of the frame just past the loop tail.
    pub fn read(&self) -> f32 {
        if self.position >= self.buffer.frames() as f64 - 1.0 {
            return 0.0;
        }

        let mut floored = self.position as usize;
        if self.looping && floored > self.loop_end {
            floored = self.loop_end;
        }

        let low = self.tap(floored);
        let high = if self.looping && self.position >= self.loop_end as f64 {
            self.tap(self.loop_begin)
        } else {
            self.tap(floored + 1)
        };

        let frac = (self.position - floored as f64) as f32;
        low + frac * (high - low)
    }

    /// Advance the position by one output step.
    ///
    /// The position grows by `speed_factor * pitch_ratio`. When looping
    /// and the new position passes `loop_end`, the overshoot is carried
    /// past `loop_begin` as a single additive offset. A step larger than
    /// the loop length therefore lands past `loop_end` again rather than
    /// folding over the region several times.
    pub fn advance(&mut self) {
        self.position += f64::from(self.speed_factor) * self.pitch_ratio;

        if self.looping && self.position > self.loop_end as f64 {
            let offset = self.position - self.loop_end as f64;
            self.position = self.loop_begin as f64 + offset;
        }
    }

    /// Return the current fractional position in source frames.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Return the bound channel index.
    pub fn channel(&self) -> usize {
        self.channel
    }

    /// Return the speed factor.
    pub fn speed_factor(&self) -> f32 {
        self.speed_factor
    }

    /// Return the current pitch-derived rate multiplier.
    pub fn pitch_ratio(&self) -> f64 {
        self.pitch_ratio
    }

    /// Return whether the loop region is active.
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Read the bound channel at an integral frame index.
    ///
    /// Callers stay in range: the channel is validated at construction and
    /// every frame index is guarded by the end-of-data check and the loop
    /// clamp in `read`.
    fn tap(&self, frame: usize) -> f32 {
        self.buffer.samples()[frame * self.buffer.channels() + self.channel]
    }
}
