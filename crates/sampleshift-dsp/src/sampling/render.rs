// SPDX-License-Identifier: LGPL-3.0-or-later

//! Render drivers built on top of [`ResampleCursor`].
//!
//! The cursor itself only exposes read/advance; these helpers drive that
//! pair once per output sample to fill blocks and whole buffers.

use crate::error::Result;

use super::buffer::SampleBuffer;
use super::cursor::ResampleCursor;

/// Fill a block with consecutive output samples from a cursor.
///
/// Each destination sample is the interpolated value at the cursor's
/// current position; the cursor advances by one output step per sample.
/// An exhausted cursor fills the rest of the block with silence.
///
/// # Arguments
/// * `cursor` - Cursor to drive
/// * `dst` - Output block
pub fn render_block(cursor: &mut ResampleCursor, dst: &mut [f32]) {
    for out in dst.iter_mut() {
        *out = cursor.read();
        cursor.advance();
    }
}

/// Play a buffer back at a different speed, keeping the sample rate.
///
/// A factor above 1.0 shortens the result (faster playback), below 1.0
/// lengthens it. The output holds `(frames - 1) / factor + 1` frames so
/// the last source frame is still reachable at every factor.
///
/// # Arguments
/// * `src` - Source buffer
/// * `factor` - Speed factor, positive and finite
///
/// # Errors
/// Returns an error if `factor` is not positive and finite.
pub fn time_scale(src: &SampleBuffer, factor: f32) -> Result<SampleBuffer> {
    let frames = scaled_frame_count(src.frames(), f64::from(factor));
    let mut dst = SampleBuffer::new(frames, src.sample_rate(), src.channels());
    fill_from(src, &mut dst, factor)?;
    Ok(dst)
}

/// Convert a buffer to a different sample rate, keeping the pitch.
///
/// The traversal step is `src_rate / target_rate` source frames per
/// output frame, so the audible content is unchanged while the frame
/// count scales with the rate ratio.
///
/// # Arguments
/// * `src` - Source buffer
/// * `target_rate` - Output sample rate in Hz
///
/// # Errors
/// Returns an error if the rate ratio is not positive and finite, which
/// covers a zero `target_rate`.
pub fn resample_to_rate(src: &SampleBuffer, target_rate: u32) -> Result<SampleBuffer> {
    let alpha = f64::from(src.sample_rate()) / f64::from(target_rate);
    let frames = scaled_frame_count(src.frames(), alpha);
    let mut dst = SampleBuffer::new(frames, target_rate, src.channels());
    fill_from(src, &mut dst, alpha as f32)?;
    Ok(dst)
}

/// Drive one cursor per channel through the source at a fixed step.
///
/// Every channel follows the same fractional schedule, so frames stay
/// aligned across channels in the output.
fn fill_from(src: &SampleBuffer, dst: &mut SampleBuffer, step: f32) -> Result<()> {
    for ch in 0..src.channels() {
        let mut cursor = ResampleCursor::new(src, ch, step, 0, 0)?;
        for frame in 0..dst.frames() {
            *dst.sample_mut(frame, ch)? = cursor.read();
            cursor.advance();
        }
    }
    Ok(())
}

/// Output frame count for traversing `frames` source frames at `step`.
fn scaled_frame_count(frames: usize, step: f64) -> usize {
    if frames == 0 || !(step.is_finite() && step > 0.0) {
        return 0;
    }
    ((frames - 1) as f64 / step).floor() as usize + 1
}
