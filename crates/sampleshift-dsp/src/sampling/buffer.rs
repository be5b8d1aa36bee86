// SPDX-License-Identifier: LGPL-3.0-or-later

//! Audio sample storage.
//!
//! Provides a fixed-shape container of interleaved floating-point audio
//! samples. The frame count, channel count, and sample rate are set at
//! construction; sample values may be mutated in place but the shape
//! never changes.

use crate::error::{Error, Result};
use crate::units;

/// Interleaved multi-channel audio sample storage.
///
/// Samples are stored frame by frame, cycling through all channels within
/// each frame. The sample for frame `f`, channel `c` lives at index
/// `f * channels + c`, and `samples.len() == frames * channels` always
/// holds. Values are nominally in `[-1.0, 1.0]` but are not clamped.
///
/// # Examples
/// ```
/// use sampleshift_dsp::SampleBuffer;
///
/// let mut buffer = SampleBuffer::new(4, 44100, 2);
/// assert_eq!(buffer.frames(), 4);
/// assert_eq!(buffer.channels(), 2);
/// *buffer.sample_mut(1, 0).unwrap() = 0.5;
/// assert_eq!(buffer.sample_at(1, 0).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Interleaved audio data, length `frames * channels`.
    samples: Vec<f32>,
    /// Number of sample frames.
    frames: usize,
    /// Number of channels per frame.
    channels: usize,
    /// Sample rate in Hz.
    sample_rate: u32,
}

impl SampleBuffer {
    /// Allocate a zero-filled buffer with the given shape.
    ///
    /// # Arguments
    /// * `frames` - Number of sample frames (may be zero)
    /// * `sample_rate` - Sample rate in Hz
    /// * `channels` - Number of channels (at least one)
    pub fn new(frames: usize, sample_rate: u32, channels: usize) -> Self {
        debug_assert!(channels >= 1, "a buffer needs at least one channel");
        Self {
            samples: vec![0.0; frames * channels],
            frames,
            channels,
            sample_rate,
        }
    }

    /// Create a buffer from interleaved audio data.
    ///
    /// Returns `None` if `channels` is zero or `data` length is not evenly
    /// divisible by `channels`.
    ///
    /// # Arguments
    /// * `data` - Interleaved audio samples
    /// * `channels` - Number of channels
    /// * `sample_rate` - Sample rate in Hz
    pub fn from_interleaved(data: &[f32], channels: usize, sample_rate: u32) -> Option<Self> {
        if channels == 0 || data.len() % channels != 0 {
            return None;
        }

        Some(Self {
            samples: data.to_vec(),
            frames: data.len() / channels,
            channels,
            sample_rate,
        })
    }

    /// Return the number of sample frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Return the number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Return the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Return the buffer duration in seconds.
    pub fn duration(&self) -> f64 {
        units::samples_to_seconds(self.sample_rate, self.frames as f64)
    }

    /// Read the sample at the given frame and channel.
    ///
    /// # Arguments
    /// * `frame` - Frame index (0-based)
    /// * `channel` - Channel index (0-based)
    ///
    /// # Errors
    /// Returns an error if `frame` or `channel` is out of range.
    pub fn sample_at(&self, frame: usize, channel: usize) -> Result<f32> {
        let index = self.index_of(frame, channel)?;
        Ok(self.samples[index])
    }

    /// Borrow the sample at the given frame and channel mutably.
    ///
    /// # Arguments
    /// * `frame` - Frame index (0-based)
    /// * `channel` - Channel index (0-based)
    ///
    /// # Errors
    /// Returns an error if `frame` or `channel` is out of range.
    pub fn sample_mut(&mut self, frame: usize, channel: usize) -> Result<&mut f32> {
        let index = self.index_of(frame, channel)?;
        Ok(&mut self.samples[index])
    }

    /// Return the raw interleaved sample data.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Return the raw interleaved sample data mutably.
    ///
    /// The slice length is fixed; callers may rewrite values but cannot
    /// change the buffer shape through it.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Map a frame/channel pair to its interleaved index.
    ///
    /// The same stride is used for reads and writes.
    fn index_of(&self, frame: usize, channel: usize) -> Result<usize> {
        if frame >= self.frames {
            return Err(Error::FrameOutOfRange {
                frame,
                frames: self.frames,
            });
        }
        if channel >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: self.channels,
            });
        }
        Ok(frame * self.channels + channel)
    }
}
