// SPDX-License-Identifier: LGPL-3.0-or-later

//! # sampleshift-dsp
//!
//! Sample-accurate playback-rate conversion over in-memory audio buffers.
//!
//! This crate provides the core pieces of a resampling engine:
//!
//! - **SampleBuffer**: interleaved multi-channel float sample storage
//! - **ResampleCursor**: a fractional playback position over one channel,
//!   with independent speed and pitch control and optional looping
//! - **Render drivers**: block rendering, time scaling, and sample-rate
//!   conversion built on top of the cursor
//! - **Signal utilities**: DC-bias removal and peak normalization
//! - **Unit conversions**: cents, decibels, and sample/time conversions
//!
//! Playback uses linear interpolation between adjacent source frames.
//! A cursor borrows its buffer, so the buffer always outlives every
//! cursor that reads from it.

pub mod error;
pub mod sampling;
pub mod signal;
pub mod units;

pub use error::{Error, Result};
pub use sampling::{ResampleCursor, SampleBuffer};
