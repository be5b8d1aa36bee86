// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error types for buffer access and cursor configuration.

use thiserror::Error;

/// Errors raised by buffer accessors and cursor construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A frame index past the end of the buffer was requested.
    #[error("frame {frame} out of range for buffer of {frames} frames")]
    FrameOutOfRange { frame: usize, frames: usize },

    /// A channel index past the buffer's channel count was requested.
    #[error("channel {channel} out of range for buffer of {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// A cursor was bound to a channel the buffer does not have.
    #[error("cursor channel {channel} not present in buffer of {channels} channels")]
    ChannelUnavailable { channel: usize, channels: usize },

    /// A cursor was configured with a speed factor that is not positive
    /// and finite.
    #[error("speed factor {0} is not positive and finite")]
    InvalidSpeedFactor(f32),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
