// SPDX-License-Identifier: LGPL-3.0-or-later

//! Decode and encode error types.

use thiserror::Error;

/// Errors raised while decoding or writing a WAVE stream.
///
/// Decoding is all-or-nothing: the first failed check aborts and no
/// partial buffer is returned.
#[derive(Error, Debug)]
pub enum WaveError {
    /// The stream does not start with a RIFF tag.
    #[error("not a RIFF stream")]
    NotRiff,

    /// The RIFF form is not WAVE.
    #[error("not a WAVE stream")]
    NotWave,

    /// The format chunk tag is missing or wrong.
    #[error("format chunk tag incorrect")]
    BadFormatTag,

    /// The format chunk declares a size other than 16 bytes.
    #[error("format chunk size {0}, expected 16")]
    BadFormatSize(u32),

    /// The audio format code is not 1 (uncompressed PCM).
    #[error("unsupported audio format code {0}, only PCM is supported")]
    UnsupportedFormat(u16),

    /// The data chunk tag is missing or wrong.
    #[error("data chunk tag incorrect")]
    BadDataTag,

    /// The declared bit depth is neither 8 nor 16.
    #[error("unsupported bit depth {0}, expected 8 or 16")]
    UnsupportedBitDepth(u16),

    /// The header declares zero channels.
    #[error("channel count must be at least 1")]
    BadChannelCount,

    /// The stream ends before the 44-byte header does.
    #[error("stream shorter than the 44-byte header")]
    TruncatedHeader,

    /// The stream holds fewer sample bytes than the header declares.
    #[error("sample data shorter than the declared {expected} bytes")]
    TruncatedData { expected: usize },

    /// File I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience result type for this crate.
pub type Result<T> = std::result::Result<T, WaveError>;
