// SPDX-License-Identifier: LGPL-3.0-or-later

//! # sampleshift-wave
//!
//! Canonical PCM WAVE decode and encode for [`sampleshift_dsp`] sample
//! buffers.
//!
//! Only the plain 44-byte RIFF/WAVE layout with an uncompressed PCM
//! format chunk is supported, at 8 or 16 bits per sample. Anything else
//! fails with a distinct [`WaveError`] instead of producing garbage.
//!
//! # Examples
//! ```
//! use sampleshift_dsp::SampleBuffer;
//! use sampleshift_wave::{decode, encode, BitDepth};
//!
//! let buffer = SampleBuffer::from_interleaved(&[0.0, 0.5, -0.5, 0.25], 1, 44100).unwrap();
//! let bytes = encode(&buffer, BitDepth::Sixteen);
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded.frames(), 4);
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod format;

pub use decode::{decode, read_file};
pub use encode::{encode, write_file};
pub use error::{Result, WaveError};
pub use format::{BitDepth, Header, HEADER_LEN};
