// SPDX-License-Identifier: LGPL-3.0-or-later

//! WAVE stream decoding.
//!
//! Turns a canonical PCM WAVE stream into a [`SampleBuffer`] of
//! normalized floats. 8-bit samples are unsigned and centered at 128,
//! 16-bit samples are signed little-endian; both map into roughly
//! `[-1.0, 1.0]`.

use std::path::Path;

use log::debug;
use sampleshift_dsp::SampleBuffer;

use crate::error::{Result, WaveError};
use crate::format::{read_u16, BitDepth, Header, HEADER_LEN};

/// Decode a WAVE stream into a sample buffer.
///
/// # Arguments
/// * `bytes` - Complete stream contents
///
/// # Errors
/// Returns a format error for a malformed or unsupported header and a
/// truncation error when the stream holds fewer sample bytes than the
/// header declares. No partial buffer is ever returned.
pub fn decode(bytes: &[u8]) -> Result<SampleBuffer> {
    let header = Header::parse(bytes)?;
    let depth = BitDepth::from_bits(header.bits_per_sample)?;

    if header.channels == 0 {
        return Err(WaveError::BadChannelCount);
    }

    let channels = usize::from(header.channels);
    let bytes_per_frame = channels * depth.bytes();
    let frames = header.data_len as usize / bytes_per_frame;
    let expected = frames * bytes_per_frame;

    let data = bytes
        .get(HEADER_LEN..HEADER_LEN + expected)
        .ok_or(WaveError::TruncatedData { expected })?;

    let samples = match depth {
        BitDepth::Eight => decode_u8(data),
        BitDepth::Sixteen => decode_i16(data),
    };

    debug!(
        "decoded {} frames, {} channels, {} Hz, {}-bit",
        frames,
        channels,
        header.sample_rate,
        depth.bits()
    );

    SampleBuffer::from_interleaved(&samples, channels, header.sample_rate)
        .ok_or(WaveError::BadChannelCount)
}

/// Read and decode a WAVE file.
///
/// # Arguments
/// * `path` - File to read
///
/// # Errors
/// Returns an I/O error if the file cannot be read, otherwise the same
/// errors as [`decode`].
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Unsigned 8-bit samples centered at 128.
fn decode_u8(data: &[u8]) -> Vec<f32> {
    data.iter()
        .map(|&byte| (f32::from(byte) - 128.0) / 128.0)
        .collect()
}

/// Signed little-endian 16-bit samples.
fn decode_i16(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(2)
        .map(|pair| f32::from(read_u16(pair, 0) as i16) / 32767.0)
        .collect()
}
