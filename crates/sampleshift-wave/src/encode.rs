// SPDX-License-Identifier: LGPL-3.0-or-later

//! WAVE stream encoding.
//!
//! Serializes a [`SampleBuffer`] as a canonical PCM WAVE stream at 8 or
//! 16 bits per sample. Float samples are rounded to the nearest PCM step
//! and saturate at the PCM range limits.

use std::path::Path;

use log::debug;
use sampleshift_dsp::SampleBuffer;

use crate::error::Result;
use crate::format::{BitDepth, Header};

/// Encode a sample buffer as a complete WAVE stream.
///
/// # Arguments
/// * `buffer` - Buffer to serialize
/// * `depth` - Output sample width
pub fn encode(buffer: &SampleBuffer, depth: BitDepth) -> Vec<u8> {
    let data_len = buffer.samples().len() * depth.bytes();
    let header = Header {
        channels: buffer.channels() as u16,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: depth.bits(),
        data_len: data_len as u32,
    };

    let mut bytes = Vec::with_capacity(header.to_bytes().len() + data_len);
    bytes.extend_from_slice(&header.to_bytes());

    match depth {
        BitDepth::Eight => {
            for &sample in buffer.samples() {
                bytes.push(((sample * 127.0).round() + 128.0) as u8);
            }
        }
        BitDepth::Sixteen => {
            for &sample in buffer.samples() {
                let value = (sample * 32767.0).round() as i16;
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
    }

    debug!(
        "encoded {} frames, {} channels, {} Hz, {}-bit",
        buffer.frames(),
        buffer.channels(),
        buffer.sample_rate(),
        depth.bits()
    );

    bytes
}

/// Encode a sample buffer and write it to a file.
///
/// # Arguments
/// * `path` - File to write
/// * `buffer` - Buffer to serialize
/// * `depth` - Output sample width
///
/// # Errors
/// Returns an I/O error if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, buffer: &SampleBuffer, depth: BitDepth) -> Result<()> {
    std::fs::write(path, encode(buffer, depth))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{read_u16, read_u32, HEADER_LEN};

    fn mono_buffer(data: &[f32], sample_rate: u32) -> SampleBuffer {
        SampleBuffer::from_interleaved(data, 1, sample_rate).unwrap()
    }

    #[test]
    fn test_encode_16_bit_values() {
        let buffer = mono_buffer(&[0.0, 1.0, -1.0, 0.5], 44100);
        let bytes = encode(&buffer, BitDepth::Sixteen);

        assert_eq!(bytes.len(), HEADER_LEN + 8);
        let sample = |i: usize| read_u16(&bytes, HEADER_LEN + i * 2) as i16;
        assert_eq!(sample(0), 0);
        assert_eq!(sample(1), 32767);
        assert_eq!(sample(2), -32767);
        assert_eq!(sample(3), 16384); // round(0.5 * 32767)
    }

    #[test]
    fn test_encode_8_bit_values() {
        let buffer = mono_buffer(&[0.0, 1.0, -1.0, 0.5], 8000);
        let bytes = encode(&buffer, BitDepth::Eight);

        assert_eq!(bytes.len(), HEADER_LEN + 4);
        assert_eq!(bytes[HEADER_LEN], 128);
        assert_eq!(bytes[HEADER_LEN + 1], 255);
        assert_eq!(bytes[HEADER_LEN + 2], 1);
        assert_eq!(bytes[HEADER_LEN + 3], 192); // round(0.5 * 127) + 128
    }

    #[test]
    fn test_encode_saturates_out_of_range() {
        let buffer = mono_buffer(&[2.0, -2.0], 44100);

        let bytes = encode(&buffer, BitDepth::Sixteen);
        let sample = |i: usize| read_u16(&bytes, HEADER_LEN + i * 2) as i16;
        assert_eq!(sample(0), i16::MAX);
        assert_eq!(sample(1), i16::MIN);

        let bytes = encode(&buffer, BitDepth::Eight);
        assert_eq!(bytes[HEADER_LEN], 255);
        assert_eq!(bytes[HEADER_LEN + 1], 0);
    }

    #[test]
    fn test_encode_header_fields() {
        let buffer = SampleBuffer::new(100, 48000, 2);
        let bytes = encode(&buffer, BitDepth::Sixteen);

        assert_eq!(read_u32(&bytes, 40), 400); // 100 frames * 2 ch * 2 bytes
        assert_eq!(read_u32(&bytes, 4), 436); // 36 + data_len
        assert_eq!(read_u16(&bytes, 22), 2);
        assert_eq!(read_u32(&bytes, 24), 48000);
    }

    #[test]
    fn test_encode_empty_buffer() {
        let buffer = SampleBuffer::new(0, 44100, 1);
        let bytes = encode(&buffer, BitDepth::Sixteen);
        assert_eq!(bytes.len(), HEADER_LEN);
        assert_eq!(read_u32(&bytes, 40), 0);
    }
}
