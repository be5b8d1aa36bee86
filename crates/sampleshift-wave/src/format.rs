// SPDX-License-Identifier: LGPL-3.0-or-later

//! The canonical 44-byte WAVE header.
//!
//! Only the simplest container layout is understood: a RIFF/WAVE stream
//! whose 16-byte format chunk is immediately followed by the data chunk.
//! All multi-byte fields are little-endian and are read and written as
//! explicit fixed-width values, never by reinterpreting memory.
//!
//! Layout:
//!
//! | Offset | Size | Field                    |
//! |--------|------|--------------------------|
//! | 0      | 4    | `"RIFF"`                 |
//! | 4      | 4    | total size minus 8       |
//! | 8      | 4    | `"WAVE"`                 |
//! | 12     | 4    | `"fmt "`                 |
//! | 16     | 4    | format chunk size (16)   |
//! | 20     | 2    | audio format code (1)    |
//! | 22     | 2    | channel count            |
//! | 24     | 4    | sample rate              |
//! | 28     | 4    | byte rate                |
//! | 32     | 2    | block alignment          |
//! | 34     | 2    | bits per sample          |
//! | 36     | 4    | `"data"`                 |
//! | 40     | 4    | data byte count          |

use crate::error::{Result, WaveError};

/// Total header length in bytes.
pub const HEADER_LEN: usize = 44;

const RIFF_TAG: &[u8; 4] = b"RIFF";
const WAVE_TAG: &[u8; 4] = b"WAVE";
const FMT_TAG: &[u8; 4] = b"fmt ";
const DATA_TAG: &[u8; 4] = b"data";

/// Declared size of the format chunk.
const FMT_CHUNK_LEN: u32 = 16;

/// Audio format code for uncompressed PCM.
const PCM_FORMAT: u16 = 1;

/// Supported PCM sample width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// Unsigned 8-bit samples centered at 128.
    Eight,
    /// Signed little-endian 16-bit samples.
    Sixteen,
}

impl BitDepth {
    /// Width in bits.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }

    /// Width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            BitDepth::Eight => 1,
            BitDepth::Sixteen => 2,
        }
    }

    /// Map a declared bit count to a supported depth.
    ///
    /// # Errors
    /// Returns an error for any width other than 8 or 16.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            other => Err(WaveError::UnsupportedBitDepth(other)),
        }
    }
}

/// Parsed header fields the sample data depends on.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Declared sample width in bits.
    pub bits_per_sample: u16,
    /// Declared length of the data chunk in bytes.
    pub data_len: u32,
}

impl Header {
    /// Validate and read a header from the start of a stream.
    ///
    /// Checks run in stream order: RIFF tag, WAVE tag, format chunk tag,
    /// format chunk size, audio format code, then the data chunk tag.
    /// The first failure aborts the parse.
    ///
    /// # Arguments
    /// * `bytes` - Stream contents, at least [`HEADER_LEN`] bytes
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(WaveError::TruncatedHeader);
        }

        if &bytes[0..4] != RIFF_TAG {
            return Err(WaveError::NotRiff);
        }
        if &bytes[8..12] != WAVE_TAG {
            return Err(WaveError::NotWave);
        }
        if &bytes[12..16] != FMT_TAG {
            return Err(WaveError::BadFormatTag);
        }

        let fmt_len = read_u32(bytes, 16);
        if fmt_len != FMT_CHUNK_LEN {
            return Err(WaveError::BadFormatSize(fmt_len));
        }

        let format = read_u16(bytes, 20);
        if format != PCM_FORMAT {
            return Err(WaveError::UnsupportedFormat(format));
        }

        if &bytes[36..40] != DATA_TAG {
            return Err(WaveError::BadDataTag);
        }

        Ok(Self {
            channels: read_u16(bytes, 22),
            sample_rate: read_u32(bytes, 24),
            bits_per_sample: read_u16(bytes, 34),
            data_len: read_u32(bytes, 40),
        })
    }

    /// Serialize a complete 44-byte header.
    ///
    /// The byte rate and block alignment are derived from the channel
    /// count, sample rate, and bit depth.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let bytes_per_sample = u32::from(self.bits_per_sample / 8);
        let block_align = u16::from(self.bits_per_sample / 8) * self.channels;
        let byte_rate = self.sample_rate * u32::from(self.channels) * bytes_per_sample;

        let mut header = [0u8; HEADER_LEN];
        header[0..4].copy_from_slice(RIFF_TAG);
        header[4..8].copy_from_slice(&(36 + self.data_len).to_le_bytes());
        header[8..12].copy_from_slice(WAVE_TAG);
        header[12..16].copy_from_slice(FMT_TAG);
        header[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        header[20..22].copy_from_slice(&PCM_FORMAT.to_le_bytes());
        header[22..24].copy_from_slice(&self.channels.to_le_bytes());
        header[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
        header[32..34].copy_from_slice(&block_align.to_le_bytes());
        header[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        header[36..40].copy_from_slice(DATA_TAG);
        header[40..44].copy_from_slice(&self.data_len.to_le_bytes());
        header
    }
}

/// Read a little-endian u16 at the given offset.
pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Read a little-endian u32 at the given offset.
pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
