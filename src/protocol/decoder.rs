//! Zero-Allocation Frame Decoder
//!
//! Decode ke pre-allocated buffer, dengan validasi ukuran frame.

use tracing::{debug, trace};

use super::config::FrameConfig;
use crate::core::{decode, decode_strict, max_decoded_len};
use crate::error::{CobsError, Result};

/// Pre-allocated decoder buffer
///
/// Input adalah satu frame tanpa delimiter. Caller yang memotong stream
/// di byte nol.
pub struct Decoder {
    buffer: Box<[u8]>,
    config: FrameConfig,
    read_len: usize,
}

impl Decoder {
    /// Membuat decoder dengan buffer sesuai config
    ///
    /// Hasil decode selalu lebih pendek dari frame, jadi buffer cukup
    /// `max_frame_len - 1` byte.
    pub fn new(config: FrameConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            buffer: vec![0u8; max_decoded_len(config.max_frame_len)].into_boxed_slice(),
            config,
            read_len: 0,
        })
    }

    /// Reset decoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.read_len = 0;
    }

    /// Decode satu frame
    ///
    /// Returns slice ke payload asli, atau error jika frame korup atau
    /// melebihi `max_frame_len`.
    pub fn decode(&mut self, frame: &[u8]) -> Result<&[u8]> {
        self.read_len = 0;

        if frame.len() > self.config.max_frame_len {
            debug!(
                len = frame.len(),
                max = self.config.max_frame_len,
                "frame exceeds decoder limit"
            );
            return Err(CobsError::FrameTooLarge {
                len: frame.len(),
                max: self.config.max_frame_len,
            });
        }

        let n = if self.config.strict {
            decode_strict(frame, &mut self.buffer)?
        } else {
            decode(frame, &mut self.buffer)?
        };
        self.read_len = n;

        trace!(encoded_len = frame.len(), decoded_len = n, "frame decoded");

        Ok(&self.buffer[..n])
    }

    /// Payload terakhir yang berhasil di-decode
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.read_len]
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
