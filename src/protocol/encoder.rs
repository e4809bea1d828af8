//! Zero-Allocation Frame Encoder
//!
//! Encode langsung ke pre-allocated buffer.
//! Tidak ada alokasi setelah inisialisasi.

use tracing::{debug, trace};

use super::config::FrameConfig;
use crate::core::{encode_segments, max_encoded_len};
use crate::error::{CobsError, Result};

/// Pre-allocated encoder buffer
///
/// Semua operasi encode dilakukan ke buffer internal berukuran
/// `max_frame_len`. Setiap encode menimpa frame sebelumnya.
pub struct Encoder {
    buffer: Box<[u8]>,
    config: FrameConfig,
    write_pos: usize,
}

impl Encoder {
    /// Membuat encoder dengan buffer sesuai config
    pub fn new(config: FrameConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            buffer: vec![0u8; config.max_frame_len].into_boxed_slice(),
            config,
            write_pos: 0,
        })
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Encode header, body, dan trailer sebagai satu frame
    ///
    /// Returns slice ke frame ter-encode (tanpa delimiter).
    #[inline]
    pub fn encode(&mut self, header: &[u8], body: &[u8], trailer: &[u8]) -> Result<&[u8]> {
        self.encode_segments(&[header, body, trailer])
    }

    /// Encode sejumlah segment berurutan sebagai satu frame
    ///
    /// Gagal dengan `FrameTooLarge` jika worst-case encode melebihi
    /// `max_frame_len`, walaupun data aktualnya mungkin muat.
    pub fn encode_segments(&mut self, segments: &[&[u8]]) -> Result<&[u8]> {
        self.write_pos = 0;

        let raw_len = segments
            .iter()
            .fold(0usize, |acc, segment| acc.saturating_add(segment.len()));
        let required = max_encoded_len(raw_len);

        if required > self.config.max_frame_len {
            debug!(
                raw_len,
                required,
                max = self.config.max_frame_len,
                "frame exceeds encoder limit"
            );
            return Err(CobsError::FrameTooLarge {
                len: required,
                max: self.config.max_frame_len,
            });
        }

        let n = encode_segments(segments, &mut self.buffer)?;
        self.write_pos = n;

        trace!(raw_len, encoded_len = n, "frame encoded");

        Ok(&self.buffer[..n])
    }

    /// Frame terakhir yang berhasil di-encode
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
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
