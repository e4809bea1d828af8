//! Frame Configuration
//!
//! Batas ukuran frame untuk `Encoder` dan `Decoder`. Default mengikuti
//! serial link dengan length 16-bit.

use crate::core::MAX_RUN;
use crate::error::{CobsError, Result};

/// Batas frame untuk serial link 16-bit (65535 byte)
pub const SERIAL_MAX_FRAME_LEN: usize = u16::MAX as usize;

/// Konfigurasi codec
///
/// `max_frame_len` membatasi panjang frame hasil encode (worst case) dan
/// panjang frame yang diterima decoder. Ukuran scratch buffer mengikuti
/// nilai ini.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Panjang maksimum satu frame ter-encode, dalam bytes
    pub max_frame_len: usize,
    /// Tolak byte nol di dalam frame saat decode
    pub strict: bool,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::serial()
    }
}

impl FrameConfig {
    /// Config untuk serial link: frame max 65535 byte, decode best-effort
    pub const fn serial() -> Self {
        Self {
            max_frame_len: SERIAL_MAX_FRAME_LEN,
            strict: false,
        }
    }

    pub const fn with_max_frame_len(mut self, max_frame_len: usize) -> Self {
        self.max_frame_len = max_frame_len;
        self
    }

    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validasi config
    ///
    /// Frame kosong pun butuh satu code byte, jadi `max_frame_len` minimal 1.
    pub fn validate(&self) -> Result<()> {
        if self.max_frame_len == 0 {
            return Err(CobsError::InvalidConfig(
                "max_frame_len must be at least 1",
            ));
        }
        Ok(())
    }

    /// Total payload terbesar yang worst-case encode-nya masih muat
    ///
    /// Kebalikan dari `max_encoded_len`: setiap 255 byte budget menampung
    /// 254 byte payload plus satu code byte flush.
    pub const fn max_payload_len(&self) -> usize {
        if self.max_frame_len == 0 {
            return 0;
        }
        let budget = self.max_frame_len - 1;
        let groups = budget / (MAX_RUN + 1);
        let rest = budget % (MAX_RUN + 1);
        let tail = if rest < MAX_RUN { rest } else { MAX_RUN - 1 };
        groups * MAX_RUN + tail
    }
}
