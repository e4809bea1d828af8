//! Error types untuk cobs-frame.

use thiserror::Error;

/// Semua kegagalan yang bisa dilaporkan oleh transform dan codec.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CobsError {
    /// Destination buffer lebih kecil dari yang dibutuhkan.
    #[error("destination too small: need {required} bytes, have {available}")]
    DestinationTooSmall { required: usize, available: usize },

    /// Code byte mengklaim run yang lebih panjang dari sisa input.
    #[error(
        "truncated run at offset {offset}: code {code:#04x} claims {claimed} bytes, {remaining} remain"
    )]
    Truncated {
        offset: usize,
        code: u8,
        claimed: usize,
        remaining: usize,
    },

    /// Byte nol di dalam frame (hanya di strict decode).
    #[error("unexpected zero byte at offset {offset}")]
    UnexpectedZero { offset: usize },

    /// Frame melebihi batas `max_frame_len` dari config.
    #[error("frame of {len} bytes exceeds limit of {max} bytes")]
    FrameTooLarge { len: usize, max: usize },

    /// Config tidak valid.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

/// Result type alias menggunakan CobsError.
pub type Result<T> = std::result::Result<T, CobsError>;
