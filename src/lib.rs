//! cobs-frame - Consistent Overhead Byte Stuffing untuk Serial Framing
//!
//! COBS menghapus semua byte nol dari payload biner, sehingga byte nol bisa
//! dipakai sebagai delimiter packet di transport byte-oriented (RS-232,
//! RS-485, USB CDC). Overhead konsisten: minimal 1 byte, plus 1 byte per
//! 254 byte data.
//!
//! Arsitektur:
//! - `core`: Transform murni `encode` / `decode` ke buffer milik caller
//! - `protocol`: `Encoder` / `Decoder` dengan pre-allocated buffer
//! - `error`: `CobsError` untuk semua kegagalan
//!
//! Delimiter frame TIDAK ditulis oleh crate ini. Caller menulis byte nol
//! sebelum/sesudah frame di wire.
//!
//! ```
//! use cobs_frame::{decode, encode, encoded_buffer_size};
//!
//! let header = [0x01, 0x00];
//! let body = b"sensor\x00data";
//! let checksum = [0x5A, 0x00];
//!
//! let mut frame = vec![0u8; encoded_buffer_size(header.len(), body.len(), checksum.len())];
//! let n = encode(&header, body, &checksum, &mut frame).unwrap();
//! assert!(!frame[..n].contains(&0));
//!
//! let mut payload = vec![0u8; n];
//! let m = decode(&frame[..n], &mut payload).unwrap();
//! assert_eq!(&payload[..m], b"\x01\x00sensor\x00data\x5A\x00");
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod protocol;

pub use crate::core::{
    decode, decode_strict, encode, encode_segments, encoded_buffer_size, encoded_len,
    max_decoded_len, max_encoded_len, DELIMITER, FLUSH_CODE, MAX_RUN,
};
pub use crate::error::{CobsError, Result};
pub use crate::protocol::{Decoder, Encoder, FrameConfig, SERIAL_MAX_FRAME_LEN};
