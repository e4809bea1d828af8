//! Core module: Transform COBS murni
//!
//! Prinsip desain:
//! - Stateless: Tidak ada state di antara panggilan
//! - No-Allocation: Encode/decode langsung ke buffer milik caller
//! - Bounds-checked: Input korup menghasilkan error, bukan panic

mod sizing;
mod stuffing;

pub use sizing::{
    encoded_buffer_size, encoded_len, max_decoded_len, max_encoded_len, DELIMITER, FLUSH_CODE,
    MAX_RUN,
};
pub use stuffing::{decode, decode_strict, encode, encode_segments};
