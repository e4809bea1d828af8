//! Protocol Layer: Reusable Frame Codec
//!
//! Prinsip desain:
//! - Pre-allocated: Scratch buffer dialokasikan sekali saat init
//! - Bounded: Ukuran frame dibatasi oleh `FrameConfig`
//! - No allocation: Hot path encode/decode tidak pernah alokasi

mod config;
mod decoder;
mod encoder;

pub use config::{FrameConfig, SERIAL_MAX_FRAME_LEN};
pub use decoder::Decoder;
pub use encoder::Encoder;
