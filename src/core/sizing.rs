//! Buffer Sizing untuk COBS
//!
//! Overhead COBS konsisten: satu code byte di awal frame, plus satu code
//! byte tambahan per 254 byte data pada worst case (data tanpa byte nol).

/// Byte delimiter frame. Tidak pernah muncul di output encode.
pub const DELIMITER: u8 = 0x00;

/// Panjang run maksimum per group sebelum forced flush.
pub const MAX_RUN: usize = 254;

/// Code byte untuk group penuh (254 byte literal, tanpa nol implisit).
pub const FLUSH_CODE: u8 = 0xFF;

/// Kapasitas minimum destination untuk encode `len` byte.
///
/// Saturating di `usize::MAX`, jadi tidak pernah overflow.
#[inline(always)]
pub const fn max_encoded_len(len: usize) -> usize {
    len.saturating_add(len / MAX_RUN).saturating_add(1)
}

/// Kapasitas minimum destination untuk encode header + body + trailer.
///
/// `total + total / 254 + 1`, dengan `total` jumlah ketiga segment.
#[inline(always)]
pub const fn encoded_buffer_size(
    header_size: usize,
    body_size: usize,
    trailer_size: usize,
) -> usize {
    let total = header_size
        .saturating_add(body_size)
        .saturating_add(trailer_size);
    max_encoded_len(total)
}

/// Panjang output maksimum saat decode `encoded_len` byte.
#[inline(always)]
pub const fn max_decoded_len(encoded_len: usize) -> usize {
    encoded_len.saturating_sub(1)
}

/// Panjang encode yang EXACT, tanpa menulis apa pun.
///
/// Setiap byte input menghasilkan satu byte output (data atau code byte
/// pengganti nol), ditambah satu code byte per forced flush dan satu
/// code byte pembuka.
pub fn encoded_len(segments: &[&[u8]]) -> usize {
    let mut len = 1usize;
    let mut run = 0usize;

    for &byte in segments.iter().flat_map(|segment| segment.iter()) {
        len += 1;
        if byte == DELIMITER {
            run = 0;
        } else {
            run += 1;
            if run == MAX_RUN {
                len += 1;
                run = 0;
            }
        }
    }

    len
}
