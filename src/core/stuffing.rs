//! Consistent Overhead Byte Stuffing: Encode/Decode
//!
//! Transform murni dari slice ke slice. Tidak ada alokasi, tidak ada state
//! di antara panggilan. Destination selalu milik caller.
//!
//! Format group di wire:
//! ```text
//! [code N][N-1 byte literal]   N < 0xFF -> nol implisit (kecuali group terakhir)
//! [0xFF  ][254 byte literal]   tanpa nol implisit
//! ```

use tracing::debug;

use super::sizing::{max_encoded_len, DELIMITER, FLUSH_CODE};
use crate::error::{CobsError, Result};

/// State encoder yang dibawa lintas segment
///
/// Header, body, dan trailer di-encode sebagai satu stream kontinu,
/// jadi state ini tidak di-reset di antara segment.
struct Stuffer<'a> {
    dst: &'a mut [u8],
    write_index: usize,
    code_index: usize,
    code: u8,
}

impl<'a> Stuffer<'a> {
    /// Slot 0 langsung di-reserve untuk code byte pertama
    #[inline(always)]
    fn new(dst: &'a mut [u8]) -> Self {
        Self {
            dst,
            write_index: 1,
            code_index: 0,
            code: 1,
        }
    }

    /// Tutup run aktif dan reserve slot untuk code byte berikutnya
    #[inline(always)]
    fn close_run(&mut self) {
        self.dst[self.code_index] = self.code;
        self.code = 1;
        self.code_index = self.write_index;
        self.write_index += 1;
    }

    #[inline(always)]
    fn push(&mut self, byte: u8) {
        if byte == DELIMITER {
            self.close_run();
            return;
        }

        self.dst[self.write_index] = byte;
        self.write_index += 1;
        self.code += 1;

        // 254 byte non-zero: forced flush
        if self.code == FLUSH_CODE {
            self.close_run();
        }
    }

    /// Tulis code byte terakhir (selalu, walaupun code == 1)
    #[inline(always)]
    fn finish(self) -> usize {
        self.dst[self.code_index] = self.code;
        self.write_index
    }
}

/// Encode beberapa segment berurutan sebagai satu stream logis
///
/// Returns jumlah byte yang ditulis ke `destination`.
///
/// # Errors
///
/// `DestinationTooSmall` jika `destination` lebih kecil dari
/// `max_encoded_len(total)`. Tidak ada byte yang ditulis pada kasus ini.
pub fn encode_segments(segments: &[&[u8]], destination: &mut [u8]) -> Result<usize> {
    let total = segments
        .iter()
        .fold(0usize, |acc, segment| acc.saturating_add(segment.len()));

    let required = max_encoded_len(total);
    if destination.len() < required {
        debug!(
            required,
            available = destination.len(),
            "cobs encode destination too small"
        );
        return Err(CobsError::DestinationTooSmall {
            required,
            available: destination.len(),
        });
    }

    let mut stuffer = Stuffer::new(destination);
    for segment in segments {
        for &byte in segment.iter() {
            stuffer.push(byte);
        }
    }

    Ok(stuffer.finish())
}

/// Encode header, body, dan trailer ke `destination`
///
/// Hasilnya identik dengan encode konkatenasi ketiganya. Trailer biasanya
/// checksum yang sudah dihitung caller.
///
/// `destination` harus minimal `encoded_buffer_size(header.len(),
/// body.len(), trailer.len())` byte.
///
/// ```
/// use cobs_frame::{encode, encoded_buffer_size};
///
/// let mut out = [0u8; 16];
/// assert!(out.len() >= encoded_buffer_size(2, 2, 1));
/// let n = encode(&[1, 2], &[0, 3], &[4], &mut out).unwrap();
/// assert_eq!(&out[..n], &[3, 1, 2, 3, 3, 4]);
/// ```
#[inline]
pub fn encode(
    header: &[u8],
    body: &[u8],
    trailer: &[u8],
    destination: &mut [u8],
) -> Result<usize> {
    encode_segments(&[header, body, trailer], destination)
}

/// Decode satu frame COBS (tanpa delimiter) ke `destination`
///
/// Best-effort: code byte 0 menghasilkan satu byte nol, byte nol di dalam
/// data di-copy apa adanya, dan source kosong menghasilkan 0 byte.
///
/// # Errors
///
/// - `Truncated` jika code byte mengklaim run lebih panjang dari sisa input.
/// - `DestinationTooSmall` jika output tidak muat. Cukup sediakan
///   `source.len()` byte untuk menghindarinya.
///
/// Isi `destination` tidak valid setelah error.
#[inline]
pub fn decode(source: &[u8], destination: &mut [u8]) -> Result<usize> {
    unstuff(source, destination, false)
}

/// Seperti [`decode`], tapi menolak byte nol di mana pun di dalam frame
///
/// Encoder yang benar tidak pernah menghasilkan nol, jadi nol berarti
/// frame korup atau delimiter ikut terbawa.
#[inline]
pub fn decode_strict(source: &[u8], destination: &mut [u8]) -> Result<usize> {
    unstuff(source, destination, true)
}

fn unstuff(source: &[u8], destination: &mut [u8], strict: bool) -> Result<usize> {
    let size = source.len();
    let mut read_index = 0usize;
    let mut write_index = 0usize;

    while read_index < size {
        let code = source[read_index];

        if strict && code == DELIMITER {
            return Err(reject(CobsError::UnexpectedZero { offset: read_index }));
        }

        // Code 1 = run kosong, selalu valid
        if code != 1 && read_index + usize::from(code) > size {
            return Err(reject(CobsError::Truncated {
                offset: read_index,
                code,
                claimed: usize::from(code) - 1,
                remaining: size - read_index - 1,
            }));
        }

        read_index += 1;

        let run = usize::from(code).saturating_sub(1);
        let data = &source[read_index..read_index + run];

        if strict {
            if let Some(pos) = data.iter().position(|&b| b == DELIMITER) {
                return Err(reject(CobsError::UnexpectedZero {
                    offset: read_index + pos,
                }));
            }
        }

        let available = destination.len();
        let out = destination
            .get_mut(write_index..write_index + run)
            .ok_or_else(|| {
                reject(CobsError::DestinationTooSmall {
                    required: write_index + run,
                    available,
                })
            })?;
        out.copy_from_slice(data);

        read_index += run;
        write_index += run;

        // Group penuh dan group terakhir tidak punya nol implisit
        if code != FLUSH_CODE && read_index != size {
            let slot = destination.get_mut(write_index).ok_or_else(|| {
                reject(CobsError::DestinationTooSmall {
                    required: write_index + 1,
                    available,
                })
            })?;
            *slot = DELIMITER;
            write_index += 1;
        }
    }

    Ok(write_index)
}

#[cold]
fn reject(err: CobsError) -> CobsError {
    debug!(error = %err, "cobs decode rejected frame");
    err
}
