//! Hex text <-> integers and byte arrays
//!
//! All buffers belong to the caller. Each function takes an explicit
//! length next to its input slice and works on the shorter of the two,
//! so nothing is ever read or written out of bounds. An empty slice
//! stands for an absent buffer.
//!
//! The lenient functions only check structure (absent buffer, zero
//! length). Text that is not hex goes through the digit arithmetic
//! unchecked and produces garbage nibbles: the caller guarantees
//! well-formed hex text. The `try_` functions validate the content.

use crate::errors::Error;
use crate::nibble::char_to_num;
use crate::nibble::num_to_char;
use crate::nibble::try_char_to_num;

/// Hex digits that fit in a `u32`; [`char_array_to_u32`] ignores the rest.
pub const U32_HEX_DIGITS: usize = 8;

/// Two digits and a separating space per encoded byte
const CHARS_PER_BYTE: usize = 3;

/// Terminates the encoded text, like a C string
const TERMINATOR: u8 = 0x00;

const SEPARATOR: u8 = b' ';

#[inline]
const fn is_skipped(ch: u8) -> bool {
    ch == SEPARATOR || ch == TERMINATOR
}

/// Nibble value by subtracting the ASCII offset of the digit range.
///
/// No validation: anything outside `0-9`, `a-f`, `A-F` yields garbage.
#[inline]
const fn unchecked_nibble(ch: u8) -> u8 {
    let ch = ch.to_ascii_uppercase();
    if ch > b'9' {
        ch.wrapping_sub(0x37)
    } else {
        ch.wrapping_sub(0x30)
    }
}

/// Accumulates up to the first 8 hex digits of `src` into `dst`.
///
/// Each digit shifts `*dst` left by 4 and ORs the digit in, so with fewer
/// than 8 digits the previous low bits of `*dst` end up in the high ones.
/// Digits past the 8th are ignored. Returns `false` if `src` is empty
/// or `src_len` is zero, and leaves `*dst` untouched then.
///
/// Digits are not validated. An invalid one contributes
/// [`INVALID_NIBBLE`](crate::INVALID_NIBBLE), whose upper bits spill
/// into the digits before it: `"G1"` accumulates to `0xFF1` rather than
/// failing.
pub fn char_array_to_u32(dst: &mut u32, src: &[u8], src_len: u8) -> bool {
    let len = (src_len as usize).min(src.len()).min(U32_HEX_DIGITS);
    if len == 0 {
        return false;
    }

    for &ch in &src[..len] {
        *dst <<= 4;
        *dst |= char_to_num(ch.to_ascii_uppercase()) as u32;
    }

    true
}

/// Parses up to the first 8 hex digits of `src` into a fresh `u32`,
/// rejecting anything that is not a hex digit.
pub fn try_char_array_to_u32(src: &[u8]) -> Result<u32, Error> {
    if src.is_empty() {
        return Err(Error::EmptyInput);
    }

    src.iter()
        .take(U32_HEX_DIGITS)
        .try_fold(0u32, |acc, &ch| -> Result<u32, Error> {
            Ok((acc << 4) | try_char_to_num(ch)? as u32)
        })
}

/// Size of the buffer [`byte_array_to_str`] needs for `byte_array_len`
/// bytes, terminator included: 0 for no bytes, `3 * len + 1` otherwise.
///
/// Wraps around for lengths whose text would not fit in a `u32`.
pub const fn get_byte_array_to_str_len(byte_array_len: u32) -> u32 {
    if byte_array_len == 0 {
        0
    } else {
        byte_array_len
            .wrapping_mul(CHARS_PER_BYTE as u32)
            .wrapping_add(1)
    }
}

fn write_hex_str(out: &mut [u8], bytes: &[u8]) -> Result<usize, Error> {
    let needed = bytes
        .len()
        .saturating_mul(CHARS_PER_BYTE)
        .saturating_add(1);
    if out.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    for (chunk, &byte) in out.chunks_exact_mut(CHARS_PER_BYTE).zip(bytes) {
        chunk[0] = num_to_char(byte >> 4);
        chunk[1] = num_to_char(byte & 0x0f);
        chunk[2] = SEPARATOR;
    }
    out[needed - 1] = TERMINATOR;

    Ok(needed)
}

/// Writes `byte_array` into `out` as uppercase hex, each byte as two
/// digits followed by a space, then a NUL terminator after the last
/// space: `[0x01, 0xAB]` becomes `"01 AB \0"`.
///
/// Exactly [`get_byte_array_to_str_len`] bytes are written. Returns
/// `false` if either buffer is empty, `byte_array_len` is zero, or `out`
/// is shorter than the required size; `out` is untouched then.
pub fn byte_array_to_str(out: &mut [u8], byte_array: &[u8], byte_array_len: u32) -> bool {
    let len = (byte_array_len as usize).min(byte_array.len());
    if out.is_empty() || len == 0 {
        return false;
    }

    write_hex_str(out, &byte_array[..len]).is_ok()
}

/// Same as [`byte_array_to_str`] for the whole of `bytes`, returning the
/// number of bytes written to `out`, terminator included.
pub fn try_byte_array_to_str(out: &mut [u8], bytes: &[u8]) -> Result<usize, Error> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }

    write_hex_str(out, bytes)
}

/// Decodes hex text into `byte_array`, returning the number of bytes
/// decoded, 0 if either buffer is empty or `text_len` is zero.
///
/// Spaces and NULs between bytes are skipped, they do not end the
/// text. Otherwise digits are taken two at a time, so a separator inside
/// a pair is decoded as a digit. A last lone digit is paired with a NUL,
/// as if the C string terminator followed it. Decoding stops when
/// `byte_array` is full.
///
/// No input validation: the caller guarantees well-formed hex text.
/// Non-hex characters decode to garbage nibbles.
pub fn str_to_byte_array(byte_array: &mut [u8], text: &[u8], text_len: u32) -> u32 {
    let len = (text_len as usize).min(text.len());
    if byte_array.is_empty() || len == 0 {
        return 0;
    }

    let text = &text[..len];
    let mut count = 0;
    let mut i = 0;

    while i < len && count < byte_array.len() {
        if is_skipped(text[i]) {
            i += 1;
            continue;
        }

        let high = unchecked_nibble(text[i]);
        let low = unchecked_nibble(text.get(i + 1).copied().unwrap_or(TERMINATOR));
        byte_array[count] = (high << 4) | low;
        count += 1;

        i += 2;
    }

    count as u32
}

/// Strict counterpart of [`str_to_byte_array`] over the whole of `text`.
///
/// Skips spaces and NULs the same way, but rejects non-hex digits, a
/// lone trailing digit and output that does not fit in `out`.
pub fn try_str_to_byte_array(out: &mut [u8], text: &[u8]) -> Result<usize, Error> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut count = 0;
    let mut i = 0;

    while i < text.len() {
        if is_skipped(text[i]) {
            i += 1;
            continue;
        }

        let high = try_char_to_num(text[i])?;
        let low = match text.get(i + 1) {
            Some(&ch) => try_char_to_num(ch)?,
            None => return Err(Error::OddDigitCount),
        };

        let available = out.len();
        let slot = out.get_mut(count).ok_or(Error::BufferTooSmall {
            needed: count + 1,
            available,
        })?;
        *slot = (high << 4) | low;
        count += 1;

        i += 2;
    }

    Ok(count)
}
