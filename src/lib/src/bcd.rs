//! Packed BCD <-> decimal for a single byte.
//!
//! Neither direction validates its input: nibbles above 9 or decimals
//! above 99 go through the same arithmetic and the result is garbage.

/// Packed BCD to decimal, `0x42` -> `42`.
///
/// The high nibble is the tens digit and the low nibble the ones digit.
/// Nibbles above 9 are not rejected, e.g. `0xAF` yields `10 * 10 + 15`.
pub const fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0f)
}

/// Decimal to packed BCD, `42` -> `0x42`.
///
/// Only 0-99 is meaningful. Larger values are not rejected, the tens
/// digit is shifted into the high nibble and whatever does not fit in
/// the byte is lost, e.g. `123` yields `0xC3`.
pub const fn dec_to_bcd(dec: u8) -> u8 {
    ((dec / 10) << 4) | (dec % 10)
}
