//! Byte order swap
//!
//! Converts between big and little-endian representations. Every bit
//! pattern is a valid input and swapping twice gives the input back.

/// Reverses the byte order of a 16-bit value, `0x1234` -> `0x3412`.
#[inline]
pub const fn byte_swap_16(value: u16) -> u16 {
    ((value & 0xFF00) >> 8) | ((value & 0x00FF) << 8)
}

/// Reverses the byte order of a 32-bit value, `0x12345678` -> `0x78563412`.
#[inline]
pub const fn byte_swap_32(value: u32) -> u32 {
    ((value & 0xFF00_0000) >> 24)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x0000_00FF) << 24)
}
