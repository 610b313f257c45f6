//! Single hex character <-> nibble
//!
//! Characters are ASCII bytes. Invalid input does not fail: it maps to a
//! reserved sentinel that can never be a valid result.

use crate::errors::Error;

/// Returned by [`char_to_num`] for anything that is not a hex digit.
///
/// Reserved: a nibble never exceeds `0x0F`, so this is never a valid result.
pub const INVALID_NIBBLE: u8 = 0xFF;

/// Returned by [`num_to_char`] for values that do not fit in a nibble.
///
/// Reserved: `'Z'` is not a hex digit, so this is never a valid result.
pub const INVALID_CHAR: u8 = b'Z';

/// Uppercase digits, indexed by nibble value
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Maps `'0'-'9'` to 0-9 and `'a'-'f'`/`'A'-'F'` to 10-15.
///
/// Anything else yields [`INVALID_NIBBLE`].
pub const fn char_to_num(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'f' => ch - b'a' + 10,
        b'A'..=b'F' => ch - b'A' + 10,
        _ => INVALID_NIBBLE,
    }
}

/// Maps 0-9 to `'0'-'9'` and 10-15 to `'A'-'F'`.
///
/// Values of 16 and above yield [`INVALID_CHAR`].
pub const fn num_to_char(num: u8) -> u8 {
    if num < 16 {
        HEX_DIGITS[num as usize]
    } else {
        INVALID_CHAR
    }
}

/// Same as [`char_to_num`], reporting invalid input as an error.
pub const fn try_char_to_num(ch: u8) -> Result<u8, Error> {
    match char_to_num(ch) {
        INVALID_NIBBLE => Err(Error::IllegalCharacter(ch)),
        num => Ok(num),
    }
}

/// Same as [`num_to_char`], reporting invalid input as an error.
pub const fn try_num_to_char(num: u8) -> Result<u8, Error> {
    match num_to_char(num) {
        INVALID_CHAR => Err(Error::NibbleOverflow(num)),
        ch => Ok(ch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters() {
        assert_eq!(char_to_num(b'0'), 0);
        assert_eq!(char_to_num(b'9'), 9);
        assert_eq!(char_to_num(b'a'), 10);
        assert_eq!(char_to_num(b'f'), 15);
        assert_eq!(char_to_num(b'A'), 10);
        assert_eq!(char_to_num(b'F'), 15);
        assert_eq!(char_to_num(b'c'), 12);
    }

    #[test]
    fn neighbours_of_ranges_are_invalid() {
        for ch in [b'/', b':', b'@', b'G', b'`', b'g', b' ', 0x00, 0xFF] {
            assert_eq!(char_to_num(ch), INVALID_NIBBLE);
        }
    }

    #[test]
    fn uppercase_output() {
        assert_eq!(num_to_char(0), b'0');
        assert_eq!(num_to_char(9), b'9');
        assert_eq!(num_to_char(10), b'A');
        assert_eq!(num_to_char(15), b'F');
        assert_eq!(num_to_char(16), INVALID_CHAR);
        assert_eq!(num_to_char(0xFF), INVALID_CHAR);
    }

    #[test]
    fn checked_variants() {
        assert_eq!(try_char_to_num(b'b'), Ok(11));
        assert_eq!(try_char_to_num(b'x'), Err(Error::IllegalCharacter(b'x')));
        assert_eq!(try_num_to_char(12), Ok(b'C'));
        assert_eq!(try_num_to_char(16), Err(Error::NibbleOverflow(16)));
    }
}
