//! Conversion primitives for low-level communication code
//!
//! Every function here is a pure transformation over caller-owned
//! data: nothing allocates, nothing keeps state, nothing does I/O.
//!
//! * [`nibble`]: single hex character <-> 4-bit value,
//! * [`endian`]: byte order swap for 16 and 32-bit integers,
//! * [`bcd`]: packed BCD <-> decimal,
//! * [`hexstr`]: hex text <-> integers and byte arrays.
//!
//! The plain functions keep the sentinel (`0xFF`, `'Z'`) and boolean
//! contracts of the C library they are compatible with. The `try_`
//! variants report an [`Error`] instead, which implements
//! `std::error::Error` with the `std` feature (on by default).

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bcd;
pub mod endian;
mod errors;
pub mod hexstr;
pub mod nibble;


pub use crate::bcd::*;
pub use crate::endian::*;
pub use crate::errors::Error;
pub use crate::hexstr::*;
pub use crate::nibble::*;
