#![forbid(unsafe_code)]

//! Conversions between UTF-8 bytes and wide (32-bit) characters.
//!
//! This module speaks the *extended* UTF-8 scheme from the original encoding
//! proposal and [RFC 2279][rfc2279]: sequences run from 1 to 6 bytes and can
//! carry any code point up to `0x7FFF_FFFF`. Later standards cut the range
//! down to `0x10_FFFF` (at most 4 bytes) and banned the surrogate range and
//! overlong forms, but none of that trimming is enforced here. Any bit
//! pattern the 6-byte scheme can express passes through unchanged, so all
//! "modern" UTF-8 data is accepted, along with quite a bit more.
//!
//! [rfc2279]: https://datatracker.ietf.org/doc/html/rfc2279
//!
//! The high bits of a byte say what part of a sequence it is:
//!
//! | leading bits | role | payload bits |
//! |:-|:-|:-|
//! | `0xxxxxxx` | complete sequence | 7 |
//! | `110xxxxx` | leader, 1 more byte | 11 |
//! | `1110xxxx` | leader, 2 more bytes | 16 |
//! | `11110xxx` | leader, 3 more bytes | 21 |
//! | `111110xx` | leader, 4 more bytes | 26 |
//! | `1111110x` | leader, 5 more bytes | 31 |
//! | `10xxxxxx` | continuation | 6 per byte |
//!
//! Payload bits pack big-endian: the leader holds the most significant bits
//! and each continuation byte holds the next six bits down. The bytes `0xFE`
//! and `0xFF` can't appear anywhere in a sequence.
//!
//! ## Termination and Capacity
//!
//! Inputs work like C strings: scanning stops at the first zero unit (`0x00`
//! byte, or `0` wide character), or at the end of the slice when no zero
//! shows up. The zero itself is never part of the conversion.
//!
//! Outputs are caller-provided slices, and the slice length is the whole
//! capacity. The converters never write past the slice, they never emit a
//! partial sequence, and they put a zero terminator after the converted data
//! whenever there's at least one slot for it. One slot is always held back
//! for that terminator, so a slice of length `k` holds at most `k - 1`
//! converted units.
//!
//! The [`widechars_to_utf8_vec`] and [`utf8_to_widechars_vec`] functions
//! (`alloc` feature) size their own output instead, and skip the terminator.

use thiserror::Error;

mod len;
pub use len::*;

mod transcode;
pub use transcode::*;

/// Data wasn't a valid encoding.
///
/// Either a byte sequence that doesn't follow the scheme, or a wide
/// character above the encodable maximum of `0x7FFF_FFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("not a valid character encoding")]
pub struct InvalidEncoding;

/// Bytes needed to encode the code point, or `None` if it's out of range.
#[inline]
#[must_use]
pub const fn encoded_len(widechar: u32) -> Option<usize> {
  match widechar {
    0x0000_0000..=0x0000_007F => Some(1),
    0x0000_0080..=0x0000_07FF => Some(2),
    0x0000_0800..=0x0000_FFFF => Some(3),
    0x0001_0000..=0x001F_FFFF => Some(4),
    0x0020_0000..=0x03FF_FFFF => Some(5),
    0x0400_0000..=0x7FFF_FFFF => Some(6),
    _ => None,
  }
}

/// How many continuation bytes a sequence led by this byte has, or `None`
/// when the byte can't lead a sequence.
#[inline]
#[must_use]
const fn follow_count(byte: u8) -> Option<usize> {
  match byte {
    0x00..=0x7F => Some(0),
    0xC0..=0xDF => Some(1),
    0xE0..=0xEF => Some(2),
    0xF0..=0xF7 => Some(3),
    0xF8..=0xFB => Some(4),
    0xFC..=0xFD => Some(5),
    // continuation bytes, 0xFE, and 0xFF
    _ => None,
  }
}

/// Continuation bytes are `10xxxxxx`.
#[inline]
#[must_use]
const fn is_continuation(byte: u8) -> bool {
  byte & 0b1100_0000 == 0b1000_0000
}
