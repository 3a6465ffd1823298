use super::*;

/// Counts the code points encoded by the bytes.
///
/// Scanning stops at the first zero byte, or at the end of the slice. The
/// byte count of the input is *not* what's returned: a multi-byte sequence
/// counts as one code point.
///
/// ## Failure
/// * A continuation byte appears where a leader should be.
/// * A leader (or any non-continuation byte) appears where a continuation
///   should be.
/// * The input ends while a sequence is still missing continuation bytes.
#[inline]
pub const fn count_codepoints(bytes: &[u8]) -> Result<usize, InvalidEncoding> {
  let mut count = 0;
  let mut skip = 0;
  let mut i = 0;
  while i < bytes.len() && bytes[i] != 0 {
    let b = bytes[i];
    if skip > 0 {
      if !is_continuation(b) {
        return Err(InvalidEncoding);
      }
      skip -= 1;
    } else {
      skip = match follow_count(b) {
        Some(f) => f,
        None => return Err(InvalidEncoding),
      };
      count += 1;
    }
    i += 1;
  }
  if skip > 0 {
    return Err(InvalidEncoding);
  }
  Ok(count)
}

/// Counts code points like [`count_codepoints`], but scans at most
/// `max_bytes` bytes of input.
///
/// The budget is spent per byte scanned, not per code point. A leader byte
/// counts its code point right away, so running the budget out in the middle
/// of a sequence still counts that sequence, and is a normal stop rather
/// than an error. The missing-continuation failure only applies when the
/// *input* ends before the budget does.
#[inline]
pub const fn count_codepoints_bounded(
  bytes: &[u8], max_bytes: usize,
) -> Result<usize, InvalidEncoding> {
  let mut count = 0;
  let mut skip = 0;
  let mut i = 0;
  while i < bytes.len() && i < max_bytes && bytes[i] != 0 {
    let b = bytes[i];
    if skip > 0 {
      if !is_continuation(b) {
        return Err(InvalidEncoding);
      }
      skip -= 1;
    } else {
      skip = match follow_count(b) {
        Some(f) => f,
        None => return Err(InvalidEncoding),
      };
      count += 1;
    }
    i += 1;
  }
  if skip > 0 && i < max_bytes {
    return Err(InvalidEncoding);
  }
  Ok(count)
}

/// Counts the bytes needed to encode the wide characters as UTF-8.
///
/// Scanning stops at the first zero wide character, or at the end of the
/// slice. The count doesn't include any terminator.
///
/// ## Failure
/// * Any wide character is above the encodable maximum of `0x7FFF_FFFF`.
#[inline]
pub const fn count_utf8_bytes(widechars: &[u32]) -> Result<usize, InvalidEncoding> {
  let mut total = 0;
  let mut i = 0;
  while i < widechars.len() && widechars[i] != 0 {
    total += match encoded_len(widechars[i]) {
      Some(len) => len,
      None => return Err(InvalidEncoding),
    };
    i += 1;
  }
  Ok(total)
}

/// Counts encoded bytes like [`count_utf8_bytes`], but scans at most
/// `max_widechars` wide characters of input.
#[inline]
pub const fn count_utf8_bytes_bounded(
  widechars: &[u32], max_widechars: usize,
) -> Result<usize, InvalidEncoding> {
  let mut total = 0;
  let mut i = 0;
  while i < widechars.len() && i < max_widechars && widechars[i] != 0 {
    total += match encoded_len(widechars[i]) {
      Some(len) => len,
      None => return Err(InvalidEncoding),
    };
    i += 1;
  }
  Ok(total)
}
