use super::*;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Encodes wide characters as UTF-8 into `out`.
///
/// Characters are encoded until the input hits its zero terminator (or the
/// end of the slice), until the next sequence wouldn't fit in the capacity
/// that's left, or until a wide character is above the encodable maximum.
/// The last two just stop the conversion early, with no error and no partial
/// sequence. One slot of `out` is always held back for the zero terminator,
/// which is written whenever `out` isn't empty.
///
/// Returns the number of bytes written, not counting the terminator.
#[inline]
pub fn widechars_to_utf8(out: &mut [u8], widechars: &[u32]) -> usize {
  let mut used = 0;
  let mut i = 0;
  while i < widechars.len() && widechars[i] != 0 {
    let wc = widechars[i];
    let len = match encoded_len(wc) {
      Some(len) if out.len() - used > len => len,
      _ => break,
    };
    match len {
      1 => out[used] = wc as u8,
      2 => {
        out[used] = 0xC0 | (wc >> 6) as u8;
        out[used + 1] = 0x80 | (wc & 0x3F) as u8;
      }
      3 => {
        out[used] = 0xE0 | (wc >> 12) as u8;
        out[used + 1] = 0x80 | ((wc >> 6) & 0x3F) as u8;
        out[used + 2] = 0x80 | (wc & 0x3F) as u8;
      }
      4 => {
        out[used] = 0xF0 | (wc >> 18) as u8;
        out[used + 1] = 0x80 | ((wc >> 12) & 0x3F) as u8;
        out[used + 2] = 0x80 | ((wc >> 6) & 0x3F) as u8;
        out[used + 3] = 0x80 | (wc & 0x3F) as u8;
      }
      5 => {
        out[used] = 0xF8 | (wc >> 24) as u8;
        out[used + 1] = 0x80 | ((wc >> 18) & 0x3F) as u8;
        out[used + 2] = 0x80 | ((wc >> 12) & 0x3F) as u8;
        out[used + 3] = 0x80 | ((wc >> 6) & 0x3F) as u8;
        out[used + 4] = 0x80 | (wc & 0x3F) as u8;
      }
      6 => {
        out[used] = 0xFC | (wc >> 30) as u8;
        out[used + 1] = 0x80 | ((wc >> 24) & 0x3F) as u8;
        out[used + 2] = 0x80 | ((wc >> 18) & 0x3F) as u8;
        out[used + 3] = 0x80 | ((wc >> 12) & 0x3F) as u8;
        out[used + 4] = 0x80 | ((wc >> 6) & 0x3F) as u8;
        out[used + 5] = 0x80 | (wc & 0x3F) as u8;
      }
      _ => unreachable!(),
    }
    used += len;
    i += 1;
  }
  if let Some(terminator) = out.get_mut(used) {
    *terminator = 0;
  }
  used
}

/// Decodes UTF-8 bytes into wide characters in `out`.
///
/// The whole input is scanned for well-formedness, up to its zero terminator
/// or the end of the slice, even after `out` fills up. Decoded characters
/// that don't fit are silently dropped. One slot of `out` is always held
/// back for the zero terminator, which is written on success whenever `out`
/// isn't empty.
///
/// Returns the number of wide characters written, not counting the
/// terminator.
///
/// ## Failure
/// * Any of the [`count_codepoints`] failure cases. When this fails, a
///   prefix of `out` may already hold decoded characters, and no terminator
///   has been placed.
#[inline]
pub fn utf8_to_widechars(out: &mut [u32], bytes: &[u8]) -> Result<usize, InvalidEncoding> {
  let mut used = 0;
  let mut skip = 0;
  let mut composite: u32 = 0;
  let mut i = 0;
  while i < bytes.len() && bytes[i] != 0 {
    let b = bytes[i];
    if skip > 0 {
      if !is_continuation(b) {
        return Err(InvalidEncoding);
      }
      composite = (composite << 6) | (b & 0x3F) as u32;
      skip -= 1;
    } else {
      skip = match follow_count(b) {
        Some(f) => f,
        None => return Err(InvalidEncoding),
      };
      composite = match skip {
        0 => b as u32,
        1 => (b & 0x1F) as u32,
        2 => (b & 0x0F) as u32,
        3 => (b & 0x07) as u32,
        4 => (b & 0x03) as u32,
        _ => (b & 0x01) as u32,
      };
    }
    if skip == 0 && out.len() - used >= 2 {
      out[used] = composite;
      used += 1;
    }
    i += 1;
  }
  if skip > 0 {
    return Err(InvalidEncoding);
  }
  if let Some(terminator) = out.get_mut(used) {
    *terminator = 0;
  }
  Ok(used)
}

/// Encodes wide characters as a newly allocated vec of UTF-8 bytes.
///
/// The vec holds exactly the encoded bytes, with no terminator on the end.
/// There's no capacity to truncate against here, so an out-of-range wide
/// character is an error instead of a stopping point.
///
/// ## Failure
/// * Any wide character is above the encodable maximum.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn widechars_to_utf8_vec(widechars: &[u32]) -> Result<Vec<u8>, InvalidEncoding> {
  let total = count_utf8_bytes(widechars)?;
  let mut v: Vec<u8> = Vec::new();
  v.resize(total + 1, 0);
  let wrote = widechars_to_utf8(&mut v, widechars);
  v.truncate(wrote);
  Ok(v)
}

/// Decodes UTF-8 bytes as a newly allocated vec of wide characters.
///
/// The vec holds exactly the decoded characters, with no terminator on the
/// end.
///
/// ## Failure
/// * Any of the [`count_codepoints`] failure cases.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn utf8_to_widechars_vec(bytes: &[u8]) -> Result<Vec<u32>, InvalidEncoding> {
  let count = count_codepoints(bytes)?;
  let mut v: Vec<u32> = Vec::new();
  v.resize(count + 1, 0);
  let wrote = utf8_to_widechars(&mut v, bytes)?;
  v.truncate(wrote);
  Ok(v)
}
