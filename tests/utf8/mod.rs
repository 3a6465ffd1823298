use quickcheck::QuickCheck;
use recode::utf8::{count_codepoints, count_utf8_bytes, utf8_to_widechars, widechars_to_utf8};
use walkdir::WalkDir;

#[cfg(feature = "alloc")]
use recode::utf8::{utf8_to_widechars_vec, widechars_to_utf8_vec};

#[test]
fn slice_paths_round_trip_with_exact_capacity() {
  fn prop(raw: Vec<u32>) -> bool {
    let wides: Vec<u32> = raw.iter().map(|r| 1 + (r % 0x7FFF_FFFE)).collect();
    let needed = match count_utf8_bytes(&wides) {
      Ok(n) => n,
      Err(_) => return false,
    };
    let mut bytes = vec![0_u8; needed + 1];
    if widechars_to_utf8(&mut bytes, &wides) != needed {
      return false;
    }
    let mut back = vec![0_u32; wides.len() + 1];
    match utf8_to_widechars(&mut back, &bytes) {
      Ok(n) => n == wides.len() && back[..n] == wides[..],
      Err(_) => false,
    }
  }
  QuickCheck::new().tests(500).quickcheck(prop as fn(Vec<u32>) -> bool);
}

#[cfg(feature = "alloc")]
#[test]
fn vec_paths_round_trip_unicode_scalars() {
  fn prop(raw: Vec<u32>) -> bool {
    let wides: Vec<u32> = raw.iter().map(|r| 1 + (r % 0x10_FFFF)).collect();
    let bytes = match widechars_to_utf8_vec(&wides) {
      Ok(b) => b,
      Err(_) => return false,
    };
    match utf8_to_widechars_vec(&bytes) {
      Ok(back) => back == wides,
      Err(_) => false,
    }
  }
  QuickCheck::new().tests(500).quickcheck(prop as fn(Vec<u32>) -> bool);
}

#[cfg(feature = "alloc")]
#[test]
fn counting_agrees_with_transcoding() {
  fn prop(raw: Vec<u32>) -> bool {
    let wides: Vec<u32> = raw.iter().map(|r| 1 + (r % 0x7FFF_FFFE)).collect();
    let bytes = match widechars_to_utf8_vec(&wides) {
      Ok(b) => b,
      Err(_) => return false,
    };
    count_codepoints(&bytes) == Ok(wides.len()) && count_utf8_bytes(&wides) == Ok(bytes.len())
  }
  QuickCheck::new().tests(500).quickcheck(prop as fn(Vec<u32>) -> bool);
}

#[test]
fn ascii_text_encodes_to_itself() {
  fn prop(text: String) -> bool {
    let ascii: Vec<u32> =
      text.chars().filter(|c| c.is_ascii() && *c != '\0').map(|c| c as u32).collect();
    let mut bytes = vec![0_u8; ascii.len() + 1];
    if widechars_to_utf8(&mut bytes, &ascii) != ascii.len() {
      return false;
    }
    ascii.iter().zip(bytes.iter()).all(|(w, b)| *w == *b as u32)
  }
  QuickCheck::new().tests(200).quickcheck(prop as fn(String) -> bool);
}

#[test]
fn encode_truncation_stays_in_bounds_and_terminates() {
  fn prop(raw: Vec<u32>, cap: u8) -> bool {
    let wides: Vec<u32> = raw.iter().map(|r| 1 + (r % 0x10_FFFF)).collect();
    let cap = cap as usize % 17;
    let mut out = vec![0xAB_u8; cap + 4];
    let wrote = widechars_to_utf8(&mut out[..cap], &wides);
    // the terminator slot is always held back from the payload
    if cap == 0 && wrote != 0 {
      return false;
    }
    if cap > 0 && (wrote >= cap || out[wrote] != 0) {
      return false;
    }
    // bytes past the capacity stay untouched
    out[cap..].iter().all(|b| *b == 0xAB)
  }
  QuickCheck::new().tests(500).quickcheck(prop as fn(Vec<u32>, u8) -> bool);
}

#[test]
fn decode_truncation_stays_in_bounds() {
  fn prop(bytes: Vec<u8>, cap: u8) -> bool {
    let cap = cap as usize % 9;
    let mut out = vec![0xDEAD_BEEF_u32; cap + 2];
    let fits = match utf8_to_widechars(&mut out[..cap], &bytes) {
      Ok(n) => n < cap || (cap == 0 && n == 0),
      // plenty of arbitrary byte strings aren't valid, and that's fine here
      Err(_) => true,
    };
    fits && out[cap..].iter().all(|w| *w == 0xDEAD_BEEF)
  }
  QuickCheck::new().tests(500).quickcheck(prop as fn(Vec<u8>, u8) -> bool);
}

#[test]
fn no_file_in_the_repo_panics_the_scanners() {
  // every file in the test folder, text or not, must come back with a value.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = count_codepoints(&v);
    let mut out = vec![0_u32; 64];
    let _ = utf8_to_widechars(&mut out, &v);
  }
}
