#![forbid(unsafe_code)]

//! Moves whole images into and out of PNG data streams.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! All the chunk handling, filtering, and compression work is delegated to
//! the [`png`](https://docs.rs/png) crate. What this module adds is a
//! whole-image view with as little ceremony as possible: bytes in, [`Raster`]
//! out, and the reverse.
//!
//! Decoding always normalizes down to one byte per channel:
//!
//! * Paletted images come out as their RGB entries (RGBA when there's a
//!   transparency chunk).
//! * Sub-8-bit greyscale is expanded to 8 bits.
//! * 16-bit channels are scaled to 8 bits.
//!
//! So a decoded [`Raster`] is always 8 bits per channel, rows packed tightly
//! one after the other, top row first. Encoding expects the same layout.

use std::{fs, io::Read, path::Path, vec::Vec};

use thiserror::Error;

/// An error from the PNG module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PngError {
  /// The data stream couldn't be decoded.
  #[error("png decoding failed")]
  Decode,

  /// The raster couldn't be encoded.
  #[error("png encoding failed")]
  Encode,

  /// The pixel buffer length doesn't match `width * height * channels`.
  #[error("pixel buffer length mismatch")]
  PixelCount,

  /// A file operation failed.
  #[error("io failure: {0}")]
  Io(std::io::ErrorKind),
}
impl From<png::DecodingError> for PngError {
  #[inline]
  fn from(_: png::DecodingError) -> Self {
    Self::Decode
  }
}
impl From<png::EncodingError> for PngError {
  #[inline]
  fn from(_: png::EncodingError) -> Self {
    Self::Encode
  }
}
impl From<std::io::Error> for PngError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e.kind())
  }
}

/// The channel layouts a [`Raster`] can have.
///
/// The discriminant is the channel count, so `RGBA as u32` is 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorChannels {
  /// Greyscale
  Y = 1,
  /// Greyscale + Alpha
  YA = 2,
  /// Red, Green, Blue
  RGB = 3,
  /// Red, Green, Blue, Alpha
  RGBA = 4,
}
impl ColorChannels {
  /// The number of bytes each pixel takes in this layout.
  #[inline]
  #[must_use]
  pub const fn count(self) -> usize {
    self as usize
  }

  fn png_color(self) -> png::ColorType {
    match self {
      Self::Y => png::ColorType::Grayscale,
      Self::YA => png::ColorType::GrayscaleAlpha,
      Self::RGB => png::ColorType::Rgb,
      Self::RGBA => png::ColorType::Rgba,
    }
  }

  fn from_png_color(color: png::ColorType) -> Option<Self> {
    match color {
      png::ColorType::Grayscale => Some(Self::Y),
      png::ColorType::GrayscaleAlpha => Some(Self::YA),
      png::ColorType::Rgb => Some(Self::RGB),
      png::ColorType::Rgba => Some(Self::RGBA),
      png::ColorType::Indexed => None,
    }
  }
}
impl TryFrom<u32> for ColorChannels {
  type Error = ();
  #[inline]
  fn try_from(value: u32) -> Result<Self, Self::Error> {
    Ok(match value {
      1 => ColorChannels::Y,
      2 => ColorChannels::YA,
      3 => ColorChannels::RGB,
      4 => ColorChannels::RGBA,
      _ => return Err(()),
    })
  }
}

/// An owned image with 8 bits per channel.
///
/// The pixel bytes are rows packed tightly one after the other, top row
/// first, with no padding anywhere. The buffer length must stay equal to
/// `width * height * channels.count()`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Raster {
  pub width: u32,
  pub height: u32,
  pub channels: ColorChannels,
  pub pixels: Vec<u8>,
}
impl Raster {
  /// Makes a raster out of a pixel buffer.
  ///
  /// ## Failure
  /// * The buffer length doesn't match the dimensions and layout.
  #[inline]
  pub fn from_pixels(
    width: u32, height: u32, channels: ColorChannels, pixels: Vec<u8>,
  ) -> Result<Self, PngError> {
    match pixel_bytes(width, height, channels) {
      Some(expected) if pixels.len() == expected => Ok(Self { width, height, channels, pixels }),
      _ => Err(PngError::PixelCount),
    }
  }

  /// Flips the image top to bottom.
  #[inline]
  pub fn flip_vertical(&mut self) {
    let row = (self.width as usize) * self.channels.count();
    let mut data: &mut [u8] = self.pixels.as_mut_slice();
    let mut temp_height = self.height;
    while temp_height > 1 {
      let (low, mid) = data.split_at_mut(row);
      let (mid, high) = mid.split_at_mut(mid.len() - row);
      low.swap_with_slice(high);
      data = mid;
      temp_height -= 2;
    }
  }
}

/// Full pixel buffer size for the dimensions, when it fits in `usize`.
#[inline]
#[must_use]
fn pixel_bytes(width: u32, height: u32, channels: ColorChannels) -> Option<usize> {
  (width as usize).checked_mul(height as usize)?.checked_mul(channels.count())
}

/// Checks if the data stream's initial 8 bytes are the PNG signature.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not*
///   PNG data.
#[inline]
#[must_use]
pub const fn is_png(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Decodes a PNG data stream into a [`Raster`].
///
/// The output always has 8 bits per channel, with palette and transparency
/// data folded into the pixels, so the raster's channel layout describes
/// what you actually got rather than how the stream stored it.
///
/// ## Failure
/// * The codec rejected the data stream.
pub fn decode(bytes: &[u8]) -> Result<Raster, PngError> {
  let mut decoder = png::Decoder::new(bytes);
  decoder.set_transformations(png::Transformations::normalize_to_color8());
  let mut reader = decoder.read_info()?;
  let mut pixels: Vec<u8> = Vec::new();
  pixels.resize(reader.output_buffer_size(), 0);
  let info = reader.next_frame(&mut pixels)?;
  if info.bit_depth != png::BitDepth::Eight {
    return Err(PngError::Decode);
  }
  let channels = match ColorChannels::from_png_color(info.color_type) {
    Some(channels) => channels,
    None => return Err(PngError::Decode),
  };
  pixels.truncate(info.buffer_size());
  Ok(Raster { width: info.width, height: info.height, channels, pixels })
}

/// Encodes a [`Raster`] as a PNG data stream.
///
/// The stream is non-interlaced, 8 bits per channel, with the codec's
/// default compression settings.
///
/// ## Failure
/// * The pixel buffer length doesn't match the dimensions and layout.
/// * The codec rejected the raster (a zero width or height, for example).
pub fn encode(raster: &Raster) -> Result<Vec<u8>, PngError> {
  match pixel_bytes(raster.width, raster.height, raster.channels) {
    Some(expected) if raster.pixels.len() == expected => (),
    _ => return Err(PngError::PixelCount),
  }
  let mut out: Vec<u8> = Vec::new();
  let mut encoder = png::Encoder::new(&mut out, raster.width, raster.height);
  encoder.set_color(raster.channels.png_color());
  encoder.set_depth(png::BitDepth::Eight);
  let mut writer = encoder.write_header()?;
  writer.write_image_data(&raster.pixels)?;
  writer.finish()?;
  Ok(out)
}

/// Checks if the file starts with the PNG signature.
///
/// A file shorter than the signature is simply not a PNG, which isn't a
/// failure.
///
/// ## Failure
/// * The file couldn't be opened or read.
pub fn is_png_file<P: AsRef<Path>>(path: P) -> Result<bool, PngError> {
  let mut header: Vec<u8> = Vec::new();
  fs::File::open(path)?.take(8).read_to_end(&mut header)?;
  Ok(is_png(&header))
}

/// Reads and decodes a PNG file into a [`Raster`].
///
/// ## Failure
/// * The file couldn't be read.
/// * Any of the [`decode`] failure cases.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Raster, PngError> {
  let bytes = fs::read(path)?;
  decode(&bytes)
}

/// Encodes a [`Raster`] and writes it out as a PNG file.
///
/// ## Failure
/// * Any of the [`encode`] failure cases.
/// * The file couldn't be written.
pub fn write_file<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<(), PngError> {
  let bytes = encode(raster)?;
  fs::write(path, bytes)?;
  Ok(())
}

#[test]
fn the_signature_check_needs_all_eight_bytes() {
  assert!(is_png(&[137, 80, 78, 71, 13, 10, 26, 10]));
  assert!(is_png(&[137, 80, 78, 71, 13, 10, 26, 10, 99]));
  assert!(!is_png(&[137, 80, 78, 71, 13, 10, 26]));
  assert!(!is_png(b"not a png"));
  assert!(!is_png(&[]));
}

#[test]
fn channel_counts_match_the_layouts() {
  assert_eq!(ColorChannels::Y.count(), 1);
  assert_eq!(ColorChannels::YA.count(), 2);
  assert_eq!(ColorChannels::RGB.count(), 3);
  assert_eq!(ColorChannels::RGBA.count(), 4);
  assert_eq!(ColorChannels::try_from(3_u32), Ok(ColorChannels::RGB));
  assert_eq!(ColorChannels::try_from(0_u32), Err(()));
  assert_eq!(ColorChannels::try_from(5_u32), Err(()));
}

#[test]
fn from_pixels_rejects_a_length_mismatch() {
  let r = Raster::from_pixels(2, 2, ColorChannels::RGBA, [0_u8; 3].to_vec());
  assert_eq!(r, Err(PngError::PixelCount));
  let r = Raster::from_pixels(2, 2, ColorChannels::Y, [0_u8; 4].to_vec());
  assert!(r.is_ok());
}

#[test]
fn flip_vertical_reverses_the_row_order() {
  let mut r = Raster::from_pixels(2, 3, ColorChannels::Y, [1, 2, 3, 4, 5, 6].to_vec()).unwrap();
  r.flip_vertical();
  assert_eq!(r.pixels, [5, 6, 3, 4, 1, 2]);
  // rows move as whole pixels, not as single bytes
  let mut r = Raster::from_pixels(1, 2, ColorChannels::YA, [1, 2, 3, 4].to_vec()).unwrap();
  r.flip_vertical();
  assert_eq!(r.pixels, [3, 4, 1, 2]);
}

#[test]
fn a_tiny_rgba_image_round_trips() {
  let pixels = [
    255, 0, 0, 255, //
    0, 255, 0, 128, //
    0, 0, 255, 255, //
    9, 9, 9, 0, //
  ];
  let raster = Raster::from_pixels(2, 2, ColorChannels::RGBA, pixels.to_vec()).unwrap();
  let bytes = encode(&raster).unwrap();
  assert!(is_png(&bytes));
  let back = decode(&bytes).unwrap();
  assert_eq!(back, raster);
}
