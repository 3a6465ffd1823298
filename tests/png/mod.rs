use recode::png::{
  decode, encode, is_png, is_png_file, read_file, write_file, ColorChannels, PngError, Raster,
};
use walkdir::WalkDir;

#[test]
fn no_file_in_the_repo_panics_the_decoder() {
  // every file in the test folder, png or not, must come back with a value.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = is_png(&v);
    let _ = decode(&v);
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    assert!(decode(&v).is_err());
  }
}

#[test]
fn random_pixels_survive_an_encode_decode_trip() {
  for channels in [ColorChannels::Y, ColorChannels::YA, ColorChannels::RGB, ColorChannels::RGBA] {
    let (width, height) = (13_u32, 7_u32);
    let len = width as usize * height as usize * channels.count();
    let raster = Raster::from_pixels(width, height, channels, super::rand_bytes(len)).unwrap();
    let bytes = encode(&raster).unwrap();
    assert!(is_png(&bytes));
    assert_eq!(decode(&bytes).unwrap(), raster);
  }
}

#[test]
fn decoding_reports_the_layout_it_actually_returns() {
  // greyscale stays one channel instead of getting padded out to RGB
  let raster = Raster::from_pixels(3, 3, ColorChannels::Y, super::rand_bytes(9)).unwrap();
  let back = decode(&encode(&raster).unwrap()).unwrap();
  assert_eq!(back.channels, ColorChannels::Y);
  assert_eq!(back.pixels.len(), 9);
}

#[test]
fn file_round_trip_through_a_temp_path() {
  let mut path = std::env::temp_dir();
  path.push("recode_file_trip.png");
  let raster = Raster::from_pixels(4, 4, ColorChannels::RGB, super::rand_bytes(48)).unwrap();
  write_file(&path, &raster).unwrap();
  assert_eq!(is_png_file(&path), Ok(true));
  assert_eq!(read_file(&path).unwrap(), raster);
  let _ = std::fs::remove_file(&path);
}

#[test]
fn short_files_are_not_png_files() {
  let mut path = std::env::temp_dir();
  path.push("recode_short_header");
  std::fs::write(&path, [137, 80]).unwrap();
  assert_eq!(is_png_file(&path), Ok(false));
  let _ = std::fs::remove_file(&path);
}

#[test]
fn a_missing_file_reports_the_io_failure() {
  let r = is_png_file("tests/does_not_exist/missing.png");
  assert!(matches!(r, Err(PngError::Io(_))));
}
