fn main() {
  let args: Vec<String> = std::env::args().collect();
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    match recode::png::is_png_file(path) {
      Ok(true) => (),
      Ok(false) => {
        println!("not a png.");
        continue;
      }
      Err(e) => {
        println!("{e}");
        continue;
      }
    }
    match recode::png::read_file(path) {
      Ok(raster) => {
        println!(
          "{}x{} pixels, {:?} channels, {} pixel bytes.",
          raster.width,
          raster.height,
          raster.channels,
          raster.pixels.len()
        )
      }
      Err(e) => println!("{e}"),
    }
  }
}
