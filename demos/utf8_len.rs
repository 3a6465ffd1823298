fn main() {
  let args: Vec<String> = std::env::args().collect();
  for arg in args[1..].iter() {
    let bytes = arg.as_bytes();
    match recode::utf8::count_codepoints(bytes) {
      Ok(count) => println!("{arg:?}: {} bytes, {count} code points", bytes.len()),
      Err(e) => println!("{arg:?}: {e}"),
    }
  }
}
