//! One spot painting per image of a folder, each colored with the palette of
//! its source.

use {
  anyhow::Result,
  spot_painting::painter::SpotPainter,
  std::path::PathBuf,
  walkdir::WalkDir
};

fn image_files(folder: &str) -> impl Iterator<Item = PathBuf> {
  let matcher = regex::Regex::new(r"^.+\.(jpe?g|png)$").expect("static regex");
  WalkDir::new(folder)
    .sort_by(|a, b| lexical_sort::lexical_cmp(
      &a.file_name().to_string_lossy(),
      &b.file_name().to_string_lossy()
    ))
    .into_iter()
    .filter_map(|entry| entry.ok())
    .filter(move |entry| matcher.is_match(&entry.file_name().to_string_lossy()))
    .map(|entry| entry.into_path())
}

fn main() -> Result<()> {
  let folder = std::env::args().nth(1)
    .filter(|path| std::path::Path::new(path).is_dir())
    .expect("please provide a valid folder path in arguments");

  let mut painter = SpotPainter::new((600, 600))?;
  let mut count = 0;
  for file in image_files(&folder).take(16) {
    if let Err(error) = painter.refresh_image(Some(file.clone())) {
      eprintln!("skipping {:?}: {:#}", file, error);
      continue;
    }
    let out = format!("out_{:02}.png", count);
    painter.render()?.save(&out)?;
    println!("{:?} -> {}", file, out);
    count += 1;
  }
  if count > 0 {
    open::that("out_00.png")?;
  }
  Ok(())
}
