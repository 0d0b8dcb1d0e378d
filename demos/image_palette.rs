//! A spot painting colored with the palette of a supplied photo.

use {
  anyhow::Result,
  spot_painting::{layout::Pattern, painter::SpotPainter}
};

fn main() -> Result<()> {
  let image = std::env::args().nth(1)
    .expect("please provide an image file in arguments");
  let path = "out.png";

  SpotPainter::new((600, 600))?
    .with_color_count(12)?
    .with_image(image)?
    .with_pattern(Pattern::Rings)
    .render()?
    .save(path)?;
  open::that(path)?;
  Ok(())
}
