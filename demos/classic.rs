//! A spot painting from a fixed list of colors.

use {
  anyhow::Result,
  spot_painting::{painter::SpotPainter, palette::Palette}
};

fn main() -> Result<()> {
  let path = "out.png";
  let palette = Palette::parse(&["crimson", "gold", "teal", "#1e90ff", "coral"])?;

  SpotPainter::new((600, 600))?
    .with_colors(palette.colors().to_vec())?
    .render()?
    .save(path)?;
  open::that(path)?;
  Ok(())
}
