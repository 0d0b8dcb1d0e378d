//! Windowed front end: blit the painting, map keys onto the painter's
//! mutators, follow live window resizes.

use {
  crate::{
    layout::{MIN_HEIGHT, MIN_WIDTH},
    painter::SpotPainter
  },
  anyhow::Result,
  image::RgbaImage,
  macroquad::prelude::*
};

const EXPORT_FILE: &str = "spot-painting.png";
const HELP: &str = "[P]attern  [D]ot shape  [C]olors  [R]efresh image  [S]ave  [Esc] quit";

pub struct App {
  painter: SpotPainter,
  painting: RgbaImage,
  texture: Texture2D
}

impl App {
  pub fn new(mut painter: SpotPainter) -> Result<Self> {
    let painting = painter.render()?;
    let texture = upload(&painting);
    Ok(Self { painter, painting, texture })
  }

  pub async fn run(mut self) -> Result<()> {
    loop {
      if self.handle_input()? {
        return Ok(());
      }
      clear_background(WHITE);
      draw_texture(&self.texture, 0.0, 0.0, WHITE);
      draw_text(HELP, 10.0, screen_height() - 8.0, 16.0, DARKGRAY);
      next_frame().await
    }
  }

  /// One frame of input handling; `true` requests shutdown.
  fn handle_input(&mut self) -> Result<bool> {
    if is_key_pressed(KeyCode::Escape) {
      return Ok(true);
    }
    let mut dirty = false;

    // follow the live window size; sizes under the layout minimum keep the
    // previous painting on screen
    let (width, height) = (screen_width() as u32, screen_height() as u32);
    if (width, height) != self.painter.size() && width >= MIN_WIDTH && height >= MIN_HEIGHT {
      self.painter.resize(width, height)?;
      dirty = true;
    }

    if is_key_pressed(KeyCode::P) {
      let pattern = self.painter.pattern().toggle();
      self.painter.set_pattern(pattern);
      dirty = true;
    }
    if is_key_pressed(KeyCode::D) {
      let dot_shape = self.painter.dot_shape().toggle();
      self.painter.set_dot_shape(dot_shape);
      dirty = true;
    }
    if is_key_pressed(KeyCode::C) {
      dirty = true; // repaint re-rolls every dot color
    }
    if is_key_pressed(KeyCode::R) && self.painter.image_file().is_some() {
      match self.painter.refresh_image(None) {
        Ok(()) => dirty = true,
        Err(error) => log::error!("palette refresh failed: {:#}", error)
      }
    }
    if is_key_pressed(KeyCode::S) {
      match self.painting.save(EXPORT_FILE) {
        Ok(()) => log::info!("saved painting to {}", EXPORT_FILE),
        Err(error) => log::error!("export failed: {}", error)
      }
    }

    if dirty {
      self.repaint()?;
    }
    Ok(false)
  }

  fn repaint(&mut self) -> Result<()> {
    self.painting = self.painter.render()?;
    self.texture = upload(&self.painting);
    Ok(())
  }
}

fn upload(painting: &RgbaImage) -> Texture2D {
  Texture2D::from_rgba8(
    painting.width() as u16,
    painting.height() as u16,
    painting.as_raw()
  )
}
