//! The painter itself: a configuration surface over layout, palette and
//! drawing.

use {
  crate::{
    drawing::{self, DrawSync},
    geometry::{to_world_space, Circle, PixelSpace, Shape, Square},
    layout::{DotShape, Layout, Pattern},
    palette::Palette
  },
  anyhow::{ensure, Result},
  euclid::Size2D,
  humansize::{file_size_opts as file_size, FileSize},
  image::{Rgba, RgbaImage},
  rand::SeedableRng,
  std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant
  }
};


pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const DEFAULT_SIZE: (u32, u32) = (500, 500);
pub const DEFAULT_COLOR_QUALITY: usize = 5;
pub const DEFAULT_COLOR_COUNT: usize = 20;

/// Spot painting generator.
///
/// Configured once through the builder methods, then repainted through
/// [`render`](Self::render) as the mutators change it. When an image file is
/// bound, its extracted palette takes precedence over explicitly supplied
/// colors until [`set_colors`](Self::set_colors) unbinds it.
pub struct SpotPainter {
  size: Size2D<u32, PixelSpace>,
  palette: Palette,
  image_file: Option<PathBuf>,
  color_count: usize,
  color_quality: usize,
  pattern: Pattern,
  dot_shape: DotShape,
  rng: rand_pcg::Pcg64
}

impl SpotPainter {
  /// A painter over a blank canvas of `size` pixels, red/blue/green palette.
  pub fn new(size: (u32, u32)) -> Result<Self> {
    let size = Size2D::from(size);
    Layout::new(size, Pattern::default())?;
    Ok(Self {
      size,
      palette: Palette::default(),
      image_file: None,
      color_count: DEFAULT_COLOR_COUNT,
      color_quality: DEFAULT_COLOR_QUALITY,
      pattern: Pattern::default(),
      dot_shape: DotShape::default(),
      rng: rand_pcg::Pcg64::from_entropy()
    })
  }

  pub fn with_colors(mut self, colors: Vec<Rgba<u8>>) -> Result<Self> {
    self.set_colors(colors)?;
    Ok(self)
  }

  /// Bind an image file and extract the working palette from it.
  /// Set the color count / quality *before* this, they drive the extraction.
  pub fn with_image(mut self, file: impl Into<PathBuf>) -> Result<Self> {
    self.refresh_image(Some(file.into()))?;
    Ok(self)
  }

  pub fn with_pattern(mut self, pattern: Pattern) -> Self {
    self.pattern = pattern;
    self
  }

  pub fn with_dot_shape(mut self, dot_shape: DotShape) -> Self {
    self.dot_shape = dot_shape;
    self
  }

  /// Maximum number of colors extracted from a bound image.
  pub fn with_color_count(mut self, color_count: usize) -> Result<Self> {
    ensure!(color_count >= 1, "color count must be at least 1, given {}", color_count);
    self.color_count = color_count;
    Ok(self)
  }

  /// Pixel sampling step of the extraction, 1 is the most thorough.
  pub fn with_color_quality(mut self, color_quality: usize) -> Result<Self> {
    ensure!(color_quality >= 1, "color quality must be at least 1, given {}", color_quality);
    self.color_quality = color_quality;
    Ok(self)
  }

  /// Pin the dot color sequence; renders stay reproducible across runs.
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.rng = rand_pcg::Pcg64::seed_from_u64(seed);
    self
  }

  /// Replace the palette with an explicit color list, unbinding any image
  /// file: supplied colors take over until the next [`refresh_image`](Self::refresh_image).
  pub fn set_colors(&mut self, colors: Vec<Rgba<u8>>) -> Result<()> {
    self.palette = Palette::new(colors)?;
    self.image_file = None;
    Ok(())
  }

  pub fn set_pattern(&mut self, pattern: Pattern) {
    self.pattern = pattern;
  }

  pub fn set_dot_shape(&mut self, dot_shape: DotShape) {
    self.dot_shape = dot_shape;
  }

  /// Change the canvas size. Rejects sizes under the layout minimum,
  /// leaving the painter untouched.
  pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
    let size = Size2D::from((width, height));
    Layout::new(size, self.pattern)?;
    self.size = size;
    Ok(())
  }

  /// Re-extract the palette from the bound image file, first binding a new
  /// one when `file` is given. Does nothing when no file is bound.
  pub fn refresh_image(&mut self, file: Option<PathBuf>) -> Result<()> {
    if let Some(file) = file {
      self.image_file = Some(file);
    }
    if let Some(file) = &self.image_file {
      self.palette = Palette::from_image(file, self.color_count, self.color_quality)?;
    }
    Ok(())
  }

  pub fn size(&self) -> (u32, u32) {
    (self.size.width, self.size.height)
  }

  pub fn pattern(&self) -> Pattern {
    self.pattern
  }

  pub fn dot_shape(&self) -> DotShape {
    self.dot_shape
  }

  pub fn palette(&self) -> &Palette {
    &self.palette
  }

  pub fn image_file(&self) -> Option<&Path> {
    self.image_file.as_deref()
  }

  /// Paint the canvas: every dot of the layout, filled with a random
  /// palette color. Each call re-rolls the colors.
  pub fn render(&mut self) -> Result<RgbaImage> {
    let t0 = Instant::now();
    let layout = Layout::new(self.size, self.pattern)?;
    let min_side = self.size.width.min(self.size.height) as f32;
    let radius = layout.dot_radius() / min_side;

    let shapes = layout.dots()
      .map(|center| {
        let fill = self.palette.choose(&mut self.rng);
        let center = to_world_space(center, self.size).to_vector();
        match self.dot_shape {
          DotShape::Circle =>
            Arc::new(Circle.translate(center).scale(radius).texture(fill)) as Arc<dyn DrawSync<RgbaImage>>,
          DotShape::Square =>
            Arc::new(Square.translate(center).scale(radius).texture(fill)) as Arc<dyn DrawSync<RgbaImage>>
        }
      })
      .collect::<Vec<_>>();
    let dot_count = shapes.len();

    let num_threads = std::thread::available_parallelism()
      .map(usize::from)
      .unwrap_or(1);
    let dots = drawing::draw_parallel(shapes.into_iter(), self.size, num_threads)?;

    let mut canvas = RgbaImage::from_pixel(self.size.width, self.size.height, BACKGROUND);
    image::imageops::overlay(&mut canvas, &dots, 0, 0);

    log::debug!(
      "rendered {} dots over a {}x{} canvas ({}) in {}ms",
      dot_count, self.size.width, self.size.height,
      canvas.as_raw().len().file_size(file_size::BINARY).unwrap_or_default(),
      t0.elapsed().as_millis()
    );
    Ok(canvas)
  }
}
