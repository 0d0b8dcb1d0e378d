//! Dot placement. A layout turns a canvas size and a pattern into the pixel
//! coordinates of every dot center.

use {
  crate::geometry::PixelSpace,
  anyhow::{bail, ensure, Result},
  euclid::{Point2D, Size2D, Vector2D as V2},
  itertools::{iproduct, Either},
  std::{f32::consts::TAU, fmt, str::FromStr}
};

#[cfg(test)] mod tests;

/// Blank margin around the painting, px.
pub const PADDING: u32 = 50;
/// Distance between neighbouring dot centers, px.
pub const STEP: u32 = 25;
/// Dot diameter, px. Kept under [`STEP`] so dots never touch.
pub const DOT_DIAMETER: u32 = 15;
/// Smallest canvas that still fits a dot row.
pub const MIN_WIDTH: u32 = 150;
pub const MIN_HEIGHT: u32 = 100;

/// Dot arrangement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Pattern {
  /// Rectangular lattice, the classic spot painting.
  #[default]
  Grid,
  /// Concentric rings around the canvas center.
  Rings
}

impl Pattern {
  pub fn toggle(self) -> Self {
    match self {
      Pattern::Grid => Pattern::Rings,
      Pattern::Rings => Pattern::Grid
    }
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Pattern::Grid => "grid",
      Pattern::Rings => "rings"
    })
  }
}

impl FromStr for Pattern {
  type Err = anyhow::Error;
  fn from_str(s: &str) -> Result<Self> {
    Ok(match s {
      "grid" => Pattern::Grid,
      "rings" => Pattern::Rings,
      _ => bail!("unknown pattern {:?}, expected \"grid\" or \"rings\"", s)
    })
  }
}

/// Dot primitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DotShape {
  #[default]
  Circle,
  Square
}

impl DotShape {
  pub fn toggle(self) -> Self {
    match self {
      DotShape::Circle => DotShape::Square,
      DotShape::Square => DotShape::Circle
    }
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Layout {
  size: Size2D<u32, PixelSpace>,
  pattern: Pattern
}

impl Layout {
  pub fn new(size: Size2D<u32, PixelSpace>, pattern: Pattern) -> Result<Self> {
    ensure!(size.width >= MIN_WIDTH && size.height >= MIN_HEIGHT,
      "minimum canvas is ({}, {}), given ({}, {})",
      MIN_WIDTH, MIN_HEIGHT, size.width, size.height);
    Ok(Self { size, pattern })
  }

  pub fn dot_radius(&self) -> f32 {
    DOT_DIAMETER as f32 / 2.0
  }

  /// Dot centers, in pixel coordinates.
  pub fn dots(&self) -> impl Iterator<Item = Point2D<f32, PixelSpace>> {
    match self.pattern {
      Pattern::Grid => Either::Left(grid(self.size)),
      Pattern::Rings => Either::Right(rings(self.size))
    }
  }

  pub fn len(&self) -> usize {
    self.dots().count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

fn grid(size: Size2D<u32, PixelSpace>) -> impl Iterator<Item = Point2D<f32, PixelSpace>> {
  let count_x = (size.width - 2 * PADDING) / STEP;
  let count_y = (size.height - 2 * PADDING) / STEP;
  iproduct!(0..=count_y, 0..=count_x)
    .map(|(i, j)| Point2D::from([
      (PADDING + j * STEP) as f32,
      (PADDING + i * STEP) as f32
    ]))
}

fn rings(size: Size2D<u32, PixelSpace>) -> impl Iterator<Item = Point2D<f32, PixelSpace>> {
  let center = (size.to_f32().to_vector() / 2.0).to_point();
  let max_radius = size.width.min(size.height) as f32 / 2.0 - PADDING as f32;
  std::iter::once(center).chain(
    (1u32..).map(|ring| (ring * STEP) as f32)
      .take_while(move |radius| *radius <= max_radius)
      .flat_map(move |radius| {
        let count = (TAU * radius / STEP as f32).floor() as u32;
        (0..count).map(move |i| {
          let angle = TAU * i as f32 / count as f32;
          center + V2::from([angle.cos(), angle.sin()]) * radius
        })
      })
  )
}
