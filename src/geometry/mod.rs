//! .
//!
//! The origin of coordinate system is in top-left corner. Shapes are represented in the
//! interval `[-1, 1]`, and center in the origin.

use {
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  num_traits::NumCast
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, WorldSpace> {
  fn translate<T>(self, offset: V2<T, WorldSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, factor: T) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, factor }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, WorldSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, WorldSpace>
}
impl <S> BoundingBox<f32, WorldSpace> for Translation<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub factor: T
}
impl <S> BoundingBox<f32, WorldSpace> for Scale<S, f32>
  where S: BoundingBox<f32, WorldSpace> {
  fn bounding_box(&self) -> Box2D<f32, WorldSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.factor, self.factor)
      .translate(c)
  }
}

/// The world interval `[0, 1]` covers a square over the shortest side of the image,
/// centered on the longest; same mapping the rasterizer uses.
pub fn to_world_space<T: NumCast + Copy>(
  point: Point2D<T, PixelSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Point2D<f32, WorldSpace> {
  let min_side = resolution.width.min(resolution.height) as f32;
  let offset = (resolution.to_f32().to_vector() - V2::splat(min_side)) / 2.0;
  ((point.to_f32() - offset).to_vector() / min_side)
    .cast_unit()
    .to_point()
}

pub fn to_pixel_space(
  point: Point2D<f32, WorldSpace>,
  resolution: Size2D<u32, PixelSpace>
) -> Point2D<f32, PixelSpace> {
  let min_side = resolution.width.min(resolution.height) as f32;
  let offset = (resolution.to_f32().to_vector() - V2::splat(min_side)) / 2.0;
  (point.to_vector() * min_side)
    .cast_unit()
    .to_point() + offset
}
