#![allow(non_snake_case)]
use {
  super::{rescale_bounding_box, Draw, DrawSync, Texture},
  crate::{
    geometry::{BoundingBox, PixelSpace, Shape, WorldSpace},
    sdf::SDF
  },
  anyhow::{anyhow, Result},
  euclid::{Point2D, Size2D},
  image::{Pixel, Rgba, RgbaImage},
  std::{sync::Arc, thread}
};

impl <S> Draw<RgbaImage> for Texture<S, Rgba<u8>>
  where S: Shape + Clone
{
  fn draw(&self, image: &mut RgbaImage) {
    self.shape.clone()
      .texture(|_| self.texture)
      .draw(image);
  }
}

/// F: Fn(pixel: Point2D) -> Rgba<u8>
/// where pixel is in world coordinates.
impl <S, F> Draw<RgbaImage> for Texture<S, F>
  where S: Shape,
        F: Fn(Point2D<f32, WorldSpace>) -> Rgba<u8>
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, PixelSpace> = image.dimensions().into();
    let (bounding_box, offset, min_side) = rescale_bounding_box(self.bounding_box(), resolution);
    let bounding_box = match bounding_box {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0 / min_side;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::from([x, y]))
      .for_each(|pixel| {
        let pixel_world = ((pixel.to_f32() - offset).to_vector() / min_side)
          .cast_unit().to_point();
        let sdf = self.sdf(pixel_world);
        let fill = (self.texture)(pixel_world);

        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, fill);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}

/// Draw shapes, parallel.
/// Will use `resolution.width * resolution.height * num_threads * 4` bytes of memory.
/// Intended for disjoint shape sets, such as spot layouts; overlapping shapes will
/// be composited in an unspecified order.
pub fn draw_parallel(
  shapes: impl Iterator<Item = Arc<dyn DrawSync<RgbaImage>>>,
  resolution: Size2D<u32, PixelSpace>,
  num_threads: usize
) -> Result<RgbaImage> {
  use rand::prelude::*;

  let mut final_buffer = RgbaImage::new(resolution.width, resolution.height);
  let mut draw_data = shapes.collect::<Vec<_>>();
  if draw_data.is_empty() {
    return Ok(final_buffer);
  }

  // will distribute the load between threads [statistically] evenly
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  draw_data.shuffle(&mut rng);

  let num_threads = num_threads.max(1).min(draw_data.len());
  let chunk_len = (draw_data.len() as f32 / num_threads as f32).ceil() as usize;

  let partial_buffers = draw_data
    .chunks(chunk_len)
    .map(|chunk| chunk.to_vec())
    .map(|chunk| thread::spawn(move || {
      let mut framebuffer = RgbaImage::new(resolution.width, resolution.height);
      chunk.into_iter()
        .for_each(|shape| shape.draw(&mut framebuffer));
      framebuffer
    }))
    .collect::<Vec<_>>() // thread handles
    .into_iter()
    .map(|thread| thread.join()
      .map_err(|_| anyhow!("draw worker panicked")))
    .collect::<Result<Vec<_>>>()?;

  // merge partial buffers
  partial_buffers
    .into_iter()
    .for_each(|buffer|
      image::imageops::overlay(&mut final_buffer, &buffer, 0, 0)
    );

  Ok(final_buffer)
}
