use {
  super::*,
  crate::geometry::{to_pixel_space, to_world_space, Circle, Square},
  anyhow::Result,
  euclid::{Point2D, Vector2D as V2},
  image::{Rgba, RgbaImage},
  std::sync::Arc
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[test] fn solid_circle() -> Result<()> {
  let mut image = RgbaImage::new(128, 128);
  Circle
    .translate(V2::splat(0.5))
    .scale(0.25)
    .texture(RED)
    .draw(&mut image);

  // deep inside, deep outside, and the one-pixel antialias band
  assert_eq!(*image.get_pixel(64, 64), RED);
  assert_eq!(*image.get_pixel(2, 2), CLEAR);
  let edge = image.get_pixel(88, 85); // 31.9px off center, on the r=32 boundary
  assert_eq!(edge.0[..3], [255, 0, 0]);
  assert!(edge.0[3] > 50 && edge.0[3] < 200, "edge alpha {} not antialiased", edge.0[3]);
  Ok(())
}

#[test] fn solid_square() -> Result<()> {
  let mut image = RgbaImage::new(128, 128);
  Square
    .translate(V2::splat(0.5))
    .scale(0.25)
    .texture(RED)
    .draw(&mut image);

  assert_eq!(*image.get_pixel(64, 64), RED);
  // square corners are filled where the circle leaves them empty
  assert_eq!(*image.get_pixel(38, 38), RED);
  assert_eq!(*image.get_pixel(2, 2), CLEAR);
  Ok(())
}

#[test] fn polymorphic() -> Result<()> {
  let mut image = RgbaImage::new(128, 128);
  let shapes: Vec<Box<dyn Draw<_>>> = vec![
    Box::new(Circle
      .translate(V2::splat(0.25))
      .scale(0.2)
      .texture(RED)),
    Box::new(Square
      .translate(V2::splat(0.75))
      .scale(0.2)
      .texture(Rgba([0, 255, 0, 255])))
  ];
  shapes.into_iter()
    .for_each(|shape| shape.draw(&mut image));

  assert_eq!(*image.get_pixel(32, 32), RED);
  assert_eq!(*image.get_pixel(96, 96), Rgba([0, 255, 0, 255]));
  Ok(())
}

#[test] fn parallel_matches_sequential() -> Result<()> {
  let resolution = euclid::Size2D::from((256, 192));
  let colors = [RED, Rgba([0, 255, 0, 255]), Rgba([0, 0, 255, 255])];
  let dots = (0..16)
    .map(|i| {
      let center = Point2D::from([60.0 + 45.0 * (i % 4) as f32, 30.0 + 45.0 * (i / 4) as f32]);
      let center = to_world_space(center, resolution).to_vector();
      Circle
        .translate(center)
        .scale(10.0 / 192.0)
        .texture(colors[i % 3])
    })
    .collect::<Vec<_>>();

  let mut sequential = RgbaImage::new(resolution.width, resolution.height);
  dots.iter().for_each(|dot| dot.draw(&mut sequential));

  let parallel = draw_parallel(
    dots.into_iter().map(|dot| Arc::new(dot) as Arc<dyn DrawSync<RgbaImage>>),
    resolution,
    4
  )?;
  assert_eq!(sequential, parallel);
  Ok(())
}

#[test] fn empty_input() -> Result<()> {
  let image = draw_parallel(std::iter::empty(), euclid::Size2D::from((64, 64)), 4)?;
  assert!(image.pixels().all(|pixel| *pixel == CLEAR));
  Ok(())
}

#[test] fn world_roundtrip() {
  let resolution = euclid::Size2D::from((640, 480));
  for point in [[50.0, 50.0], [320.0, 240.0], [590.0, 430.0]] {
    let point = Point2D::from(point);
    let roundtrip = to_pixel_space(to_world_space(point, resolution), resolution);
    assert!((roundtrip - point).length() < 1e-3, "{:?} -> {:?}", point, roundtrip);
  }
}
