use {
  super::*,
  euclid::Size2D
};

fn size(width: u32, height: u32) -> Size2D<u32, crate::geometry::PixelSpace> {
  Size2D::from((width, height))
}

#[test] fn rejects_canvases_under_the_minimum() {
  assert!(Layout::new(size(149, 100), Pattern::Grid).is_err());
  assert!(Layout::new(size(150, 99), Pattern::Rings).is_err());
  assert!(Layout::new(size(0, 0), Pattern::Grid).is_err());
  assert!(Layout::new(size(150, 100), Pattern::Grid).is_ok());
}

#[test] fn minimum_canvas_still_paints() -> Result<()> {
  // one row of three dots
  assert_eq!(Layout::new(size(150, 100), Pattern::Grid)?.len(), 3);
  // the center dot alone
  assert_eq!(Layout::new(size(150, 100), Pattern::Rings)?.len(), 1);
  Ok(())
}

#[test] fn grid_dot_count() -> Result<()> {
  // (500 - 2*50) / 25 = 16 steps, 17 dots per side
  assert_eq!(Layout::new(size(500, 500), Pattern::Grid)?.len(), 17 * 17);
  // non-square canvas
  assert_eq!(Layout::new(size(650, 300), Pattern::Grid)?.len(), 23 * 9);
  Ok(())
}

#[test] fn grid_starts_at_the_padding() -> Result<()> {
  let first = Layout::new(size(500, 500), Pattern::Grid)?.dots().next();
  assert_eq!(first, Some(Point2D::from([PADDING as f32, PADDING as f32])));
  Ok(())
}

#[test] fn dots_stay_inside_the_canvas() -> Result<()> {
  for pattern in [Pattern::Grid, Pattern::Rings] {
    let layout = Layout::new(size(640, 480), pattern)?;
    let radius = layout.dot_radius();
    for dot in layout.dots() {
      assert!(dot.x - radius >= 0.0 && dot.x + radius <= 640.0, "{} x {:?}", pattern, dot);
      assert!(dot.y - radius >= 0.0 && dot.y + radius <= 480.0, "{} y {:?}", pattern, dot);
    }
  }
  Ok(())
}

#[test] fn dots_never_overlap() -> Result<()> {
  for pattern in [Pattern::Grid, Pattern::Rings] {
    let layout = Layout::new(size(400, 400), pattern)?;
    let dots = layout.dots().collect::<Vec<_>>();
    for (i, a) in dots.iter().enumerate() {
      for b in dots.iter().skip(i + 1) {
        assert!(a.distance_to(*b) >= DOT_DIAMETER as f32,
          "{} dots {:?} and {:?} overlap", pattern, a, b);
      }
    }
  }
  Ok(())
}

#[test] fn rings_are_centered() -> Result<()> {
  let layout = Layout::new(size(300, 200), Pattern::Rings)?;
  let center = Point2D::from([150.0, 100.0]);
  assert_eq!(layout.dots().next(), Some(center));
  // every other dot sits on a ring radius, a whole number of steps out
  for dot in layout.dots().skip(1) {
    let radius = dot.distance_to(center);
    let steps = radius / STEP as f32;
    assert!((steps - steps.round()).abs() < 1e-3, "{:?} is {} steps out", dot, steps);
  }
  Ok(())
}

#[test] fn pattern_names_roundtrip() -> Result<()> {
  assert_eq!("grid".parse::<Pattern>()?, Pattern::Grid);
  assert_eq!("rings".parse::<Pattern>()?, Pattern::Rings);
  assert_eq!(Pattern::Rings.to_string(), "rings");
  assert!("spiral".parse::<Pattern>().is_err());
  Ok(())
}

#[test] fn toggles_cycle() {
  assert_eq!(Pattern::Grid.toggle().toggle(), Pattern::Grid);
  assert_eq!(DotShape::Circle.toggle(), DotShape::Square);
}
