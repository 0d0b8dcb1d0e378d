//! Dot colors: explicit lists, tkinter-style color names, and palettes
//! sampled out of an image by median-cut quantization.

use {
  anyhow::{bail, ensure, Context, Result},
  image::{Rgba, RgbaImage},
  itertools::{Itertools, MinMaxResult},
  rand::Rng,
  rayon::prelude::*,
  std::{collections::BTreeMap, path::Path}
};


const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
  Rgba([r, g, b, 255])
}

/// X11 color names, the scheme the classic canvas toolkits resolve
/// color strings against.
const NAMED_COLORS: &[(&str, Rgba<u8>)] = &[
  ("black",   rgb(0x00, 0x00, 0x00)),
  ("white",   rgb(0xff, 0xff, 0xff)),
  ("gray",    rgb(0xbe, 0xbe, 0xbe)),
  ("red",     rgb(0xff, 0x00, 0x00)),
  ("green",   rgb(0x00, 0xff, 0x00)),
  ("blue",    rgb(0x00, 0x00, 0xff)),
  ("yellow",  rgb(0xff, 0xff, 0x00)),
  ("cyan",    rgb(0x00, 0xff, 0xff)),
  ("magenta", rgb(0xff, 0x00, 0xff)),
  ("orange",  rgb(0xff, 0xa5, 0x00)),
  ("purple",  rgb(0xa0, 0x20, 0xf0)),
  ("pink",    rgb(0xff, 0xc0, 0xcb)),
  ("brown",   rgb(0xa5, 0x2a, 0x2a)),
  ("gold",    rgb(0xff, 0xd7, 0x00)),
  ("navy",    rgb(0x00, 0x00, 0x80)),
  ("teal",    rgb(0x00, 0x80, 0x80)),
  ("coral",   rgb(0xff, 0x7f, 0x50)),
  ("crimson", rgb(0xdc, 0x14, 0x3c))
];

/// Resolve a color specification: a known name, `#rgb`, or `#rrggbb`.
pub fn parse_color(spec: &str) -> Result<Rgba<u8>> {
  let spec = spec.trim().to_ascii_lowercase();
  if let Some(hex) = spec.strip_prefix('#') {
    ensure!(hex.chars().all(|c| c.is_ascii_hexdigit()), "malformed hex color {:?}", spec);
    let channel = |i: usize| u8::from_str_radix(&hex[2 * i..2 * i + 2], 16);
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|c| c << 4 | c);
    return Ok(match hex.len() {
      6 => Rgba([channel(0)?, channel(1)?, channel(2)?, 255]),
      3 => Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
      _ => bail!("malformed hex color {:?}", spec)
    });
  }
  NAMED_COLORS.iter()
    .find(|(name, _)| *name == spec)
    .map(|(_, color)| *color)
    .with_context(|| format!("unknown color name {:?}", spec))
}

/// A non-empty, ordered list of dot colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
  colors: Vec<Rgba<u8>>
}

impl Default for Palette {
  /// Red, blue, green.
  fn default() -> Self {
    Self { colors: vec![rgb(0xff, 0x00, 0x00), rgb(0x00, 0x00, 0xff), rgb(0x00, 0xff, 0x00)] }
  }
}

impl Palette {
  pub fn new(colors: Vec<Rgba<u8>>) -> Result<Self> {
    ensure!(!colors.is_empty(), "a palette must hold at least one color");
    Ok(Self { colors })
  }

  /// Resolve a list of color specifications, see [`parse_color`].
  pub fn parse(specs: &[&str]) -> Result<Self> {
    Self::new(specs.iter().map(|spec| parse_color(spec)).collect::<Result<_>>()?)
  }

  /// Extract a palette of up to `color_count` colors out of an image file.
  ///
  /// `quality` is the pixel sampling step: 1 inspects every pixel, larger
  /// values are proportionally faster and coarser. Transparent and
  /// near-white pixels carry no spot color and are not sampled. Images with
  /// little color diversity may yield fewer than `color_count` colors.
  pub fn from_image(path: impl AsRef<Path>, color_count: usize, quality: usize) -> Result<Self> {
    let path = path.as_ref();
    ensure!(color_count >= 1 && quality >= 1, "color count and quality must be at least 1");
    let image = image::open(path)
      .with_context(|| format!("unable to open {:?}", path))?
      .to_rgba8();
    let samples = sample_pixels(&image, quality);
    ensure!(!samples.is_empty(),
      "{:?} has no opaque non-white pixels to take colors from", path);
    Self::new(median_cut(samples, color_count))
  }

  pub fn colors(&self) -> &[Rgba<u8>] {
    &self.colors
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// A uniformly random color of the palette.
  pub fn choose(&self, rng: &mut impl Rng) -> Rgba<u8> {
    self.colors[rng.gen_range(0..self.colors.len())]
  }
}

const ALPHA_THRESHOLD: u8 = 125;
const WHITE_THRESHOLD: u8 = 250;

fn sample_pixels(image: &RgbaImage, quality: usize) -> Vec<[u8; 3]> {
  image.as_raw()
    .par_chunks_exact(4)
    .enumerate()
    .filter(|(i, _)| i % quality == 0)
    .filter_map(|(_, pixel)| match *pixel {
      [r, g, b, a] =>
        (a >= ALPHA_THRESHOLD && !(r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD))
          .then(|| [r, g, b]),
      _ => None
    })
    .collect()
}

const SIGNIFICANT_BITS: u32 = 5;
const CHANNEL_SHIFT: u32 = 8 - SIGNIFICANT_BITS;

/// A box of the reduced color histogram.
struct VBox {
  /// (channels reduced to [`SIGNIFICANT_BITS`], population), ordered
  entries: Vec<([u8; 3], u64)>
}

impl VBox {
  fn population(&self) -> u64 {
    self.entries.iter().map(|(_, n)| n).sum()
  }

  fn divisible(&self) -> bool {
    self.entries.len() > 1
  }

  fn widest_channel(&self) -> usize {
    (0..3)
      .max_by_key(|&c| match self.entries.iter().map(|(q, _)| q[c]).minmax() {
        MinMaxResult::MinMax(lo, hi) => hi - lo,
        _ => 0
      })
      .unwrap_or(0)
  }

  /// Split at the population median of the widest channel.
  fn split(mut self) -> (VBox, VBox) {
    let channel = self.widest_channel();
    self.entries.sort_unstable_by_key(|(q, _)| q[channel]);
    let half = self.population() / 2;

    let mut cumulative = 0;
    let mut split_at = self.entries.len() - 1;
    for (i, (_, n)) in self.entries.iter().enumerate() {
      cumulative += n;
      if cumulative > half {
        split_at = i;
        break;
      }
    }
    let split_at = split_at.clamp(1, self.entries.len() - 1);

    let upper = self.entries.split_off(split_at);
    (self, VBox { entries: upper })
  }

  fn mean_color(&self) -> Rgba<u8> {
    let expand = |q: u8| (q << CHANNEL_SHIFT | q >> (SIGNIFICANT_BITS - CHANNEL_SHIFT)) as u64;
    let population = self.population().max(1);
    let mut sum = [0u64; 3];
    self.entries.iter()
      .for_each(|&(q, n)| (0..3).for_each(|c| sum[c] += expand(q[c]) * n));
    Rgba([
      (sum[0] / population) as u8,
      (sum[1] / population) as u8,
      (sum[2] / population) as u8,
      255
    ])
  }
}

/// Median-cut quantization: recursively split the most populous histogram
/// box until `color_count` boxes exist, then average each.
fn median_cut(samples: Vec<[u8; 3]>, color_count: usize) -> Vec<Rgba<u8>> {
  let mut histogram = BTreeMap::<[u8; 3], u64>::new();
  samples.into_iter().for_each(|[r, g, b]|
    *histogram.entry([r >> CHANNEL_SHIFT, g >> CHANNEL_SHIFT, b >> CHANNEL_SHIFT]).or_default() += 1
  );

  let mut boxes = vec![VBox { entries: histogram.into_iter().collect() }];
  while boxes.len() < color_count {
    let candidate = boxes.iter()
      .enumerate()
      .filter(|(_, vbox)| vbox.divisible())
      .max_by_key(|(_, vbox)| vbox.population())
      .map(|(i, _)| i);
    let candidate = match candidate {
      Some(i) => i,
      None => break // no more distinct colors to separate
    };
    let (lower, upper) = boxes.swap_remove(candidate).split();
    boxes.push(lower);
    boxes.push(upper);
  }

  boxes.sort_by_key(|vbox| std::cmp::Reverse(vbox.population()));
  boxes.iter().map(VBox::mean_color).collect()
}
