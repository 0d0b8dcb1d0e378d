//! Hirst spot paintings: arrangements of colored dots on a canvas, after the
//! artist's famous series.
//!
//! The crate is split into [`layout`] for placing the dots (a rectangular grid
//! or concentric rings), [`palette`] for choosing their colors (explicit
//! lists, tkinter-style color names, or median-cut extraction from an image
//! file), and [`drawing`] for rasterizing the result. [`painter::SpotPainter`]
//! ties the three together behind a small builder-and-mutators surface; the
//! `gui` feature adds a windowed front end on top.
//!
//! # Basic usage
//! ```no_run
//! use {
//!   spot_painting::{layout::Pattern, painter::SpotPainter},
//!   anyhow::Result
//! };
//!
//! fn main() -> Result<()> {
//!   SpotPainter::new((600, 600))?      // canvas size in pixels
//!     .with_pattern(Pattern::Rings)
//!     .with_image("photo.jpg")?        // palette sampled out of the photo
//!     .render()?                       // every repaint re-rolls the colors
//!     .save("out.png")?;
//!   Ok(())
//! }
//! ```
//! Without an image, dots are colored from an explicit palette:
//! ```
//! # use {spot_painting::{painter::SpotPainter, palette::Palette}, anyhow::Result};
//! # fn main() -> Result<()> {
//! let palette = Palette::parse(&["crimson", "gold", "#1e90ff"])?;
//! let painting = SpotPainter::new((500, 500))?
//!   .with_colors(palette.colors().to_vec())?
//!   .with_seed(7)  // reproducible
//!   .render()?;
//! # Ok(())
//! # }
//! ```
//!
//! Drawing follows the signed-distance approach: a dot is a unit [`geometry::Circle`]
//! (or [`geometry::Square`]) carried to its place by affine morphisms, filled with
//! one pixel of antialiasing along its boundary. See [`drawing::Draw`] and
//! [`drawing::draw_parallel`].

pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod palette;
pub mod layout;
pub mod painter;
#[cfg(feature = "gui")]
pub mod app;
