//! ASCII renderer module for converting grayscale images to ASCII art.
//!
//! The pipeline:
//!
//! 1. **Decoding** - encoded bytes to a [`GrayFrame`] via BT.601 luminance
//! 2. **Tile planning** - split the image into `cols` x `rows` rectangles
//! 3. **Quantization** - mean brightness per tile mapped to a palette level
//! 4. **Assembly** - one character per tile, rows joined by newlines
//!
//! # Palettes
//!
//! Two fixed palettes are available via [`Palette`]:
//! - `Extended` - 70-level density ramp
//! - `Standard` - 10-level density ramp

mod error;
mod frame;
mod grayscale;
mod palette;
mod quantize;
mod render;
mod tiles;

pub use error::RenderError;
pub use frame::{DecodeError, GrayFrame, GrayscaleSource};
pub use grayscale::{to_grayscale, to_grayscale_into};
pub use palette::{Palette, GRAY_SCALE_10, GRAY_SCALE_70};
pub use quantize::{level_index, mean_brightness, quantize};
pub use render::{render, render_parallel, RenderOptions};
pub use tiles::{check_options, Tile, TilePlan, DEFAULT_COLS, DEFAULT_SCALE};
