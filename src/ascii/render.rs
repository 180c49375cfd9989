//! Image to ASCII art assembly.

use rayon::prelude::*;

use super::error::RenderError;
use super::frame::GrayscaleSource;
use super::palette::Palette;
use super::quantize::quantize;
use super::tiles::{check_options, TilePlan, DEFAULT_COLS, DEFAULT_SCALE};

/// Output geometry and palette for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Number of characters per line
    pub cols: u32,
    /// Height scale correcting for tall terminal cells
    pub scale: f64,
    /// Palette to draw with
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            scale: DEFAULT_SCALE,
            palette: Palette::Extended,
        }
    }
}

impl RenderOptions {
    pub fn new(cols: u32, scale: f64, more_levels: bool) -> Self {
        Self {
            cols,
            scale,
            palette: Palette::from_more_levels(more_levels),
        }
    }

    /// Reject options no image could be rendered with.
    pub fn validate(&self) -> Result<(), RenderError> {
        check_options(self.cols, self.scale)
    }

    /// Plan the tile grid for `source` with these options.
    pub fn plan<S: GrayscaleSource + ?Sized>(&self, source: &S) -> Result<TilePlan, RenderError> {
        TilePlan::new(source.width(), source.height(), self.cols, self.scale)
    }
}

/// Render one row of the plan.
fn render_row<S: GrayscaleSource + ?Sized>(
    source: &S,
    plan: &TilePlan,
    palette: Palette,
    row: u32,
) -> String {
    let levels = palette.len();
    plan.row_tiles(row)
        .map(|tile| palette.char_at(quantize(source, &tile, levels)))
        .collect()
}

/// Convert a grayscale image into ASCII art.
///
/// Returns `rows` lines of exactly `cols` characters joined by `\n`, with no
/// trailing newline. The geometry is validated before any pixel is read.
///
/// # Example
/// ```
/// use ascii_art::ascii::{render, GrayFrame, RenderOptions};
///
/// let black = GrayFrame::filled(4, 4, 0);
/// let art = render(&black, &RenderOptions::new(4, 1.0, false)).unwrap();
/// assert_eq!(art, "@@@@\n@@@@\n@@@@\n@@@@");
/// ```
pub fn render<S: GrayscaleSource + ?Sized>(
    source: &S,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let plan = options.plan(source)?;
    log::debug!(
        "Rendering {}x{} image as {}x{} characters",
        plan.width(),
        plan.height(),
        plan.cols(),
        plan.rows()
    );

    let lines: Vec<String> = (0..plan.rows())
        .map(|row| render_row(source, &plan, options.palette, row))
        .collect();

    Ok(lines.join("\n"))
}

/// Convert a grayscale image into ASCII art, quantizing rows on the rayon pool.
///
/// Output is byte-identical to [`render`]: rows may be computed out of
/// order but are assembled in row-major order.
pub fn render_parallel<S: GrayscaleSource + Sync + ?Sized>(
    source: &S,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let plan = options.plan(source)?;
    let palette = options.palette;

    let lines: Vec<String> = (0..plan.rows())
        .into_par_iter()
        .map(|row| render_row(source, &plan, palette, row))
        .collect();

    Ok(lines.join("\n"))
}
