//! Tile geometry: splitting a source image into one rectangle per output character.

use super::error::RenderError;

/// Default number of output columns.
pub const DEFAULT_COLS: u32 = 79;

/// Default height scale.
/// Terminal cells are roughly twice as tall as wide; 0.43 makes each tile
/// about 2.3x taller than it is wide so the art keeps the image's proportions.
pub const DEFAULT_SCALE: f64 = 0.43;

/// A half-open pixel rectangle `[x1, x2) x [y1, y2)` in source coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Tile {
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

/// The tile grid for one (image, options) pair.
///
/// Tile boundaries are truncated multiples of the real-valued tile size.
/// The last column and row are stretched to the image edge so truncation
/// never drops the right or bottom strip of pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlan {
    width: u32,
    height: u32,
    cols: u32,
    rows: u32,
    tile_width: f64,
    tile_height: f64,
}

/// Check `cols` and `scale` independently of any image.
///
/// # Errors
///
/// Returns `RenderError::InvalidConfiguration` when `cols` is zero or
/// `scale` is not a finite positive number.
pub fn check_options(cols: u32, scale: f64) -> Result<(), RenderError> {
    if cols == 0 {
        return Err(RenderError::InvalidConfiguration(
            "cols must be at least 1".to_string(),
        ));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(RenderError::InvalidConfiguration(format!(
            "scale must be a positive number, got {}",
            scale
        )));
    }
    Ok(())
}

impl TilePlan {
    /// Plan the grid for a `width` x `height` image rendered at `cols` columns.
    ///
    /// `tile_width = width / cols`, `tile_height = tile_width / scale`,
    /// `rows = floor(height / tile_height)`. An image shorter than one tile
    /// plans zero rows and renders as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidConfiguration` when `cols` is zero,
    /// `scale` is not a finite positive number, or the image has no pixels.
    /// Returns `RenderError::Geometry` when there are more columns than
    /// pixels across or more rows than pixels down, or when tiles shorter
    /// than one pixel would leave a row empty.
    pub fn new(width: u32, height: u32, cols: u32, scale: f64) -> Result<Self, RenderError> {
        check_options(cols, scale)?;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidConfiguration(format!(
                "source image has no pixels ({}x{})",
                width, height
            )));
        }

        let tile_width = width as f64 / cols as f64;
        let tile_height = tile_width / scale;
        // `as` saturates, so absurd ratios end up rejected below instead of wrapping
        let rows = (height as f64 / tile_height).floor() as u32;

        // A single row is stretched to the bottom edge, so only a multi-row
        // grid of sub-pixel tiles has an empty row
        let empty_rows = rows >= 2 && tile_height < 1.0;

        if cols > width || rows > height || empty_rows {
            log::debug!(
                "Rejecting {}x{} at {} cols (tile {:.3}x{:.3}, {} rows)",
                width,
                height,
                cols,
                tile_width,
                tile_height,
                rows
            );
            return Err(RenderError::Geometry {
                cols,
                rows,
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            cols,
            rows,
            tile_width,
            tile_height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Real-valued tile width in pixels.
    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    /// Real-valued tile height in pixels.
    pub fn tile_height(&self) -> f64 {
        self.tile_height
    }

    /// Rectangle for the cell at `(row, col)`.
    ///
    /// Callers pass `row < rows()` and `col < cols()`; anything beyond is
    /// clamped to the image edge.
    pub fn tile_at(&self, row: u32, col: u32) -> Tile {
        let x1 = ((col as f64 * self.tile_width) as u32).min(self.width);
        let x2 = if col.saturating_add(1) >= self.cols {
            self.width
        } else {
            (((col + 1) as f64 * self.tile_width) as u32).min(self.width)
        };

        let y1 = ((row as f64 * self.tile_height) as u32).min(self.height);
        let y2 = if row.saturating_add(1) >= self.rows {
            self.height
        } else {
            (((row + 1) as f64 * self.tile_height) as u32).min(self.height)
        };

        Tile { x1, y1, x2, y2 }
    }

    /// All tiles of one row, left to right.
    pub fn row_tiles(&self, row: u32) -> impl Iterator<Item = Tile> + '_ {
        (0..self.cols).map(move |col| self.tile_at(row, col))
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows).flat_map(move |row| self.row_tiles(row))
    }
}
