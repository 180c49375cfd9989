//! Grayscale pixel buffers consumed by the renderer.

use std::fmt;
use std::path::Path;

use super::grayscale::to_grayscale;
use super::tiles::Tile;

/// Read-only access to a single-channel intensity image.
///
/// The renderer only needs dimensions and rectangular sums, so anything
/// that can answer those (a decoded frame, a test fixture, a view into a
/// larger buffer) can be rendered.
pub trait GrayscaleSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Sum of all intensities inside `tile`, and the number of pixels summed.
    fn region_sum(&self, tile: &Tile) -> (u64, u64);
}

/// A decoded grayscale image, one byte per pixel in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct GrayFrame {
    /// Intensity samples (0-255)
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

/// Errors that can occur when turning encoded bytes into a [`GrayFrame`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        /// Expected byte count (width * height)
        expected: usize,
        /// Byte count supplied
        actual: usize,
        width: u32,
        height: u32,
    },
}

impl GrayFrame {
    /// Wrap an existing grayscale buffer.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::BufferSize` when `data` does not hold exactly
    /// `width * height` samples.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(DecodeError::BufferSize {
                expected,
                actual: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A frame where every pixel has the same intensity.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Decode an encoded image (PNG, JPEG, GIF, ...) into grayscale.
    ///
    /// The image is first expanded to RGB and then reduced with the
    /// BT.601 luminance formula, so alpha and palette images are handled
    /// the same way as plain RGB.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        let data = to_grayscale(rgb.as_raw());
        log::debug!("Decoded {}x{} image ({} bytes)", width, height, bytes.len());
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Read and decode an image file from disk.
    pub fn open(path: &Path) -> Result<Self, DecodeError> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }

    /// Intensity at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

impl fmt::Debug for GrayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrayFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.data.len())
            .finish()
    }
}

impl GrayscaleSource for GrayFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn region_sum(&self, tile: &Tile) -> (u64, u64) {
        let width = self.width as usize;
        let x1 = tile.x1.min(self.width) as usize;
        let x2 = tile.x2.min(self.width) as usize;
        let y1 = tile.y1.min(self.height) as usize;
        let y2 = tile.y2.min(self.height) as usize;
        if x1 >= x2 || y1 >= y2 {
            return (0, 0);
        }

        let mut sum = 0u64;
        let mut count = 0u64;
        for y in y1..y2 {
            let row = &self.data[y * width + x1..y * width + x2];
            sum += row.iter().map(|&v| v as u64).sum::<u64>();
            count += row.len() as u64;
        }
        (sum, count)
    }
}

impl GrayscaleSource for image::GrayImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn region_sum(&self, tile: &Tile) -> (u64, u64) {
        let mut sum = 0u64;
        let mut count = 0u64;
        for y in tile.y1..tile.y2.min(self.height()) {
            for x in tile.x1..tile.x2.min(self.width()) {
                sum += self.get_pixel(x, y).0[0] as u64;
                count += 1;
            }
        }
        (sum, count)
    }
}
