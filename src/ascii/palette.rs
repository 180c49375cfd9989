//! Palette definitions for ASCII rendering.

/// Extended density ramp (70 levels).
/// Characters ordered from darkest source intensity (`$`) to brightest (space).
pub const GRAY_SCALE_70: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Standard density ramp (10 levels).
/// Characters ordered from darkest source intensity (`@`) to brightest (space).
pub const GRAY_SCALE_10: &str = "@%#*+=-:. ";

/// Palette used to turn tile brightness into a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// 70-level ramp, more detail
    #[default]
    Extended,
    /// 10-level ramp, cleaner look
    Standard,
}

impl Palette {
    /// Select a palette from the `more_levels` switch.
    pub fn from_more_levels(more_levels: bool) -> Self {
        if more_levels {
            Palette::Extended
        } else {
            Palette::Standard
        }
    }

    /// The palette characters as a literal string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Extended => GRAY_SCALE_70,
            Palette::Standard => GRAY_SCALE_10,
        }
    }

    /// Number of levels in the palette.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Palettes are never empty; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Character for a quantized level.
    ///
    /// Both palettes are pure ASCII, so byte indexing is character indexing.
    /// Out-of-range indices clamp to the brightest character.
    pub fn char_at(&self, index: usize) -> char {
        let bytes = self.as_str().as_bytes();
        let last = bytes.len() - 1;
        bytes[index.min(last)] as char
    }

    /// Get a human-readable name for the palette.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Extended => "extended (70 levels)",
            Palette::Standard => "standard (10 levels)",
        }
    }
}
