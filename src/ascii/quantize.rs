//! Brightness to palette level mapping.

use super::frame::GrayscaleSource;
use super::tiles::Tile;

/// Mean intensity of the pixels inside `tile`, truncated to an integer.
///
/// The planner never emits an empty tile; if one slips through it reads
/// as black rather than dividing by zero.
pub fn mean_brightness<S: GrayscaleSource + ?Sized>(source: &S, tile: &Tile) -> u8 {
    let (sum, count) = source.region_sum(tile);
    if count == 0 {
        return 0;
    }
    (sum / count).min(255) as u8
}

/// Map an integer brightness (0-255) onto `levels` palette slots.
///
/// `index = avg * (levels - 1) / 255` with integer division, so 0 maps to
/// the first slot and 255 to the last.
#[inline]
pub fn level_index(avg: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    (avg as usize * (levels - 1)) / 255
}

/// Quantize one tile to a palette index.
///
/// The average is truncated before scaling. Scaling the exact mean first
/// would move a few boundary tiles up one level.
pub fn quantize<S: GrayscaleSource + ?Sized>(source: &S, tile: &Tile, levels: usize) -> usize {
    level_index(mean_brightness(source, tile), levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::frame::GrayFrame;

    #[test]
    fn test_level_index_ends() {
        assert_eq!(level_index(0, 10), 0);
        assert_eq!(level_index(255, 10), 9);
        assert_eq!(level_index(0, 70), 0);
        assert_eq!(level_index(255, 70), 69);
    }

    #[test]
    fn test_level_index_boundaries() {
        // 10 levels: a new level every 28.33 intensity steps
        assert_eq!(level_index(28, 10), 0);
        assert_eq!(level_index(29, 10), 1);
        assert_eq!(level_index(127, 10), 4);
        assert_eq!(level_index(254, 10), 8);
    }

    #[test]
    fn test_level_index_zero_levels() {
        assert_eq!(level_index(200, 0), 0);
    }

    #[test]
    fn test_mean_truncates() {
        // (0 + 1) / 2 = 0.5 -> 0
        let frame = GrayFrame::new(vec![0, 1], 2, 1).unwrap();
        let tile = Tile {
            x1: 0,
            y1: 0,
            x2: 2,
            y2: 1,
        };
        assert_eq!(mean_brightness(&frame, &tile), 0);
    }

    #[test]
    fn test_truncate_before_scale() {
        // mean 28.5: truncated to 28 -> level 0; scaling first would give 1
        let frame = GrayFrame::new(vec![28, 29], 2, 1).unwrap();
        let tile = Tile {
            x1: 0,
            y1: 0,
            x2: 2,
            y2: 1,
        };
        assert_eq!(quantize(&frame, &tile, 10), 0);
        assert_eq!((28.5f64 * 9.0 / 255.0) as usize, 1);
    }

    #[test]
    fn test_empty_tile_reads_black() {
        let frame = GrayFrame::filled(3, 3, 255);
        let tile = Tile {
            x1: 1,
            y1: 1,
            x2: 1,
            y2: 2,
        };
        assert_eq!(mean_brightness(&frame, &tile), 0);
    }
}
