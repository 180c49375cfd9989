//! Unit tests for the ASCII renderer module.
//!
//! These tests verify the core rendering algorithms:
//! - Tile planning and geometry validation
//! - Tile coverage of the source image
//! - Brightness quantization
//! - Palette lookup

use ascii_art::ascii::*;
use proptest::prelude::*;

// ==================== Planning Tests ====================

#[test]
fn test_plan_one_pixel_tiles() {
    // W=79, H=79, cols=79, scale=1.0 -> 1x1 tiles, 79 rows
    let plan = TilePlan::new(79, 79, 79, 1.0).unwrap();
    assert_eq!(plan.tile_width(), 1.0);
    assert_eq!(plan.tile_height(), 1.0);
    assert_eq!(plan.rows(), 79);
    assert_eq!(plan.cols(), 79);
}

#[test]
fn test_plan_default_scale() {
    // 400 / 79 = 5.063 wide, / 0.43 = 11.775 tall, 300 / 11.775 = 25.48 rows
    let plan = TilePlan::new(400, 300, DEFAULT_COLS, DEFAULT_SCALE).unwrap();
    assert_eq!(plan.rows(), 25);
}

#[test]
fn test_plan_more_cols_than_pixels() {
    let result = TilePlan::new(50, 50, 100, 1.0);
    assert!(matches!(
        result,
        Err(RenderError::Geometry {
            cols: 100,
            width: 50,
            ..
        })
    ));
}

#[test]
fn test_plan_too_many_rows() {
    // scale 4.0 makes each tile a quarter pixel tall
    let result = TilePlan::new(10, 10, 10, 4.0);
    assert!(matches!(result, Err(RenderError::Geometry { .. })));
}

#[test]
fn test_plan_image_shorter_than_one_row() {
    // 100x2 at 10 cols: tiles are 10x10, no complete row fits
    let plan = TilePlan::new(100, 2, 10, 1.0).unwrap();
    assert_eq!(plan.rows(), 0);

    let frame = GrayFrame::filled(100, 2, 0);
    assert_eq!(render(&frame, &RenderOptions::new(10, 1.0, false)).unwrap(), "");
}

#[test]
fn test_plan_one_pixel_tall_image() {
    // tile height 0.83 but a single row: stretched to the bottom edge
    let frame = GrayFrame::filled(10, 1, 0);
    let art = render(&frame, &RenderOptions::new(10, 1.2, false)).unwrap();
    assert_eq!(art, "@@@@@@@@@@");
}

#[test]
fn test_plan_invalid_configuration() {
    assert!(matches!(
        TilePlan::new(10, 10, 0, 1.0),
        Err(RenderError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TilePlan::new(10, 10, 5, 0.0),
        Err(RenderError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TilePlan::new(10, 10, 5, f64::NAN),
        Err(RenderError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        TilePlan::new(0, 10, 5, 1.0),
        Err(RenderError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_geometry_error_message() {
    let err = TilePlan::new(50, 50, 100, 1.0).unwrap_err();
    assert!(err.to_string().starts_with("Image too small for specified cols"));
}

#[test]
fn test_last_tile_stretched_to_edges() {
    // 10 / 3 = 3.33 wide; truncation leaves a 4 pixel last column
    let plan = TilePlan::new(10, 10, 3, 1.0).unwrap();
    assert_eq!(plan.rows(), 3);

    assert_eq!(plan.tile_at(0, 0), Tile { x1: 0, y1: 0, x2: 3, y2: 3 });
    assert_eq!(plan.tile_at(0, 1), Tile { x1: 3, y1: 0, x2: 6, y2: 3 });
    assert_eq!(plan.tile_at(2, 2), Tile { x1: 6, y1: 6, x2: 10, y2: 10 });
}

#[test]
fn test_tiles_row_major_order() {
    let plan = TilePlan::new(4, 4, 2, 1.0).unwrap();
    let tiles: Vec<Tile> = plan.tiles().collect();
    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[0], plan.tile_at(0, 0));
    assert_eq!(tiles[1], plan.tile_at(0, 1));
    assert_eq!(tiles[2], plan.tile_at(1, 0));
    assert_eq!(tiles[3], plan.tile_at(1, 1));
}

// ==================== Quantization Tests ====================

#[test]
fn test_quantize_black_and_white() {
    let tile = Tile { x1: 0, y1: 0, x2: 4, y2: 4 };

    let black = GrayFrame::filled(4, 4, 0);
    assert_eq!(quantize(&black, &tile, 10), 0);
    assert_eq!(Palette::Standard.char_at(quantize(&black, &tile, 10)), '@');

    let white = GrayFrame::filled(4, 4, 255);
    assert_eq!(quantize(&white, &tile, 10), 9);
    assert_eq!(Palette::Standard.char_at(quantize(&white, &tile, 10)), ' ');
    assert_eq!(quantize(&white, &tile, 70), 69);
    assert_eq!(Palette::Extended.char_at(69), ' ');
}

#[test]
fn test_mean_brightness_truncates() {
    let frame = GrayFrame::new(vec![10, 11], 2, 1).unwrap();
    let tile = Tile { x1: 0, y1: 0, x2: 2, y2: 1 };
    assert_eq!(mean_brightness(&frame, &tile), 10);
}

#[test]
fn test_quantize_only_reads_inside_tile() {
    // Left half black, right half white
    let mut data = Vec::new();
    for _ in 0..4 {
        data.extend_from_slice(&[0, 0, 255, 255]);
    }
    let frame = GrayFrame::new(data, 4, 4).unwrap();

    let left = Tile { x1: 0, y1: 0, x2: 2, y2: 4 };
    let right = Tile { x1: 2, y1: 0, x2: 4, y2: 4 };
    assert_eq!(quantize(&frame, &left, 10), 0);
    assert_eq!(quantize(&frame, &right, 10), 9);
}

#[test]
fn test_palettes() {
    assert_eq!(GRAY_SCALE_10.len(), 10);
    assert_eq!(GRAY_SCALE_70.len(), 70);
    assert_eq!(Palette::from_more_levels(true), Palette::Extended);
    assert_eq!(Palette::from_more_levels(false), Palette::Standard);
    assert_eq!(Palette::Extended.char_at(0), '$');
}

// ==================== Property Tests ====================

fn geometry() -> impl Strategy<Value = (u32, u32, u32, f64)> {
    (1u32..300, 1u32..300, 0.2f64..3.0).prop_flat_map(|(width, height, scale)| {
        (Just(width), Just(height), 1..=width, Just(scale))
    })
}

/// Row count the planner is expected to derive.
fn expected_rows(width: u32, height: u32, cols: u32, scale: f64) -> (u32, f64) {
    let tile_height = width as f64 / cols as f64 / scale;
    ((height as f64 / tile_height).floor() as u32, tile_height)
}

proptest! {
    #[test]
    fn prop_plan_accepts_every_drawable_geometry((width, height, cols, scale) in geometry()) {
        let (rows, tile_height) = expected_rows(width, height, cols, scale);
        let drawable = rows <= height && (rows < 2 || tile_height >= 1.0);

        let result = TilePlan::new(width, height, cols, scale);
        if drawable {
            let plan = result.unwrap();
            prop_assert_eq!(plan.rows(), rows);
            prop_assert_eq!(plan.cols(), cols);
        } else {
            let is_geometry_error = matches!(result, Err(RenderError::Geometry { .. }));
            prop_assert!(is_geometry_error);
        }
    }

    #[test]
    fn prop_tiles_partition_image((width, height, cols, scale) in geometry()) {
        let (rows, tile_height) = expected_rows(width, height, cols, scale);
        prop_assume!(rows <= height && (rows < 2 || tile_height >= 1.0));

        let plan = TilePlan::new(width, height, cols, scale).unwrap();
        let tiles: Vec<Tile> = plan.tiles().collect();
        prop_assert_eq!(tiles.len() as u64, plan.rows() as u64 * plan.cols() as u64);

        if plan.rows() > 0 {
            // Non-empty tiles whose areas add up to the image means no gaps and no overlap
            let total: u64 = tiles.iter().map(Tile::area).sum();
            prop_assert!(tiles.iter().all(|t| !t.is_empty()));
            prop_assert_eq!(total, width as u64 * height as u64);
        }

        for row in 0..plan.rows() {
            prop_assert_eq!(plan.tile_at(row, plan.cols() - 1).x2, width);
        }
        if plan.rows() > 0 {
            for col in 0..plan.cols() {
                prop_assert_eq!(plan.tile_at(plan.rows() - 1, col).y2, height);
            }
        }
    }

    #[test]
    fn prop_geometry_rejected_when_cols_exceed_width(
        width in 1u32..200,
        extra in 1u32..200,
        height in 1u32..200,
    ) {
        let result = TilePlan::new(width, height, width + extra, 1.0);
        let is_geometry_error = matches!(result, Err(RenderError::Geometry { .. }));
        prop_assert!(is_geometry_error);
    }

    #[test]
    fn prop_level_index_monotonic(a in 0u8..=255, b in 0u8..=255) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(level_index(lo, 70) <= level_index(hi, 70));
        prop_assert!(level_index(lo, 10) <= level_index(hi, 10));
        prop_assert!(level_index(hi, 70) < 70);
    }
}
