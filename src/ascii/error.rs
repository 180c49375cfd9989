//! Render error types

/// Errors that stop an image from being rendered.
///
/// Neither variant is transient: retrying with the same image and
/// options fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// Tiles would be smaller than one pixel (or taller than the image)
    #[error(
        "Image too small for specified cols: {width}x{height} pixels cannot hold {cols} columns x {rows} rows"
    )]
    Geometry {
        cols: u32,
        rows: u32,
        width: u32,
        height: u32,
    },

    /// Options or source dimensions are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
