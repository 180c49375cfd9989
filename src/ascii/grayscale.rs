//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

/// Convert packed RGB bytes to grayscale using ITU-R BT.601 luminance formula.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math, coefficients scaled by 1000:
/// - R: 299/1000
/// - G: 587/1000
/// - B: 114/1000
///
/// This is the same truncating conversion image libraries use for their
/// single-channel "L" mode, so rendered output lines up with theirs.
///
/// # Arguments
/// * `rgb` - Packed RGB data, 3 bytes per pixel. A trailing partial pixel is ignored.
///
/// # Returns
/// A vector of grayscale values (0-255), one per pixel
pub fn to_grayscale(rgb: &[u8]) -> Vec<u8> {
    let mut gray = Vec::with_capacity(rgb.len() / 3);
    to_grayscale_into(rgb, &mut gray);
    gray
}

/// Convert packed RGB bytes to grayscale, reusing an existing buffer.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(rgb: &[u8], buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(rgb.len() / 3);

    for px in rgb.chunks_exact(3) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        buffer.push(luminance as u8);
    }

    buffer.len()
}
