//! ascii-art library crate.
//!
//! Turns images into ASCII art: tile a grayscale image, quantize each tile
//! to a character from a density ramp, and print the rows. Images come from
//! local files or from a keyword search against an image engine.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod search;
