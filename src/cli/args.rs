//! CLI argument parsing with clap.

use clap::builder::BoolishValueParser;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Engine;
use crate::ascii::{Palette, RenderOptions, DEFAULT_COLS, DEFAULT_SCALE};
use crate::config::Config;
use crate::search::SearchEngine;

/// Parse and validate a column count (at least 1)
fn parse_cols(s: &str) -> Result<u32, String> {
    let cols: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid column count", s))?;
    if cols == 0 {
        return Err("Number of columns must be at least 1".to_string());
    }
    Ok(cols)
}

/// Parse and validate a height scale (finite, greater than 0)
fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Scale must be greater than 0, got {}", s));
    }
    Ok(scale)
}

/// Shows different ASCII Art given a keyword
///
/// You can change the number of columns and the scale.
/// There are 2 gray scales available: 10 and 70 levels (default is 70).
#[derive(Parser, Debug)]
#[command(name = "ascii-art")]
#[command(version, about = "Generate an ASCII Art from a keyword", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Keyword to search images for
    #[arg(required = true)]
    pub keyword: Option<String>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Image search engine
    #[arg(short, long)]
    pub engine: Option<Engine>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output geometry options shared by search and `render`.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct RenderArgs {
    /// Number of columns for ASCII Art [default: 79]
    #[arg(short, long, value_parser = parse_cols)]
    pub cols: Option<u32>,

    /// Height scale for ASCII Art [default: 0.43]
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Whether you want a grayscale of 70 (true) or 10 (false) levels [default: true]
    #[arg(short, long, value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub more_levels: Option<bool>,

    /// Quantize rows on all cores
    #[arg(long)]
    pub parallel: bool,
}

/// Render options after merging CLI args, config file and defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub options: RenderOptions,
    pub parallel: bool,
}

impl RenderArgs {
    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(&self, config: &Config) -> RenderSettings {
        let cols = self.cols.or(config.render.cols).unwrap_or(DEFAULT_COLS);
        let scale = self.scale.or(config.render.scale).unwrap_or(DEFAULT_SCALE);
        let more_levels = self
            .more_levels
            .or(config.render.more_levels)
            .unwrap_or(true);

        RenderSettings {
            options: RenderOptions {
                cols,
                scale,
                palette: Palette::from_more_levels(more_levels),
            },
            parallel: self.parallel || config.render.parallel,
        }
    }
}

impl Args {
    /// Search engine: CLI > config > default.
    pub fn search_engine(&self, config: &Config) -> SearchEngine {
        self.engine
            .map(SearchEngine::from)
            .or(config.search.engine)
            .unwrap_or_default()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a local image file
    Render {
        /// Path to the image (PNG, JPEG, GIF, WebP, BMP)
        path: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
