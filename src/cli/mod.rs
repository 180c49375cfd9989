//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, the interactive search
//! session and subcommand handlers.

mod args;
mod commands;
mod enums;
mod prompt;
mod session;

pub use args::{Args, Command, ConfigAction, RenderArgs, RenderSettings};
pub use commands::{handle_config_action, render_file, run_search};
pub use enums::Engine;
pub use prompt::{ask_keep, parse_answer, Answer, KEEP_PROMPT};
pub use session::{browse, render_frame, SessionError, SessionOutcome};
