//! CLI enum types.

use clap::ValueEnum;

use crate::search::SearchEngine;

/// Image search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    #[default]
    Bing,
}

impl From<Engine> for SearchEngine {
    fn from(e: Engine) -> Self {
        match e {
            Engine::Bing => SearchEngine::Bing,
        }
    }
}
