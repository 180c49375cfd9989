//! Interactive search session: show results one by one until the user keeps one.

use std::io::{self, BufRead, Write};

use super::args::RenderSettings;
use super::prompt::{ask_keep, Answer};
use crate::ascii::{self, GrayFrame, RenderError};
use crate::fetch::ImageClient;
use crate::search::{ImageResult, ImageSearch, SearchError};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user kept this image
    Kept(ImageResult),
    /// Every result was shown (or skipped) without a keeper
    Exhausted {
        /// Number of images actually rendered
        shown: usize,
    },
    /// Input closed before a decision
    Aborted,
}

/// Errors that end a session early.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Image search failed: {0}")]
    Search(#[from] SearchError),

    #[error(transparent)]
    Render(RenderError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Render a frame with the resolved settings.
pub fn render_frame(frame: &GrayFrame, settings: &RenderSettings) -> Result<String, RenderError> {
    if settings.parallel {
        ascii::render_parallel(frame, &settings.options)
    } else {
        ascii::render(frame, &settings.options)
    }
}

/// Run one search session.
///
/// Results are shown in page order. An image that cannot be downloaded,
/// decoded or rendered at the requested geometry is logged and skipped.
/// Render options are checked before any request is made; invalid options,
/// a failed search or a broken terminal end the session with an error.
pub async fn browse<R: BufRead, W: Write>(
    search: &ImageSearch<'_>,
    client: &ImageClient,
    keyword: &str,
    settings: &RenderSettings,
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome, SessionError> {
    settings.options.validate().map_err(SessionError::Render)?;

    let results = search.search(keyword).await?;
    let mut shown = 0;

    for result in results {
        let frame = match client.fetch_image(&result.url).await {
            Ok(frame) => frame,
            Err(e) => {
                log::warn!("Skipping '{}': {}", result.title, e);
                continue;
            }
        };

        let art = match render_frame(&frame, settings) {
            Ok(art) => art,
            Err(e) => {
                log::warn!("Skipping '{}': {}", result.title, e);
                continue;
            }
        };

        writeln!(output, "Image name : {}", result.title)?;
        writeln!(output, "{}", art)?;
        shown += 1;

        match ask_keep(input, output)? {
            Answer::Keep => {
                writeln!(output, "Awesome !")?;
                return Ok(SessionOutcome::Kept(result));
            }
            Answer::Skip => {}
            Answer::Quit => return Ok(SessionOutcome::Aborted),
        }
    }

    Ok(SessionOutcome::Exhausted { shown })
}
