//! Subcommand handlers for search, render and config actions.

use std::io;
use std::path::Path;

use super::args::{ConfigAction, RenderSettings};
use super::session::{browse, render_frame, SessionOutcome};
use crate::ascii::GrayFrame;
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::fetch::ImageClient;
use crate::search::{ImageSearch, SearchEngine};

/// Search for `keyword` and walk through the results interactively.
pub fn run_search(
    keyword: &str,
    settings: &RenderSettings,
    engine: SearchEngine,
    config: &Config,
) -> Result<(), String> {
    let client = ImageClient::with_settings(config.http.client_settings())
        .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let outcome = rt.block_on(async {
        let search =
            ImageSearch::new(&client, engine).with_thumbnail_size(config.thumbnail_size());
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        browse(&search, &client, keyword, settings, &mut input, &mut output).await
    });

    match outcome.map_err(|e| e.to_string())? {
        SessionOutcome::Kept(result) => {
            log::info!("Kept '{}' ({})", result.title, result.url);
        }
        SessionOutcome::Exhausted { shown: 0 } => {
            println!("No usable images found for \"{}\".", keyword);
        }
        SessionOutcome::Exhausted { shown } => {
            println!("No more images ({} shown).", shown);
        }
        SessionOutcome::Aborted => {}
    }
    Ok(())
}

/// Render a local image file and print it.
pub fn render_file(path: &Path, settings: &RenderSettings) -> Result<(), String> {
    let frame = GrayFrame::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let art = render_frame(&frame, settings).map_err(|e| e.to_string())?;
    println!("{}", art);
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    settings: &RenderSettings,
    engine: SearchEngine,
    config_path: Option<&Path>,
) -> Result<(), String> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let http = config.http.client_settings();
            println!("Current configuration:");
            println!("  Columns: {}", settings.options.cols);
            println!("  Scale: {}", settings.options.scale);
            println!("  Palette: {}", settings.options.palette.name());
            println!("  Parallel: {}", if settings.parallel { "yes" } else { "no" });
            println!("  Engine: {}", engine);
            println!("  Thumbnail size: {}", config.thumbnail_size());
            println!("  Timeout: {:?}", http.timeout);
            println!("  Retries: {}", http.max_retries);
            println!("  Max image size: {} bytes", http.max_image_bytes);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'ascii-art config show' to view current settings.",
                    path.display()
                ));
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}
