use ascii_art::cli::{handle_config_action, render_file, run_search, Args, Command};
use ascii_art::config::Config;
use clap::Parser;

fn load_env() {
    // Load .env file, don't override existing env vars
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Load config file.
/// If --config is specified, require the file to exist.
/// Otherwise, fall back to defaults if the default config can't be read.
fn load_config(args: &Args) -> Result<Config, String> {
    if let Some(ref path) = args.config {
        return Config::load_from_explicit(path.clone()).map_err(|e| e.to_string());
    }

    match Config::load() {
        Ok(c) => Ok(c),
        Err(e) => {
            eprintln!("Warning: Failed to load config file: {}", e);
            eprintln!("Using default settings.\n");
            Ok(Config::default())
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = load_config(&args)?;

    match args.command {
        Some(Command::Render { ref path, ref render }) => {
            let settings = render.resolve(&config);
            render_file(path, &settings)
        }
        Some(Command::Config { ref action }) => {
            let settings = args.render.resolve(&config);
            let engine = args.search_engine(&config);
            handle_config_action(
                action.clone(),
                &config,
                &settings,
                engine,
                args.config.as_deref(),
            )
        }
        None => {
            let keyword = args
                .keyword
                .as_deref()
                .ok_or_else(|| "A keyword is required".to_string())?;
            let settings = args.render.resolve(&config);
            let engine = args.search_engine(&config);
            run_search(keyword, &settings, engine, &config)
        }
    }
}

fn main() {
    // Load .env file before anything else
    load_env();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
