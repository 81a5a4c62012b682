mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod logging;
mod message;
mod notify;
mod output;
mod store;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::{Cli, Commands};
use config::{Config, Settings};

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    let settings = match Settings::resolve(&cli, &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    if settings.api_key.is_none() && !settings.offline {
        tracing::debug!("no API key in environment, welcome messages will use the fallback");
    }

    let ctx = CommandContext {
        settings: &settings,
        json: cli.json,
        use_color: cli.use_color(),
    };

    let command = cli.command.unwrap_or(Commands::Form);
    match app::run(command, &ctx) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
