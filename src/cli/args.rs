//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "checkin")]
#[command(about = "Email check-in with local history and welcome messages", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Skip all network calls (no webhook, fallback welcome message)
    #[arg(short = 'O', long, global = true)]
    pub(crate) offline: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// History database file
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) store: Option<PathBuf>,

    /// Keep history in memory only
    #[arg(long, global = true)]
    pub(crate) ephemeral: bool,

    /// Timezone for check-in timestamps (e.g., "Asia/Taipei", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Spreadsheet webhook endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) webhook_url: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.offline && config.offline {
            self.offline = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // String options: only apply if CLI didn't set them
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.webhook_url.is_none() {
            self.webhook_url = config.webhook_url.clone();
        }
        if self.store.is_none() {
            self.store = config.store_path.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
