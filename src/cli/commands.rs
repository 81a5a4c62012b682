//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Interactive check-in form reading one email per line (default)
    Form,
    /// Check in a single email
    Submit {
        /// Email address to check in
        email: String,
    },
    /// Show recent check-ins
    History,
    /// Explain how to deploy the spreadsheet webhook
    Setup {
        /// Print only the webhook script source
        #[arg(long)]
        script: bool,
    },
}
