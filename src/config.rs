use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::consts::{
    API_KEY_VARS, DEFAULT_ADMIN_EMAIL, DEFAULT_API_BASE, DEFAULT_CONTACT_EMAIL, DEFAULT_MODEL,
    DEFAULT_WEBHOOK_URL,
};
use crate::core::ResetDelays;
use crate::error::AppError;
use crate::store::default_store_path;
use crate::utils::Timezone;

/// Values read from the optional TOML config file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) offline: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) webhook_url: Option<String>,
    #[serde(default)]
    pub(crate) admin_email: Option<String>,
    #[serde(default)]
    pub(crate) contact_email: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) api_base: Option<String>,
    #[serde(default)]
    pub(crate) reset_delay_secs: Option<u64>,
    #[serde(default)]
    pub(crate) error_reset_delay_secs: Option<u64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) store_path: Option<PathBuf>,
    /// File the values came from, if any
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(mut config) => {
                        config.source = Some(path);
                        return config;
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/checkin/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("checkin").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/checkin/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("checkin").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.checkin.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".checkin.toml"));
        }

        paths
    }
}

/// Everything the program needs, resolved once at startup and never changed
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) webhook_url: String,
    pub(crate) admin_email: String,
    pub(crate) contact_email: String,
    pub(crate) model: String,
    pub(crate) api_base: String,
    pub(crate) api_key: Option<String>,
    pub(crate) delays: ResetDelays,
    pub(crate) timezone: Timezone,
    pub(crate) store_path: Option<PathBuf>,
    pub(crate) ephemeral: bool,
    pub(crate) offline: bool,
}

impl Settings {
    /// Merge CLI (already merged with the config file) with the config-only
    /// keys, and look the API key up in the environment.
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        Self::resolve_with_env(cli, config, |name| std::env::var(name).ok())
    }

    fn resolve_with_env(
        cli: &Cli,
        config: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let timezone = Timezone::parse(cli.timezone.as_deref())?;

        let defaults = ResetDelays::default();
        let delays = ResetDelays {
            success: config
                .reset_delay_secs
                .map_or(defaults.success, Duration::from_secs),
            error: config
                .error_reset_delay_secs
                .map_or(defaults.error, Duration::from_secs),
        };

        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| env(*name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        Ok(Self {
            webhook_url: cli
                .webhook_url
                .clone()
                .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()),
            admin_email: config
                .admin_email
                .clone()
                .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            contact_email: config
                .contact_email
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: config
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key,
            delays,
            timezone,
            store_path: cli.store.clone().or_else(default_store_path),
            ephemeral: cli.ephemeral,
            offline: cli.offline,
        })
    }
}
