use std::{fs, path::Path};

use anyhow::Context;
use donor_core::DEFAULT_DIRECTORY_URL;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "donor_gui.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    directory_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the TOML file at `config_path` (if readable), then the
/// process environment.
pub fn load_settings(config_path: &Path) -> Settings {
    load_settings_with(config_path, |name| std::env::var(name).ok())
}

/// Same layering as [`load_settings`] with the environment supplied by `lookup`.
pub fn load_settings_with(
    config_path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, lookup);

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
        tracing::warn!("ignoring unparseable settings file");
        return;
    };

    if let Some(v) = non_blank(file_cfg.directory_url) {
        settings.directory_url = v;
    }
    if let Some(v) = non_blank(file_cfg.log_filter) {
        settings.log_filter = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = non_blank(lookup("DONOR_DIRECTORY_URL")) {
        settings.directory_url = v;
    }
    if let Some(v) = non_blank(lookup("APP__DIRECTORY_URL")) {
        settings.directory_url = v;
    }

    if let Some(v) = non_blank(lookup("DONOR_LOG")) {
        settings.log_filter = v;
    }
    if let Some(v) = non_blank(lookup("APP__LOG_FILTER")) {
        settings.log_filter = v;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_directory_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("invalid directory url '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("directory url '{raw}' must use http or https, not '{other}'"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
