use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub mapping: MappingConfig,
    pub site: SiteConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into resolvers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Knobs consumed by the resolver catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Route name written into photo route descriptors.
    pub photo_route: String,
    /// Prefix of deep links built for map markers (`{prefix}{id}`).
    pub photo_link_prefix: String,
    /// Thumbnail size key used for the gallery preview.
    pub preview_size: String,
    /// Thumbnail size key used for the full-size image.
    pub original_size: String,
    /// `chrono` pattern of timestamps sent by the API.
    pub source_date_format: String,
    /// `chrono` pattern used when displaying timestamps.
    pub display_date_format: String,
}

/// Public site metadata, used for structured data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
    pub name: String,
    pub author: String,
    pub image: Option<String>,
}

/// Logging knobs for binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Explicit filter directives, e.g. `shutter_mapper=trace`.
    pub filter: Option<String>,
    /// Write file logs as JSON lines.
    pub json: bool,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    pub max_files: usize,
}

// --- Default ---

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            photo_route: "photo".to_owned(),
            photo_link_prefix: "/photo/".to_owned(),
            preview_size: "medium".to_owned(),
            original_size: "large".to_owned(),
            source_date_format: "%Y-%m-%d %H:%M:%S".to_owned(),
            display_date_format: "%d.%m.%Y %H:%M".to_owned(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost".to_owned(),
            name: "Shutter".to_owned(),
            author: "Shutter".to_owned(),
            image: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, json: false, path: None, max_files: 10 }
    }
}
