use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG: &str = "shutter";
const ENV_PREFIX: &str = "SHUTTER";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[shutter_derive::shutter_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: `path`, or `shutter` in the working directory. The extension may be omitted
///    (`shutter` resolves `shutter.toml`, `shutter.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `SHUTTER__`, nested with double
///    underscores (`SHUTTER__MAPPING__PHOTO_ROUTE` maps to `mapping.photo_route`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use shutter_kernel::config::load_config;
/// use shutter_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let environment = Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR);
    load_layers(path, environment)
}

fn load_layers<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_domain::config::AppConfig;
    use std::fs;

    #[test]
    fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("shutter.toml");
        fs::write(&file, "[mapping]\nphoto_route = \"from-file\"\npreview_size = \"small\"\n")?;

        let vars = [("SHUTTER__MAPPING__PHOTO_ROUTE".to_owned(), "from-env".to_owned())];
        let environment = Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .source(Some(vars.into_iter().collect()));

        let cfg: AppConfig = load_layers(Some(&file), environment)?;
        assert_eq!(cfg.mapping.photo_route, "from-env");
        assert_eq!(cfg.mapping.preview_size, "small");
        Ok(())
    }
}
