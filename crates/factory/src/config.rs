use ::config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "fabrik";
const ENV_PREFIX: &str = "FABRIK";

/// Errors raised while loading configuration.
#[fabrik_derive::fabrik_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides layered on top.
///
/// 1. **Base file**: `path`, or `fabrik` in the working directory. The format is
///    picked from the extension (`.toml`, `.json`, `.yaml`, ...).
/// 2. **Environment**: variables prefixed with `FABRIK__`. Nested keys use double
///    underscores, so `FABRIK__DUPLICATES=replace` sets `duplicates`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unreadable, or does not
/// match the shape of `T`.
///
/// # Example
/// ```rust,no_run
/// use fabrik_factory::FactoryConfig;
/// use fabrik_factory::config::load_config;
///
/// let cfg: FactoryConfig = load_config(Some("config/fabrik.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(::config::Case::Snake),
        );

    info!("Loading factory config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
