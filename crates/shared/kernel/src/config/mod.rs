use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at the configuration file (without extension).
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";
/// Prefix of environment overrides, e.g. `FOLIO__DATABASE__URL`.
pub const ENV_PREFIX: &str = "FOLIO";

const DEFAULT_CONFIG_PATH: &str = "server";

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Resolves the configuration file path: explicit argument, then `FOLIO_CONFIG`, then `server`.
#[must_use]
pub fn config_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map(|p| p.as_ref().to_path_buf())
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads layered configuration into `T`.
///
/// 1. **Base File** (optional): `server.toml`, `server.yaml`, `server.json`, ... as resolved by
///    [`config_path`]. A missing file is not an error; every field has a default.
/// 2. **Environment Overrides**: variables prefixed with `FOLIO__`, nested with `__`
///    (`FOLIO__DATABASE__URL` maps to `database.url`). `FOLIO__SERVER__CORS__ALLOWED_ORIGINS`
///    accepts a comma-separated list.
///
/// # Errors
/// Returns an error if the file exists but is malformed, or if the merged values do not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(&config_path(path), None)
}

fn load_layers<T>(path: &Path, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let environment = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .convert_case(config::Case::Snake)
        .source(env);

    let builder = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(environment);

    info!("Loading config from {}", path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
