use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The underlying source could not be read or deserialized.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from a file (e.g. `host.toml`). If no path is
///    provided, it defaults to `"host"` in the working directory.
/// 2. **Environment overrides**: values from variables prefixed with `IGN__`.
///    Nested structures use double underscores, so `IGN__INTEGRATIONS__MAPS__API_KEY`
///    maps to `integrations.maps.api_key`.
///
/// # Errors
/// Returns [`ConfigError`] if the file cannot be found, the environment
/// variables are malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use ign_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct HostConfig {
///     name: String,
/// }
///
/// let cfg: HostConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("host"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("IGN").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
