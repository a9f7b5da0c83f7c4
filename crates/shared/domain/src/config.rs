use crate::constants::{ANALYTICS, ANALYTICS_WRITE_KEY, MAPS, MAPS_API_KEY};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level launch configuration shared across the host process.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchConfigInner {
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub integrations: IntegrationsConfig,
    pub launcher: LauncherConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct LaunchConfig {
    #[serde(flatten, default)]
    inner: Arc<LaunchConfigInner>,
}

impl Deref for LaunchConfig {
    type Target = LaunchConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for LaunchConfig {
    fn deref_mut(&mut self) -> &mut LaunchConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Host application identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
}

/// Logging output configuration consumed by the logger crate.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    pub path: Option<PathBuf>,
    pub level: String,
    pub env_filter: Option<String>,
}

/// Credential tables for optional external service integrations.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    pub maps: MapsConfig,
    pub analytics: AnalyticsConfig,
}

/// Mapping SDK credential. Absent or empty means "not configured".
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    pub api_key: Option<String>,
    pub tile_style: Option<String>,
}

/// Analytics SDK credential. Absent or empty means "not configured".
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub write_key: Option<String>,
}

/// Coordinator behavior knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub on_failure: FailurePolicy,
}

/// What to do when an integration or registrar call fails during launch.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the launch sequence with an error (the platform default).
    #[default]
    Propagate,
    /// Log the failure at `warn` and continue fail-open.
    Log,
}

impl IntegrationsConfig {
    /// Looks up the credential for a named integration.
    ///
    /// Absent and present-but-empty values are both treated as
    /// "not configured" and yield `None`.
    #[must_use]
    pub fn credential(&self, name: &str) -> Option<&str> {
        let value = match name {
            MAPS => self.maps.api_key.as_deref(),
            ANALYTICS => self.analytics.write_key.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// Maps an integration name to the metadata key its credential is
    /// read from, for diagnostics.
    #[must_use]
    pub fn metadata_key(name: &str) -> Option<&'static str> {
        match name {
            MAPS => Some(MAPS_API_KEY),
            ANALYTICS => Some(ANALYTICS_WRITE_KEY),
            _ => None,
        }
    }
}

impl MapsConfig {
    /// The configured API key, with empty strings treated as absent.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

// --- Default ---

impl Default for AppConfig {
    fn default() -> Self {
        Self { name: "ignition-host".to_owned(), environment: "development".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, path: None, level: "info".to_owned(), env_filter: None }
    }
}
