//! Adapters for the process-global third-party SDKs this host links.
//! Each adapter hides the global behind an injectable [`Integration`] so
//! the launch path stays testable.

use ign_launcher::{Integration, IntegrationError};
use ignition::domain::constants::{ANALYTICS, MAPS};

/// Mapping SDK adapter.
#[derive(Debug, Default)]
pub(crate) struct MapsSdk;

impl Integration for MapsSdk {
    fn name(&self) -> &'static str {
        MAPS
    }

    fn provide_api_key(&self, key: &str) -> Result<(), IntegrationError> {
        if key.chars().any(char::is_whitespace) {
            return Err(IntegrationError::new("maps api key contains whitespace"));
        }
        tracing::info!(key_len = key.len(), "Maps SDK keyed");
        Ok(())
    }
}

/// Analytics SDK adapter.
#[derive(Debug, Default)]
pub(crate) struct AnalyticsSdk;

impl Integration for AnalyticsSdk {
    fn name(&self) -> &'static str {
        ANALYTICS
    }

    fn provide_api_key(&self, key: &str) -> Result<(), IntegrationError> {
        if key.chars().any(char::is_whitespace) {
            return Err(IntegrationError::new("analytics write key contains whitespace"));
        }
        tracing::info!(key_len = key.len(), "Analytics SDK keyed");
        Ok(())
    }
}
