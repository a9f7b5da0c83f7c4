//! String identifiers shared across crates.

/// Integration name for the mapping SDK.
pub const MAPS: &str = "maps";
/// Integration name for the analytics SDK.
pub const ANALYTICS: &str = "analytics";

/// Metadata key the maps credential is read from.
pub const MAPS_API_KEY: &str = "integrations.maps.api_key";
/// Metadata key the analytics credential is read from.
pub const ANALYTICS_WRITE_KEY: &str = "integrations.analytics.write_key";
