//! Facade crate for Ignition extensions and shared modules.
//! Re-exports domain/kernel primitives and aggregates extension initialization.
//! Keep this crate thin: it should compose other crates, not implement launch logic.
//!
//! ## Usage
//! - Call [`init`] during launch to initialize every enabled extension; the
//!   host passes it to the launcher as the extension registrar.

pub use ign_domain as domain;
pub use ign_kernel as kernel;

use ign_domain::config::LaunchConfig;
use ign_domain::registry::InitializedExtension;

/// Extension registry for runtime introspection.
pub mod extensions {
    pub use ign_geomap as geomap;

    /// Extensions compiled into this build.
    pub const ENABLED: &[&str] = &["geomap"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled extensions.
///
/// # Errors
/// Returns an error if any extension initialization fails.
pub fn init(
    config: &LaunchConfig,
) -> Result<Vec<InitializedExtension>, Box<dyn std::error::Error + Send + Sync>> {
    let mut slices = Vec::new();

    // Geomap
    slices.push(ign_geomap::init(config)?);

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_lists_every_extension() {
        assert!(extensions::is_enabled("geomap"));
        assert!(!extensions::is_enabled("telemetry"));
    }

    #[test]
    fn init_produces_one_slice_per_extension() {
        let slices = init(&LaunchConfig::default()).expect("init should succeed");
        assert_eq!(slices.len(), extensions::ENABLED.len());
    }
}
