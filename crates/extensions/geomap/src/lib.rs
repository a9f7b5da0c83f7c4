//! Map support extension slice: resolves the tile style and records whether
//! the mapping SDK has a usable credential.

mod error;

pub use crate::error::GeomapError;

use ign_domain::config::LaunchConfig;
use ign_domain::registry::{ExtensionSlice, InitializedExtension};
use std::any::Any;

const DEFAULT_TILE_STYLE: &str = "standard";

/// Geomap extension state.
#[derive(Debug)]
pub struct Geomap {
    tile_style: String,
    keyed: bool,
}

impl Geomap {
    /// The resolved tile style.
    #[must_use]
    pub fn tile_style(&self) -> &str {
        &self.tile_style
    }

    /// Whether a maps credential was configured at launch.
    #[must_use]
    pub const fn keyed(&self) -> bool {
        self.keyed
    }
}

impl ExtensionSlice for Geomap {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the geomap extension against the launch configuration.
///
/// # Errors
/// Returns an error if a configured tile style is blank.
pub fn init(config: &LaunchConfig) -> Result<InitializedExtension, GeomapError> {
    let maps = &config.integrations.maps;

    let tile_style = match maps.tile_style.as_deref() {
        Some(style) if style.trim().is_empty() => {
            return Err(GeomapError::Config("tile_style must not be blank".to_owned()));
        },
        Some(style) => style.to_owned(),
        None => DEFAULT_TILE_STYLE.to_owned(),
    };

    let keyed = maps.api_key().is_some();
    tracing::info!(tile_style = %tile_style, keyed, "Geomap extension initialized");

    Ok(InitializedExtension::new(Geomap { tile_style, keyed }))
}
