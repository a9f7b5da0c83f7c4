use fxhash::FxHashMap;
use ign_domain::config::LaunchConfig;
use ign_domain::integrations::IntegrationSet;
use ign_domain::registry::{ExtensionSlice, InitializedExtension};
use std::any::TypeId;
use std::ops::Deref;
use std::sync::Arc;

/// Errors raised while assembling or querying the launch state.
#[derive(Debug, thiserror::Error)]
pub enum LaunchStateError {
    #[error("state validation error: {0}")]
    Validation(String),
    #[error("state missing extension slice: {0}")]
    MissingExtension(&'static str),
}

#[derive(Debug)]
pub struct LaunchStateInner {
    pub config: LaunchConfig,
    integrations: IntegrationSet,
    extensions: FxHashMap<TypeId, InitializedExtension>,
}

/// Immutable snapshot of the completed launch: the effective configuration
/// plus every registered extension, indexed by concrete state type.
#[derive(Debug, Clone)]
pub struct LaunchState {
    inner: Arc<LaunchStateInner>,
}

impl LaunchState {
    #[must_use]
    pub fn builder() -> LaunchStateBuilder {
        LaunchStateBuilder::default()
    }

    #[must_use]
    pub fn get_extension<T: ExtensionSlice>(&self) -> Option<&T> {
        self.inner
            .extensions
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the extension state if it is registered.
    ///
    /// # Errors
    /// Returns an error if the extension is not registered.
    pub fn try_get_extension<T: ExtensionSlice>(&self) -> Result<&T, LaunchStateError> {
        self.get_extension::<T>()
            .ok_or_else(|| LaunchStateError::MissingExtension(std::any::type_name::<T>()))
    }

    /// Iterates over registered extension type IDs (for diagnostics).
    pub fn extension_ids(&self) -> impl Iterator<Item = &TypeId> {
        self.inner.extensions.keys()
    }

    /// The set of integrations that were initialized at launch.
    #[must_use]
    pub fn integrations(&self) -> IntegrationSet {
        self.inner.integrations
    }

    /// Number of registered extensions.
    #[must_use]
    pub fn extension_count(&self) -> usize {
        self.inner.extensions.len()
    }
}

impl Deref for LaunchState {
    type Target = LaunchStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug)]
pub struct LaunchStateBuilder {
    config: Option<LaunchConfig>,
    integrations: IntegrationSet,
    extensions: FxHashMap<TypeId, InitializedExtension>,
}

impl Default for LaunchStateBuilder {
    fn default() -> Self {
        Self {
            config: None,
            integrations: IntegrationSet::empty(),
            extensions: FxHashMap::default(),
        }
    }
}

impl LaunchStateBuilder {
    #[must_use]
    pub fn config(mut self, config: LaunchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Records the set of integrations initialized at launch.
    #[must_use]
    pub fn integrations(mut self, integrations: IntegrationSet) -> Self {
        self.integrations = integrations;
        self
    }

    #[must_use]
    pub fn register_extension(mut self, extension: InitializedExtension) -> Self {
        self.extensions.insert(extension.id, extension);
        self
    }

    /// Registers multiple extensions at once.
    #[must_use]
    pub fn register_extensions<I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = InitializedExtension>,
    {
        for extension in extensions {
            self.extensions.insert(extension.id, extension);
        }
        self
    }

    /// Finalizes the snapshot.
    ///
    /// # Errors
    /// Returns an error if no configuration was provided.
    pub fn build(self) -> Result<LaunchState, LaunchStateError> {
        let config = self
            .config
            .ok_or_else(|| LaunchStateError::Validation("LaunchConfig not provided".to_owned()))?;

        Ok(LaunchState {
            inner: Arc::new(LaunchStateInner {
                config,
                integrations: self.integrations,
                extensions: self.extensions,
            }),
        })
    }
}
