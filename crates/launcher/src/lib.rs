//! # Launcher
//!
//! The bootstrap coordinator: a single linear launch sequence executed once
//! per process lifetime.
//!
//! For each attached [`Integration`], the coordinator looks up a credential
//! in the launch configuration and, when configured, hands it to the SDK
//! through a process-lifetime once-guard. It then registers extension
//! modules through the [`ExtensionRegistrar`] seam, folds them into a
//! [`LaunchState`] snapshot, and defers the continuation decision to the
//! configured [`LaunchDelegate`], returning its boolean verdict unchanged.
//!
//! ## Example
//! ```no_run
//! use ign_domain::launch::LaunchOptions;
//! use ign_launcher::Launcher;
//!
//! fn main() -> Result<(), ign_launcher::LaunchError> {
//!     let launcher = Launcher::builder().build()?;
//!     let proceed = launcher.on_launch(&LaunchOptions::new())?;
//!     assert!(proceed);
//!     Ok(())
//! }
//! ```

mod delegate;
mod error;
mod integration;

pub use crate::delegate::{DefaultDelegate, LaunchDelegate};
pub use crate::error::{BoxError, LaunchError};
pub use crate::integration::{Integration, IntegrationError};

use crate::integration::GuardedIntegration;
use ign_domain::config::{FailurePolicy, IntegrationsConfig, LaunchConfig};
use ign_domain::integrations::IntegrationSet;
use ign_domain::launch::LaunchOptions;
use ign_domain::registry::InitializedExtension;
use ign_kernel::launch::LaunchState;
use ign_kernel::launch_id;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Produces the extension modules to register during launch.
///
/// Invoked exactly once per launch, synchronously, after any integration
/// initialization and before delegation.
pub trait ExtensionRegistrar: Send + Sync {
    /// Initializes every extension against the effective configuration.
    ///
    /// # Errors
    /// Returns a boxed error if any extension fails to initialize; the
    /// configured failure policy decides whether that aborts the launch.
    fn register(&self, config: &LaunchConfig) -> Result<Vec<InitializedExtension>, BoxError>;
}

impl<F> ExtensionRegistrar for F
where
    F: Fn(&LaunchConfig) -> Result<Vec<InitializedExtension>, BoxError> + Send + Sync,
{
    fn register(&self, config: &LaunchConfig) -> Result<Vec<InitializedExtension>, BoxError> {
        self(config)
    }
}

/// A fluent builder for configuring and initializing the [`Launcher`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Default)]
pub struct LauncherBuilder {
    cfg: LaunchConfig,
    integrations: Vec<Arc<dyn Integration>>,
    registrar: Option<Box<dyn ExtensionRegistrar>>,
    delegate: Option<Box<dyn LaunchDelegate>>,
    on_failure: Option<FailurePolicy>,
}

impl LauncherBuilder {
    /// Sets the launch configuration.
    pub fn config(mut self, cfg: LaunchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Attaches an external service integration. May be called repeatedly;
    /// each integration is initialized at most once per process.
    pub fn integration<I: Integration + 'static>(mut self, integration: I) -> Self {
        self.integrations.push(Arc::new(integration));
        self
    }

    /// Sets the extension registrar. Closures of the matching shape
    /// (e.g. `ignition::init`) are accepted directly.
    pub fn registrar<R: ExtensionRegistrar + 'static>(mut self, registrar: R) -> Self {
        self.registrar = Some(Box::new(registrar));
        self
    }

    /// Substitutes the continuation handler. Defaults to [`DefaultDelegate`].
    pub fn delegate<D: LaunchDelegate + 'static>(mut self, delegate: D) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    /// Overrides the failure policy from configuration.
    pub const fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = Some(policy);
        self
    }

    /// Consumes the builder and initializes the launcher.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g. empty
    /// application name).
    pub fn build(self) -> Result<Launcher, LaunchError> {
        if self.cfg.app.name.trim().is_empty() {
            return Err(LaunchError::Validation {
                message: "app.name must not be empty".to_owned(),
            });
        }

        let on_failure = self.on_failure.unwrap_or(self.cfg.launcher.on_failure);

        Ok(Launcher {
            launch_id: launch_id!(),
            integrations: self.integrations.into_iter().map(GuardedIntegration::new).collect(),
            registrar: self.registrar,
            delegate: self.delegate.unwrap_or_else(|| Box::new(DefaultDelegate)),
            on_failure,
            state: OnceLock::new(),
            cfg: self.cfg,
        })
    }
}

/// A fully configured bootstrap coordinator.
#[must_use = "call .on_launch(&options) to run the launch sequence"]
pub struct Launcher {
    cfg: LaunchConfig,
    launch_id: String,
    integrations: Vec<GuardedIntegration>,
    registrar: Option<Box<dyn ExtensionRegistrar>>,
    delegate: Box<dyn LaunchDelegate>,
    on_failure: FailurePolicy,
    state: OnceLock<LaunchState>,
}

impl Launcher {
    /// Returns a new [`LauncherBuilder`].
    pub fn builder() -> LauncherBuilder {
        LauncherBuilder::default()
    }

    /// Runs the launch sequence for the given lifecycle event.
    ///
    /// Steps, in order:
    /// 1. Initialize each configured integration (skipping absent or empty
    ///    credentials) through its once-guard.
    /// 2. Register extension modules and retain the [`LaunchState`] snapshot.
    /// 3. Forward the event to the delegate and return its verdict.
    ///
    /// The options are borrowed for the duration of the call and never
    /// retained. Calling again is safe but unexpected: integrations stay
    /// initialized and the registration step is skipped once a snapshot
    /// has been retained.
    ///
    /// # Errors
    /// Under [`FailurePolicy::Propagate`], an integration or registrar
    /// failure aborts the sequence. Under [`FailurePolicy::Log`] failures
    /// are logged and the sequence continues.
    pub fn on_launch(&self, options: &LaunchOptions) -> Result<bool, LaunchError> {
        info!(
            launch_id = %self.launch_id,
            options = options.len(),
            "Launch sequence starting"
        );

        let integrations = self.init_integrations()?;

        if self.state.get().is_none() {
            let extensions = self.register_extensions()?;
            let state = LaunchState::builder()
                .config(self.cfg.clone())
                .integrations(integrations)
                .register_extensions(extensions)
                .build()?;
            let _ = self.state.set(state);
        } else {
            debug!("Launch state already retained, skipping extension registration");
        }

        let proceed = self.delegate.did_finish_launching(options);
        info!(launch_id = %self.launch_id, proceed, "Launch sequence complete");

        Ok(proceed)
    }

    fn init_integrations(&self) -> Result<IntegrationSet, LaunchError> {
        let mut active = IntegrationSet::empty();

        for integration in &self.integrations {
            let name = integration.name();
            let Some(key) = self.cfg.integrations.credential(name) else {
                debug!(
                    integration = name,
                    metadata_key = IntegrationsConfig::metadata_key(name),
                    "No credential configured, skipping"
                );
                continue;
            };

            match integration.provide_once(key) {
                Ok(true) => {
                    active |= IntegrationSet::from(name);
                    info!(integration = name, "Integration initialized");
                },
                Ok(false) => {
                    active |= IntegrationSet::from(name);
                    debug!(integration = name, "Integration already initialized");
                },
                Err(source) => match self.on_failure {
                    FailurePolicy::Propagate => {
                        return Err(LaunchError::Integration { integration: name, source });
                    },
                    FailurePolicy::Log => {
                        warn!(integration = name, error = %source, "Integration failed, continuing");
                    },
                },
            }
        }

        Ok(active)
    }

    fn register_extensions(&self) -> Result<Vec<InitializedExtension>, LaunchError> {
        let Some(registrar) = &self.registrar else {
            debug!("No extension registrar attached");
            return Ok(Vec::new());
        };

        match registrar.register(&self.cfg) {
            Ok(extensions) => {
                info!(count = extensions.len(), "Extensions registered");
                Ok(extensions)
            },
            Err(source) => match self.on_failure {
                FailurePolicy::Propagate => Err(LaunchError::Registration { source }),
                FailurePolicy::Log => {
                    warn!(error = %source, "Extension registration failed, continuing");
                    Ok(Vec::new())
                },
            },
        }
    }

    /// The launch state snapshot, available once [`Launcher::on_launch`]
    /// has completed the registration step.
    #[must_use]
    pub fn state(&self) -> Option<&LaunchState> {
        self.state.get()
    }

    /// Unique identifier tagging this launch session in logs.
    #[must_use]
    pub fn launch_id(&self) -> &str {
        &self.launch_id
    }

    /// The effective launch configuration.
    #[must_use]
    pub const fn config(&self) -> &LaunchConfig {
        &self.cfg
    }
}

impl fmt::Debug for Launcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Launcher")
            .field("launch_id", &self.launch_id)
            .field("integrations", &self.integrations)
            .field("on_failure", &self.on_failure)
            .field("launched", &self.state.get().is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for LauncherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LauncherBuilder")
            .field("integrations", &self.integrations.len())
            .field("has_registrar", &self.registrar.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .field("on_failure", &self.on_failure)
            .finish_non_exhaustive()
    }
}
