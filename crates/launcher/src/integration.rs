//! The seam between the coordinator and process-global external SDKs.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// An external service integration that accepts a credential exactly once
/// per process lifetime.
///
/// Implementations adapt process-global SDK state behind an injectable
/// object so that tests can substitute fakes.
pub trait Integration: Send + Sync {
    /// Integration name used for credential lookup and diagnostics.
    fn name(&self) -> &'static str;

    /// Hands the configured credential to the underlying SDK.
    ///
    /// # Errors
    /// Returns an error if the SDK rejects the credential. The coordinator
    /// never retries; the configured failure policy decides what happens next.
    fn provide_api_key(&self, key: &str) -> Result<(), IntegrationError>;
}

/// Opaque error surfaced by an [`Integration`] implementation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct IntegrationError {
    message: String,
}

impl IntegrationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// An integration wrapped in a process-lifetime once-guard.
///
/// The guard is claimed *before* the SDK call, so even a failing call is
/// never repeated: at-most-once semantics hold unconditionally.
pub(crate) struct GuardedIntegration {
    inner: Arc<dyn Integration>,
    claimed: OnceLock<()>,
}

impl GuardedIntegration {
    pub(crate) fn new(inner: Arc<dyn Integration>) -> Self {
        Self { inner, claimed: OnceLock::new() }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Invokes the SDK at most once.
    ///
    /// Returns `Ok(true)` when the SDK was invoked, `Ok(false)` when the
    /// guard was already claimed by a previous launch.
    pub(crate) fn provide_once(&self, key: &str) -> Result<bool, IntegrationError> {
        if self.claimed.set(()).is_err() {
            return Ok(false);
        }
        self.inner.provide_api_key(key)?;
        Ok(true)
    }
}

impl fmt::Debug for GuardedIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedIntegration")
            .field("name", &self.inner.name())
            .field("claimed", &self.claimed.get().is_some())
            .finish()
    }
}
