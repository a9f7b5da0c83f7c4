use crate::integration::IntegrationError;
use ign_kernel::launch::LaunchStateError;

/// Boxed error type returned by extension registrars.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the launch sequence.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// An external integration refused its credential.
    #[error("integration '{integration}' failed to initialize: {source}")]
    Integration { integration: &'static str, source: IntegrationError },

    /// The extension registrar reported a failure.
    #[error("extension registration failed: {source}")]
    Registration { source: BoxError },

    /// The launch state snapshot could not be assembled.
    #[error(transparent)]
    State(#[from] LaunchStateError),

    /// Invalid launcher configuration.
    #[error("launcher validation error: {message}")]
    Validation { message: String },
}
