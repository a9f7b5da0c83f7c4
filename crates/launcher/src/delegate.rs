//! The continuation seam at the end of the launch sequence.

use ign_domain::launch::LaunchOptions;

/// The default behavior the coordinator wraps: run local launch work, then
/// hand the lifecycle event to this capability and return its verdict.
///
/// Held by composition rather than inheritance so tests can substitute
/// stub delegates.
pub trait LaunchDelegate: Send + Sync {
    /// Continuation decision once local launch work has completed.
    /// `true` means the host should proceed with normal startup.
    fn did_finish_launching(&self, options: &LaunchOptions) -> bool;
}

/// Default continuation handler; always proceeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDelegate;

impl LaunchDelegate for DefaultDelegate {
    fn did_finish_launching(&self, _options: &LaunchOptions) -> bool {
        true
    }
}
