//! Launch-time state shared with extension modules.

mod state;

pub use state::{LaunchState, LaunchStateBuilder, LaunchStateError};
