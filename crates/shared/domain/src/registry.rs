//! Registry primitives for externally-defined extension modules.
//! This provides a minimal type-erased container for initialized extension state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for extension state that can be shared across threads.
pub trait ExtensionSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized extension module.
#[derive(Debug)]
pub struct InitializedExtension {
    pub id: TypeId,
    pub state: Box<dyn ExtensionSlice>,
}

impl InitializedExtension {
    /// Create a new initialized extension from a concrete state.
    pub fn new<T: ExtensionSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}
