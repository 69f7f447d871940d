//! The [`Persistence`] trait defining the registry's storage hooks.
//!
//! A backend (file, database, ...) implements this trait to save and restore
//! a [`Registry`]. The registry itself never depends on a backend's behavior
//! beyond success or failure.

use crate::error::Result;
use crate::registry::Registry;

/// Storage backend for a whole registry.
pub trait Persistence {
    /// Write the registry's current content to durable storage.
    fn save(&self, registry: &Registry) -> Result<()>;

    /// Replace the registry's content with what is in durable storage.
    fn load(&self, registry: &mut Registry) -> Result<()>;
}

/// A backend that stores nothing and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPersistence;

impl Persistence for NullPersistence {
    fn save(&self, _registry: &Registry) -> Result<()> {
        Ok(())
    }

    fn load(&self, _registry: &mut Registry) -> Result<()> {
        Ok(())
    }
}
