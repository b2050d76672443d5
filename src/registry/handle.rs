//! Process-wide slot holding the currently published registry.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::registry::RegistryError;
use crate::registry::{DescriptorSource, Registry};

/// Publishes one `Registry` at a time and swaps it atomically on reload.
///
/// Readers take an `Arc<Registry>` snapshot and keep using it for the rest of their
/// dispatch, so a concurrent reload never shows them a mix of old and new commands.
/// The lock only guards the pointer; it is never held while a registry is built.
pub struct RegistryHandle {
    current: RwLock<Arc<Registry>>,
}

impl RegistryHandle {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Returns the registry that is published right now.
    pub fn snapshot(&self) -> Arc<Registry> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    /// Rebuilds from `source` and publishes the result.
    ///
    /// # Returns
    /// - `Ok(Arc<Registry>)` - The newly published registry
    /// - `Err(RegistryError)` - Build failed; the previous registry stays published
    pub fn reload(&self, source: &dyn DescriptorSource) -> Result<Arc<Registry>, RegistryError> {
        let registry = match Registry::from_source(source) {
            Ok(registry) => Arc::new(registry),
            Err(e) => {
                tracing::error!("Command registry reload failed, keeping current: {}", e);
                return Err(e);
            }
        };

        self.publish(Arc::clone(&registry));
        tracing::info!("Reloaded command registry with {} commands", registry.len());

        Ok(registry)
    }

    /// Replaces the published registry.
    pub fn publish(&self, registry: Arc<Registry>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = registry;
    }
}
