//! Caller-owned helper cache keyed by connection descriptor.
//!
//! A registry replaces the usual hidden global singleton: construct one,
//! pass it where helpers are needed, and every caller asking for the same
//! descriptor gets the same shared instance. Insert-if-absent is the only
//! mutation; there is no eviction, entries live as long as the registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::HelperError;
use crate::helper::SqlHelper;

/// Shared handle to a cached helper instance.
pub type SharedHelper = Arc<Mutex<SqlHelper>>;

#[derive(Default)]
pub struct HelperRegistry {
    instances: Mutex<HashMap<String, SharedHelper>>,
}

impl HelperRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the helper for a descriptor, connecting on first use. Two calls
    /// with the same descriptor string return the identical `Arc`.
    ///
    /// The map lock is held across the connect so concurrent first callers
    /// cannot race a double insert.
    ///
    /// # Errors
    ///
    /// Returns the descriptor-parse or connection error from
    /// [`SqlHelper::connect`]; nothing is cached on failure.
    pub async fn get(&self, descriptor: &str) -> Result<SharedHelper, HelperError> {
        let mut instances = self.instances.lock().await;
        if let Some(existing) = instances.get(descriptor) {
            return Ok(existing.clone());
        }
        let helper = SqlHelper::connect(descriptor).await?;
        let shared = Arc::new(Mutex::new(helper));
        instances.insert(descriptor.to_string(), shared.clone());
        Ok(shared)
    }

    /// Number of cached instances.
    pub async fn len(&self) -> usize {
        self.instances.lock().await.len()
    }

    /// True when no instance has been cached yet.
    pub async fn is_empty(&self) -> bool {
        self.instances.lock().await.is_empty()
    }
}
