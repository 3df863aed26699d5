use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::ActivityRegistry;

/// Process-wide handle to the activity registry.
///
/// Cloning is cheap and every clone shares the same registry. Reads take the
/// shared lock; a membership change holds the exclusive lock across its
/// check-then-mutate step.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityRegistry>>,
}

impl ActivityStore {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ActivityRegistry> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ActivityRegistry> {
        self.inner.write().await
    }
}
