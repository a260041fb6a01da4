use crate::models::SensorReading;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state: one optional latest-reading slot.
///
/// The slot is replaced whole under the write lock, so a reader never
/// observes a half-written reading.
#[derive(Clone)]
pub struct AppState {
    latest: Arc<RwLock<Option<SensorReading>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the stored reading, returning a clone of what is now latest.
    pub async fn store(&self, reading: SensorReading) -> SensorReading {
        let mut slot = self.latest.write().await;
        *slot = Some(reading.clone());
        reading
    }

    /// Clone out the stored reading, if any.
    pub async fn latest(&self) -> Option<SensorReading> {
        self.latest.read().await.clone()
    }

    pub async fn has_data(&self) -> bool {
        self.latest.read().await.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
