// In memory implementation of the DataStore port.
//
// Purpose
// - Let the server boot locally and in tests without a database.
//
// Responsibilities
// - Own a readiness signal and fire it when `connect` is called.

use crate::shared::infrastructure::data_store::{DataStore, ReadinessSignal};

#[derive(Default)]
pub struct InMemoryDataStore {
    readiness: ReadinessSignal,
}

impl InMemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the store. Only the first call announces readiness.
    pub fn connect(&self) {
        if self.readiness.fire() {
            tracing::info!("data store connected");
        }
    }
}

impl DataStore for InMemoryDataStore {
    fn readiness(&self) -> ReadinessSignal {
        self.readiness.clone()
    }
}
