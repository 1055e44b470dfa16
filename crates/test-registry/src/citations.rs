use std::collections::HashMap;
use std::sync::Mutex;

use vitrine_core::error::DataAccessError;
use vitrine_core::model::{CitationRecord, CitationStore, EntityStore};

/// In-memory citation store for test scenarios.
#[derive(Default)]
pub struct InMemoryCitationStore {
    records: Mutex<HashMap<i32, CitationRecord>>,
}

impl InMemoryCitationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<i32, CitationRecord>>, DataAccessError> {
        self.records
            .lock()
            .map_err(|poisoned| DataAccessError::OperationFailed {
                message: poisoned.to_string(),
            })
    }
}

impl EntityStore<CitationRecord, i32> for InMemoryCitationStore {
    fn find(&self, id: i32) -> Result<Option<CitationRecord>, DataAccessError> {
        Ok(self.locked()?.get(&id).cloned())
    }

    fn save(&self, entity: CitationRecord) -> Result<(), DataAccessError> {
        self.locked()?.insert(entity.id, entity);
        Ok(())
    }

    fn delete(&self, id: i32) -> Result<(), DataAccessError> {
        self.locked()?.remove(&id);
        Ok(())
    }
}

impl CitationStore for InMemoryCitationStore {
    fn unique_by_item(&self, item_id: i32) -> Result<Option<CitationRecord>, DataAccessError> {
        Ok(self
            .locked()?
            .values()
            .find(|record| record.item_id == item_id)
            .cloned())
    }
}
