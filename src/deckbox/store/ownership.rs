use super::backend::StorageBackend;
use super::schema::{self, COLLECTION_KEY};
use crate::model::CollectionStatus;
use std::collections::BTreeMap;

/// Per-card collection tracking (owned / wanted).
///
/// Same persistence contract as the deck store: read once, rewritten
/// wholesale on every change, failures logged and absorbed.
pub struct OwnershipStore<B: StorageBackend> {
    backend: B,
    statuses: BTreeMap<String, CollectionStatus>,
    persisted: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OwnershipCounts {
    pub owned: usize,
    pub wanted: usize,
}

impl<B: StorageBackend> OwnershipStore<B> {
    pub fn load(backend: B) -> Self {
        let statuses = match backend.read(COLLECTION_KEY) {
            Ok(Some(raw)) => schema::decode_collection(&raw).unwrap_or_else(|e| {
                log::error!("Failed to load collection, starting empty: {}", e);
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::error!("Failed to load collection, starting empty: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            backend,
            statuses,
            persisted: true,
        }
    }

    pub fn status(&self, card_id: &str) -> CollectionStatus {
        self.statuses.get(card_id).copied().unwrap_or_default()
    }

    /// Returns the previous status.
    pub fn set_status(&mut self, card_id: &str, status: CollectionStatus) -> CollectionStatus {
        let previous = match status {
            CollectionStatus::None => self.statuses.remove(card_id),
            status => self.statuses.insert(card_id.to_string(), status),
        }
        .unwrap_or_default();

        self.persist();
        previous
    }

    pub fn counts(&self) -> OwnershipCounts {
        let mut counts = OwnershipCounts::default();
        for status in self.statuses.values() {
            match status {
                CollectionStatus::Owned => counts.owned += 1,
                CollectionStatus::Wanted => counts.wanted += 1,
                CollectionStatus::None => {}
            }
        }
        counts
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn persist(&mut self) {
        let result = schema::encode_collection(&self.statuses)
            .and_then(|raw| self.backend.write(COLLECTION_KEY, &raw));

        match result {
            Ok(()) => self.persisted = true,
            Err(e) => {
                log::warn!("Failed to save collection, keeping changes in memory: {}", e);
                self.persisted = false;
            }
        }
    }
}
