use super::backend::StorageBackend;
use super::schema::{self, LoadedDecks, DECKS_KEY};
use crate::engine;
use crate::error::{DeckboxError, Result};
use crate::model::{created_at_from_deck_id, deck_id_from_millis, Deck};
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

/// Owner of the deck collection and the current selection.
///
/// The whole collection is read once in [`DeckStore::load`] and written back
/// as one unit after every mutation. Storage trouble never reaches the caller:
/// a bad read starts an empty collection, a failed write is logged and the
/// in-memory state carries on (see [`DeckStore::is_persisted`]).
pub struct DeckStore<B: StorageBackend> {
    backend: B,
    decks: BTreeMap<String, Deck>,
    current: Option<String>,
    last_issued_millis: i64,
    persisted: bool,
}

impl<B: StorageBackend> DeckStore<B> {
    pub fn load(backend: B) -> Self {
        let loaded = match backend.read(DECKS_KEY) {
            Ok(Some(raw)) => schema::decode_decks(&raw).unwrap_or_else(|e| {
                log::error!("Failed to load decks, starting empty: {}", e);
                LoadedDecks::default()
            }),
            Ok(None) => LoadedDecks::default(),
            Err(e) => {
                log::error!("Failed to load decks, starting empty: {}", e);
                LoadedDecks::default()
            }
        };

        if loaded.repairs > 0 {
            log::warn!("Repaired {} problem(s) in saved decks", loaded.repairs);
        }

        // Only ids that encode a representable time seed the counter.
        let last_issued_millis = loaded
            .decks
            .keys()
            .filter_map(|id| created_at_from_deck_id(id))
            .map(|t| t.timestamp_millis())
            .max()
            .unwrap_or(0);

        let mut store = Self {
            backend,
            decks: loaded.decks,
            current: None,
            last_issued_millis,
            persisted: true,
        };

        store.current = match loaded.current {
            Some(id) if store.decks.contains_key(&id) => Some(id),
            _ => store.first_in_order(),
        };

        log::debug!(
            "Loaded {} deck(s) from {}, current: {:?}",
            store.decks.len(),
            store.backend.location(DECKS_KEY).display(),
            store.current
        );
        store
    }

    /// Create an empty deck, make it current and persist. Never fails.
    pub fn create_deck(&mut self, name: &str) -> String {
        let (id, created_at) = self.next_deck_id();
        let deck = Deck::new(id.clone(), name, created_at);
        log::info!("Created deck '{}' ({})", deck.name, id);

        self.decks.insert(id.clone(), deck);
        self.current = Some(id.clone());
        self.persist();
        id
    }

    /// Delete a deck. Unknown ids are a no-op and return `None`.
    ///
    /// Deleting the current deck moves the selection to the earliest-created
    /// remaining deck, or clears it when none remain.
    pub fn delete_deck(&mut self, deck_id: &str) -> Option<Deck> {
        let removed = self.decks.remove(deck_id)?;

        if self.current.as_deref() == Some(deck_id) {
            self.current = self.first_in_order();
        }
        log::info!("Deleted deck '{}' ({})", removed.name, deck_id);

        self.persist();
        Some(removed)
    }

    pub fn select_deck(&mut self, deck_id: &str) -> Result<&Deck> {
        if !self.decks.contains_key(deck_id) {
            return Err(DeckboxError::DeckNotFound(deck_id.to_string()));
        }
        self.current = Some(deck_id.to_string());
        self.persist();
        self.decks
            .get(deck_id)
            .ok_or_else(|| DeckboxError::DeckNotFound(deck_id.to_string()))
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The selected deck, or `None` if nothing is selected or the id is stale.
    pub fn current_deck(&self) -> Option<&Deck> {
        self.current.as_deref().and_then(|id| self.decks.get(id))
    }

    pub fn get(&self, deck_id: &str) -> Option<&Deck> {
        self.decks.get(deck_id)
    }

    /// All decks, oldest first.
    pub fn decks(&self) -> Vec<&Deck> {
        let mut decks: Vec<&Deck> = self.decks.values().collect();
        decks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Add one copy of a card to the current deck.
    pub fn add_card(&mut self, card_id: &str) -> Result<u32> {
        let count = engine::add_card(self.current_deck_mut(), card_id)?;
        self.persist();
        Ok(count)
    }

    /// Remove one copy of a card from the current deck.
    /// Persists only when something was actually removed.
    pub fn remove_card(&mut self, card_id: &str) -> Result<Option<u32>> {
        let remaining = engine::remove_card(self.current_deck_mut(), card_id)?;
        if remaining.is_some() {
            self.persist();
        }
        Ok(remaining)
    }

    /// Whether the last write reached the backend.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn current_deck_mut(&mut self) -> Option<&mut Deck> {
        match self.current.as_deref() {
            Some(id) => self.decks.get_mut(id),
            None => None,
        }
    }

    fn first_in_order(&self) -> Option<String> {
        self.decks().first().map(|d| d.id.clone())
    }

    /// `deck-<millis>`, bumped past anything already issued or present.
    fn next_deck_id(&mut self) -> (String, chrono::DateTime<Utc>) {
        let now = Utc::now();
        let mut millis = now
            .timestamp_millis()
            .max(self.last_issued_millis.saturating_add(1));
        while self.decks.contains_key(&deck_id_from_millis(millis)) {
            millis = millis.saturating_add(1);
        }
        self.last_issued_millis = millis;

        let created_at = Utc.timestamp_millis_opt(millis).single().unwrap_or(now);
        (deck_id_from_millis(millis), created_at)
    }

    fn persist(&mut self) {
        let result = schema::encode_decks(&self.decks, self.current.as_deref())
            .and_then(|raw| self.backend.write(DECKS_KEY, &raw));

        match result {
            Ok(()) => self.persisted = true,
            Err(e) => {
                log::warn!("Failed to save decks, keeping changes in memory: {}", e);
                self.persisted = false;
            }
        }
    }
}
