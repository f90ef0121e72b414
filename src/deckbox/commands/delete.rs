use crate::commands::helpers::{resolve_deck, warn_if_unsaved, DeckSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckboxError, Result};
use crate::store::{DeckStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut DeckStore<B>,
    selector: &DeckSelector,
) -> Result<CmdResult> {
    let id = resolve_deck(store, selector)?.id.clone();
    let removed = store
        .delete_deck(&id)
        .ok_or_else(|| DeckboxError::DeckNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deck deleted: {}",
        removed.name
    )));
    match store.current_deck() {
        Some(current) => {
            result.add_message(CmdMessage::info(format!("Current deck: {}", current.name)))
        }
        None => result.add_message(CmdMessage::info("No decks left.")),
    }
    warn_if_unsaved(&mut result, store.is_persisted());
    Ok(result.with_affected_decks(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn deletes_by_position() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Fire");
        store.create_deck("Water");

        let result = run(&mut store, &DeckSelector::Index(2)).unwrap();
        assert_eq!(result.affected_decks[0].name, "Water");
        assert_eq!(store.len(), 1);
        assert_eq!(store.current_deck().unwrap().name, "Fire");
    }

    #[test]
    fn deleting_last_deck_clears_selection() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Solo");

        let result = run(&mut store, &DeckSelector::IdOrName("solo".into())).unwrap();
        assert!(store.current_id().is_none());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("No decks left")));
    }

    #[test]
    fn unknown_deck_is_an_error() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Fire");
        assert!(matches!(
            run(&mut store, &DeckSelector::IdOrName("deck-1".into())),
            Err(DeckboxError::DeckNotFound(_))
        ));
        assert_eq!(store.len(), 1);
    }
}
