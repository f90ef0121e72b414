use crate::commands::helpers::{resolve_deck, warn_if_unsaved, DeckSelector};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DeckStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut DeckStore<B>,
    selector: &DeckSelector,
) -> Result<CmdResult> {
    let id = resolve_deck(store, selector)?.id.clone();
    let deck = store.select_deck(&id)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Current deck: {} ({}/{})",
        deck.name,
        deck.total_cards(),
        crate::engine::MAX_DECK_SIZE
    )));
    warn_if_unsaved(&mut result, store.is_persisted());
    Ok(result.with_affected_decks(vec![deck]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeckboxError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn selects_by_name_and_persists() {
        let backend = MemBackend::new();
        let mut store = DeckStore::load(backend.clone());
        store.create_deck("Fire");
        store.create_deck("Water");

        run(&mut store, &DeckSelector::IdOrName("Fire".into())).unwrap();
        assert_eq!(store.current_deck().unwrap().name, "Fire");

        let reloaded = DeckStore::load(backend);
        assert_eq!(reloaded.current_deck().unwrap().name, "Fire");
    }

    #[test]
    fn unknown_selection_keeps_current() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Fire");
        let before = store.current_id().map(str::to_string);

        assert!(matches!(
            run(&mut store, &DeckSelector::Index(3)),
            Err(DeckboxError::DeckNotFound(_))
        ));
        assert_eq!(store.current_id().map(str::to_string), before);
    }
}
