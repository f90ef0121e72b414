use crate::catalog::Catalog;
use crate::commands::helpers::warn_if_unsaved;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckboxError, Result};
use crate::store::{DeckStore, StorageBackend};

/// Remove one copy of each listed card from the current deck.
///
/// The catalog is only used for display names, so cards that have vanished
/// from the dataset can still be taken out.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut DeckStore<B>,
    catalog: Option<&Catalog>,
    card_ids: &[I],
) -> Result<CmdResult> {
    if store.current_deck().is_none() {
        return Err(DeckboxError::NoActiveDeck);
    }

    let mut result = CmdResult::default();
    for card_id in card_ids {
        let card_id = card_id.as_ref();
        let label = catalog
            .and_then(|c| c.get(card_id))
            .map(|card| card.name.clone())
            .unwrap_or_else(|| card_id.to_string());

        match store.remove_card(card_id)? {
            Some(0) => {
                result.add_message(CmdMessage::success(format!("Removed {} from deck", label)))
            }
            Some(remaining) => result.add_message(CmdMessage::success(format!(
                "Removed {} ({} left)",
                label, remaining
            ))),
            None => result.add_message(CmdMessage::info(format!("{} is not in the deck", label))),
        }
    }

    warn_if_unsaved(&mut result, store.is_persisted());
    let affected = store.current_deck().cloned().into_iter().collect();
    Ok(result.with_affected_decks(affected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_catalog;

    #[test]
    fn needs_an_active_deck() {
        let mut store = DeckStore::load(MemBackend::new());
        assert!(matches!(
            run(&mut store, None, &["A1-094"]),
            Err(DeckboxError::NoActiveDeck)
        ));
    }

    #[test]
    fn removes_one_copy_at_a_time() {
        let catalog = sample_catalog();
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Lightning");
        store.add_card("A1-094").unwrap();
        store.add_card("A1-094").unwrap();

        let result = run(&mut store, Some(&catalog), &["A1-094"]).unwrap();
        assert_eq!(result.messages[0].content, "Removed Pikachu (1 left)");

        let result = run(&mut store, Some(&catalog), &["A1-094"]).unwrap();
        assert_eq!(result.messages[0].content, "Removed Pikachu from deck");
        assert!(store.current_deck().unwrap().cards.is_empty());
    }

    #[test]
    fn absent_card_is_informational() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Empty");

        let result = run(&mut store, None, &["A1-094"]).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "A1-094 is not in the deck");
    }

    #[test]
    fn stale_ids_can_be_removed_without_catalog() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Old");
        store.add_card("gone-001").unwrap();

        run(&mut store, None, &["gone-001"]).unwrap();
        assert!(store.current_deck().unwrap().cards.is_empty());
    }
}
