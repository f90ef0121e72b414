use crate::catalog::Catalog;
use crate::commands::helpers::warn_if_unsaved;
use crate::commands::{CmdMessage, CmdResult};
use crate::engine::MAX_COPIES;
use crate::error::{DeckboxError, Result};
use crate::store::{DeckStore, StorageBackend};

/// Add one copy of each listed card to the current deck.
///
/// Cards are processed in order. A card that breaks a composition rule or is
/// missing from the catalog is reported and skipped, and the rest still go in.
pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut DeckStore<B>,
    catalog: &Catalog,
    card_ids: &[I],
) -> Result<CmdResult> {
    if store.current_deck().is_none() {
        return Err(DeckboxError::NoActiveDeck);
    }

    let mut result = CmdResult::default();
    for card_id in card_ids {
        let card_id = card_id.as_ref();
        let Some(card) = catalog.get(card_id) else {
            let err = DeckboxError::CardNotFound(card_id.to_string());
            result.add_message(CmdMessage::warning(err.to_string()));
            continue;
        };

        match store.add_card(card_id) {
            Ok(count) => result.add_message(CmdMessage::success(format!(
                "Added {} ({}/{})",
                card.name, count, MAX_COPIES
            ))),
            Err(e) if e.is_rule_rejection() => {
                log::debug!("Rejected {}: {}", card_id, e);
                result.add_message(CmdMessage::warning(e.to_string()));
            }
            Err(e) => return Err(e),
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
    use crate::engine::MAX_DECK_SIZE;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_catalog;

    fn levels(result: &CmdResult) -> Vec<MessageLevel> {
        result.messages.iter().map(|m| m.level.clone()).collect()
    }

    #[test]
    fn needs_an_active_deck() {
        let mut store = DeckStore::load(MemBackend::new());
        let err = run(&mut store, &sample_catalog(), &["A1-094"]).unwrap_err();
        assert!(matches!(err, DeckboxError::NoActiveDeck));
    }

    #[test]
    fn adds_and_reports_counts() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Lightning");

        let result = run(&mut store, &sample_catalog(), &["A1-094", "A1-094"]).unwrap();
        assert_eq!(levels(&result), vec![MessageLevel::Success; 2]);
        assert!(result.messages[1].content.contains("(2/4)"));
        assert_eq!(result.affected_decks[0].count_of("A1-094"), 2);
    }

    #[test]
    fn fifth_copy_is_warned_and_skipped() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Lightning");

        let ids = ["A1-094"; 5];
        let result = run(&mut store, &sample_catalog(), &ids).unwrap();
        assert_eq!(result.messages[4].level, MessageLevel::Warning);
        assert!(result.messages[4].content.contains("Max 4 copies"));
        assert_eq!(store.current_deck().unwrap().count_of("A1-094"), 4);
    }

    #[test]
    fn unknown_card_does_not_stop_the_batch() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Mixed");

        let result = run(&mut store, &sample_catalog(), &["nope", "A1-053"]).unwrap();
        assert_eq!(
            levels(&result),
            vec![MessageLevel::Warning, MessageLevel::Success]
        );
        assert_eq!(store.current_deck().unwrap().total_cards(), 1);
    }

    #[test]
    fn full_deck_rejects() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Full");
        let catalog = crate::catalog::Catalog::from_cards(
            (0..15)
                .map(|i| crate::model::Card::new(format!("X-{:03}", i), format!("Card {}", i)))
                .collect(),
        );
        let ids: Vec<String> = (0..15)
            .flat_map(|i| std::iter::repeat(format!("X-{:03}", i)).take(4))
            .collect();
        run(&mut store, &catalog, &ids).unwrap();
        assert_eq!(store.current_deck().unwrap().total_cards(), MAX_DECK_SIZE);

        let mut catalog_cards: Vec<_> = catalog.iter().cloned().collect();
        catalog_cards.extend(sample_catalog().iter().cloned());
        let result = run(
            &mut store,
            &crate::catalog::Catalog::from_cards(catalog_cards),
            &["A1-094"],
        )
        .unwrap();
        assert!(result.messages[0].content.contains("Deck is at 60 cards"));
        assert_eq!(store.current_deck().unwrap().total_cards(), MAX_DECK_SIZE);
    }
}
