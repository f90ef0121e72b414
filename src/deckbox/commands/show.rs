use crate::catalog::Catalog;
use crate::commands::helpers::{resolve_deck, DeckSelector};
use crate::commands::{CmdMessage, CmdResult, DeckEntry, DeckView};
use crate::engine;
use crate::error::{DeckboxError, Result};
use crate::store::{DeckStore, StorageBackend};

/// Build the full view of one deck: summary, resolved cards and any ids the
/// catalog no longer knows. Without a selector the current deck is shown.
pub fn run<B: StorageBackend>(
    store: &DeckStore<B>,
    catalog: &Catalog,
    selector: Option<&DeckSelector>,
) -> Result<CmdResult> {
    let deck = match selector {
        Some(selector) => resolve_deck(store, selector)?,
        None => store.current_deck().ok_or(DeckboxError::NoActiveDeck)?,
    };

    let summary = engine::compute_summary(deck, catalog);
    let entries = engine::deck_entries(deck, catalog)
        .into_iter()
        .map(|(card, count)| DeckEntry {
            card: card.clone(),
            count,
        })
        .collect();
    let unknown_cards: Vec<String> = engine::unknown_card_ids(deck, catalog)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut result = CmdResult::default();
    if !unknown_cards.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} card(s) in this deck are not in the catalog: {}",
            unknown_cards.len(),
            unknown_cards.join(", ")
        )));
    }

    let view = DeckView {
        deck: deck.clone(),
        is_current: store.current_id() == Some(deck.id.as_str()),
        summary,
        entries,
        unknown_cards,
    };
    Ok(result.with_deck_view(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_catalog;

    #[test]
    fn no_current_deck_is_an_error() {
        let store = DeckStore::load(MemBackend::new());
        assert!(matches!(
            run(&store, &sample_catalog(), None),
            Err(DeckboxError::NoActiveDeck)
        ));
    }

    #[test]
    fn summarizes_current_deck() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Mixed");
        store.add_card("A1-094").unwrap();
        store.add_card("A1-094").unwrap();
        store.add_card("A1-036").unwrap();

        let result = run(&store, &sample_catalog(), None).unwrap();
        let view = result.deck_view.unwrap();

        assert!(view.is_current);
        assert_eq!(view.summary.total, 3);
        assert_eq!(view.summary.by_type.get("Lightning"), Some(&2));
        assert_eq!(view.summary.by_type.get("Fire"), Some(&1));
        assert_eq!(view.summary.by_rarity.get("◊"), Some(&2));
        let names: Vec<_> = view.entries.iter().map(|e| e.card.name.as_str()).collect();
        assert_eq!(names, vec!["Charizard ex", "Pikachu"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn shows_other_deck_and_flags_unknown_cards() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("Old");
        store.add_card("gone-001").unwrap();
        store.add_card("A1-053").unwrap();
        store.create_deck("New");

        let result = run(&store, &sample_catalog(), Some(&DeckSelector::Index(1))).unwrap();
        let view = result.deck_view.unwrap();

        assert_eq!(view.deck.name, "Old");
        assert!(!view.is_current);
        assert_eq!(view.summary.total, 1);
        assert_eq!(view.unknown_cards, vec!["gone-001".to_string()]);
        assert_eq!(result.messages.len(), 1);
    }
}
