use crate::commands::helpers::deck_listings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DeckStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &DeckStore<B>) -> Result<CmdResult> {
    let listed = deck_listings(store);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(
            "No decks yet. Create one with `deckbox new <name>`.",
        ));
    }
    Ok(result.with_listed_decks(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn empty_store_hints_at_create() {
        let store = DeckStore::load(MemBackend::new());
        let result = run(&store).unwrap();
        assert!(result.listed_decks.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn lists_in_creation_order() {
        let mut store = DeckStore::load(MemBackend::new());
        store.create_deck("First");
        store.create_deck("Second");

        let result = run(&store).unwrap();
        let names: Vec<_> = result
            .listed_decks
            .iter()
            .map(|l| l.deck.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(result.listed_decks[1].is_current);
        assert!(result.messages.is_empty());
    }
}
