use crate::catalog::{CardFilter, Catalog};
use crate::commands::helpers::card_listings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DeckStore, OwnershipStore, StorageBackend};

/// Deck-builder search by name.
pub fn run<B: StorageBackend>(
    decks: &DeckStore<B>,
    ownership: &OwnershipStore<B>,
    catalog: &Catalog,
    term: &str,
    default_limit: usize,
    max_limit: usize,
) -> Result<CmdResult> {
    let found = catalog.search_names(term, default_limit, max_limit);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No cards match \"{}\"", term.trim())));
    }
    let listed = card_listings(found.into_iter(), decks, ownership);
    Ok(result.with_listed_cards(listed))
}

/// Catalog browsing with the full filter set.
pub fn browse<B: StorageBackend>(
    decks: &DeckStore<B>,
    ownership: &OwnershipStore<B>,
    catalog: &Catalog,
    filter: &CardFilter,
) -> Result<CmdResult> {
    let listed = card_listings(catalog.filter(filter), decks, ownership);
    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No cards match the current filters."));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} of {} cards",
            listed.len(),
            catalog.len()
        )));
    }
    Ok(result.with_listed_cards(listed))
}
