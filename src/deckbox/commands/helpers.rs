use crate::catalog::Catalog;
use crate::commands::{CardListing, CmdMessage, CmdResult, DeckListing};
use crate::error::{DeckboxError, Result};
use crate::model::{Card, Deck};
use crate::store::{DeckStore, OwnershipStore, StorageBackend};

/// How a user names a deck on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSelector {
    /// 1-based position in the deck list.
    Index(usize),
    /// Exact id, falling back to a case-insensitive name match.
    IdOrName(String),
}

impl DeckSelector {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(n) => DeckSelector::Index(n),
            Err(_) => DeckSelector::IdOrName(input.to_string()),
        }
    }
}

pub fn deck_listings<B: StorageBackend>(store: &DeckStore<B>) -> Vec<DeckListing> {
    let current = store.current_id();
    store
        .decks()
        .into_iter()
        .enumerate()
        .map(|(i, deck)| DeckListing {
            index: i + 1,
            is_current: current == Some(deck.id.as_str()),
            deck: deck.clone(),
        })
        .collect()
}

pub fn resolve_deck<'a, B: StorageBackend>(
    store: &'a DeckStore<B>,
    selector: &DeckSelector,
) -> Result<&'a Deck> {
    let decks = store.decks();
    match selector {
        DeckSelector::Index(n) => n
            .checked_sub(1)
            .and_then(|i| decks.get(i).copied())
            .ok_or_else(|| DeckboxError::DeckNotFound(format!("#{}", n))),
        DeckSelector::IdOrName(term) => {
            if let Some(deck) = store.get(term) {
                return Ok(deck);
            }
            let needle = term.to_lowercase();
            let matches: Vec<&Deck> = decks
                .into_iter()
                .filter(|d| d.name.to_lowercase() == needle)
                .collect();
            match matches.as_slice() {
                [deck] => Ok(*deck),
                [] => Err(DeckboxError::DeckNotFound(term.clone())),
                _ => Err(DeckboxError::Api(format!(
                    "{} decks are named \"{}\"; use the deck number instead",
                    matches.len(),
                    term
                ))),
            }
        }
    }
}

pub fn card_listing<B: StorageBackend>(
    card: &Card,
    decks: &DeckStore<B>,
    ownership: &OwnershipStore<B>,
) -> CardListing {
    CardListing {
        card: card.clone(),
        status: ownership.status(&card.id),
        in_deck: decks
            .current_deck()
            .map(|d| d.count_of(&card.id))
            .unwrap_or(0),
    }
}

pub fn card_listings<'a, B: StorageBackend>(
    cards: impl Iterator<Item = &'a Card>,
    decks: &DeckStore<B>,
    ownership: &OwnershipStore<B>,
) -> Vec<CardListing> {
    cards.map(|c| card_listing(c, decks, ownership)).collect()
}

pub fn require_card<'a>(catalog: &'a Catalog, card_id: &str) -> Result<&'a Card> {
    catalog
        .get(card_id)
        .ok_or_else(|| DeckboxError::CardNotFound(card_id.to_string()))
}

/// Append a warning when the last write did not make it to disk.
pub fn warn_if_unsaved(result: &mut CmdResult, persisted: bool) {
    if !persisted {
        result.add_message(CmdMessage::warning(
            "Changes could not be saved and will be lost when deckbox exits.",
        ));
    }
}
