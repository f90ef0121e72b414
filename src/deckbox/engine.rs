//! # Deck Engine
//!
//! Composition rules and summaries over a single deck. Everything here is
//! pure: the functions take the deck (and catalog) they work on and never
//! touch storage. Persisting the result is the store's job.
//!
//! ## Composition Rules
//!
//! Two fixed limits, checked fresh on every mutation:
//!
//! 1. A deck holds at most [`MAX_DECK_SIZE`] cards in total.
//! 2. A deck holds at most [`MAX_COPIES`] copies of any one card.
//!
//! The size check runs first, so a full deck reports [`DeckboxError::DeckFull`]
//! even when the card is also at its copy limit. A rejected call leaves the
//! deck untouched.

use crate::catalog::Catalog;
use crate::error::{DeckboxError, Result};
use crate::model::{Card, Deck, DeckSummary};

pub const MAX_DECK_SIZE: u32 = 60;
pub const MAX_COPIES: u32 = 4;

/// Add one copy of `card_id`. Returns the new count.
pub fn add_card(deck: Option<&mut Deck>, card_id: &str) -> Result<u32> {
    let deck = deck.ok_or(DeckboxError::NoActiveDeck)?;

    if deck.total_cards() >= MAX_DECK_SIZE {
        return Err(DeckboxError::DeckFull {
            limit: MAX_DECK_SIZE,
        });
    }

    let current = deck.count_of(card_id);
    if current >= MAX_COPIES {
        return Err(DeckboxError::CopyLimit {
            card_id: card_id.to_string(),
            limit: MAX_COPIES,
        });
    }

    let next = current + 1;
    deck.cards.insert(card_id.to_string(), next);
    Ok(next)
}

/// Remove one copy of `card_id`.
///
/// Returns `Some(remaining)` when a copy was removed and `None` when the card
/// was not in the deck (the deck is left as is).
pub fn remove_card(deck: Option<&mut Deck>, card_id: &str) -> Result<Option<u32>> {
    let deck = deck.ok_or(DeckboxError::NoActiveDeck)?;

    let Some(current) = deck.cards.get(card_id).copied() else {
        return Ok(None);
    };

    let remaining = current.saturating_sub(1);
    if remaining == 0 {
        deck.cards.remove(card_id);
    } else {
        deck.cards.insert(card_id.to_string(), remaining);
    }
    Ok(Some(remaining))
}

/// Aggregate counts for `deck`. Card ids missing from the catalog are skipped.
pub fn compute_summary(deck: &Deck, catalog: &Catalog) -> DeckSummary {
    let mut summary = DeckSummary::default();

    for (card_id, &count) in &deck.cards {
        let Some(card) = catalog.get(card_id) else {
            continue;
        };
        summary.total += count;
        for card_type in &card.types {
            *summary.by_type.entry(card_type.clone()).or_insert(0) += count;
        }
        *summary
            .by_rarity
            .entry(card.rarity_label().to_string())
            .or_insert(0) += count;
    }

    summary
}

/// The deck's cards that resolve in the catalog, ordered by name then id.
pub fn deck_entries<'a>(deck: &Deck, catalog: &'a Catalog) -> Vec<(&'a Card, u32)> {
    let mut entries: Vec<(&Card, u32)> = deck
        .cards
        .iter()
        .filter_map(|(id, &count)| catalog.get(id).map(|card| (card, count)))
        .collect();
    entries.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    entries
}

/// Card ids in the deck that the catalog no longer knows about.
pub fn unknown_card_ids<'a>(deck: &'a Deck, catalog: &Catalog) -> Vec<&'a str> {
    deck.cards
        .keys()
        .filter(|id| !catalog.contains(id))
        .map(String::as_str)
        .collect()
}
