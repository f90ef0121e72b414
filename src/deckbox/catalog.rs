//! # Card Catalog
//!
//! The catalog is the read-only card dataset for a session. It is loaded once
//! from a JSON array and never mutated afterwards.
//!
//! Lookups go through an id index built at load time, so summary and listing
//! code never scans the card list to resolve an id.
//!
//! Browsing is plain predicate filtering: a [`CardFilter`] combines optional
//! criteria and every criterion that is set must match.

use crate::error::{DeckboxError, Result};
use crate::model::Card;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

pub const DEFAULT_HP_MIN: u32 = 0;
pub const DEFAULT_HP_MAX: u32 = 9999;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from card records. Duplicate ids keep the first record.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut kept = Vec::with_capacity(cards.len());
        let mut by_id = HashMap::with_capacity(cards.len());

        for card in cards {
            if by_id.contains_key(&card.id) {
                log::warn!("Duplicate card id {} in catalog, keeping first", card.id);
                continue;
            }
            by_id.insert(card.id.clone(), kept.len());
            kept.push(card);
        }

        Self {
            cards: kept,
            by_id,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| DeckboxError::CatalogLoad(e.to_string()))?;
        Ok(Self::from_cards(cards))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| DeckboxError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&content)?;
        log::info!("Loaded {} cards from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.by_id.get(id).map(|&i| &self.cards[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn filter<'a>(&'a self, filter: &'a CardFilter) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |card| filter.matches(card))
    }

    /// Deck-builder search. A blank term lists the first `default_limit` cards;
    /// otherwise returns up to `max_limit` cards whose name contains the term.
    pub fn search_names(&self, term: &str, default_limit: usize, max_limit: usize) -> Vec<&Card> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.cards.iter().take(default_limit).collect();
        }
        self.cards
            .iter()
            .filter(|card| card.name.to_lowercase().contains(&term))
            .take(max_limit)
            .collect()
    }

    pub fn sets(&self) -> Vec<String> {
        distinct(self.cards.iter().map(|c| c.set.as_str()))
    }

    pub fn rarities(&self) -> Vec<String> {
        distinct(self.cards.iter().filter_map(|c| c.rarity.as_deref()))
    }

    pub fn types(&self) -> Vec<String> {
        distinct(self.cards.iter().flat_map(|c| c.types.iter().map(String::as_str)))
    }

    pub fn weaknesses(&self) -> Vec<String> {
        distinct(
            self.cards
                .iter()
                .flat_map(|c| c.weaknesses.iter().map(String::as_str)),
        )
    }

    pub fn booster_packs(&self) -> Vec<String> {
        distinct(
            self.cards
                .iter()
                .flat_map(|c| c.booster_packs.iter().map(String::as_str)),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Booster-pack criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PackFilter {
    #[default]
    Ignore,
    /// Only cards with no pack restriction.
    Unrestricted,
    /// Cards whose pack set includes this name.
    Pack(String),
}

impl PackFilter {
    /// `any` selects unrestricted cards; anything else is a pack name.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => PackFilter::Ignore,
            Some(v) if v.eq_ignore_ascii_case("any") => PackFilter::Unrestricted,
            Some(v) => PackFilter::Pack(v.to_string()),
        }
    }

    fn matches(&self, card: &Card) -> bool {
        match self {
            PackFilter::Ignore => true,
            PackFilter::Unrestricted => card.is_unrestricted(),
            PackFilter::Pack(name) => card.booster_packs.iter().any(|p| p == name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFilter {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    pub set: Option<String>,
    pub rarity: Option<String>,
    pub card_type: Option<String>,
    pub weakness: Option<String>,
    /// Inclusive HP range.
    pub hp_min: u32,
    pub hp_max: u32,
    pub pack: PackFilter,
}

impl Default for CardFilter {
    fn default() -> Self {
        Self {
            name: None,
            set: None,
            rarity: None,
            card_type: None,
            weakness: None,
            hp_min: DEFAULT_HP_MIN,
            hp_max: DEFAULT_HP_MAX,
            pack: PackFilter::Ignore,
        }
    }
}

impl CardFilter {
    pub fn matches(&self, card: &Card) -> bool {
        if let Some(name) = non_blank(&self.name) {
            if !card.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(set) = non_blank(&self.set) {
            if card.set != set {
                return false;
            }
        }
        if let Some(rarity) = non_blank(&self.rarity) {
            if card.rarity.as_deref() != Some(rarity) {
                return false;
            }
        }
        if let Some(card_type) = non_blank(&self.card_type) {
            if !card.types.iter().any(|t| t == card_type) {
                return false;
            }
        }
        if let Some(weakness) = non_blank(&self.weakness) {
            if !card.weaknesses.iter().any(|w| w == weakness) {
                return false;
            }
        }
        if card.hp < self.hp_min || card.hp > self.hp_max {
            return false;
        }
        self.pack.matches(card)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
