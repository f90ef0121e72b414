use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DECK_NAME: &str = "Untitled deck";
pub const UNKNOWN_RARITY: &str = "Unknown";
pub const DECK_ID_PREFIX: &str = "deck-";

/// A single card record from the static dataset.
///
/// Only `id` and `name` are required; everything else falls back to an empty
/// value so partial datasets still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub set: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hp: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtypes: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    /// Empty means the card is obtainable from any pack.
    #[serde(default, deserialize_with = "null_as_default")]
    pub booster_packs: Vec<String>,
    #[serde(default)]
    pub retreat_cost: Option<u32>,
}

/// Dataset exports write `null` for empty lists; read it as the empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Card {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            set: String::new(),
            rarity: None,
            types: Vec::new(),
            hp: 0,
            subtypes: Vec::new(),
            weaknesses: Vec::new(),
            booster_packs: Vec::new(),
            retreat_cost: None,
        }
    }

    pub fn rarity_label(&self) -> &str {
        match self.rarity.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => UNKNOWN_RARITY,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.booster_packs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    /// Card id to copy count. Counts are always >= 1; a card at zero is removed.
    #[serde(default)]
    pub cards: BTreeMap<String, u32>,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    pub fn new(id: impl Into<String>, name: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: normalize_deck_name(name),
            cards: BTreeMap::new(),
            created_at,
        }
    }

    pub fn total_cards(&self) -> u32 {
        self.cards.values().sum()
    }

    pub fn count_of(&self, card_id: &str) -> u32 {
        self.cards.get(card_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn normalize_deck_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_DECK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn deck_id_from_millis(millis: i64) -> String {
    format!("{}{}", DECK_ID_PREFIX, millis)
}

/// Recovers the creation time encoded in a `deck-<millis>` id.
pub fn millis_from_deck_id(id: &str) -> Option<i64> {
    id.strip_prefix(DECK_ID_PREFIX)?.parse().ok()
}

pub fn created_at_from_deck_id(id: &str) -> Option<DateTime<Utc>> {
    millis_from_deck_id(id).and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}

/// Per-card collection tracking state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    Owned,
    Wanted,
    #[default]
    None,
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CollectionStatus::Owned => "owned",
            CollectionStatus::Wanted => "wanted",
            CollectionStatus::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for CollectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owned" => Ok(CollectionStatus::Owned),
            "wanted" => Ok(CollectionStatus::Wanted),
            "none" => Ok(CollectionStatus::None),
            other => Err(format!("Unknown collection status: {}", other)),
        }
    }
}

/// Aggregate counts for a deck, recomputed on demand and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub total: u32,
    pub by_type: BTreeMap<String, u32>,
    pub by_rarity: BTreeMap<String, u32>,
}
