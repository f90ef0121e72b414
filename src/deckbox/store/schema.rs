//! Persisted record formats and the validation pass applied on load.
//!
//! Slot contents are never trusted wholesale: the raw JSON is walked field by
//! field and anything that would break a store invariant is repaired or
//! dropped, with a warning per repair.

use crate::engine::{MAX_COPIES, MAX_DECK_SIZE};
use crate::error::{DeckboxError, Result};
use crate::model::{created_at_from_deck_id, normalize_deck_name, CollectionStatus, Deck};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

pub const DECKS_KEY: &str = "ptp_decks_v1";
pub const COLLECTION_KEY: &str = "ptp_collection_v1";
pub const SCHEMA_VERSION: u64 = 1;

#[derive(Serialize)]
struct DeckFile<'a> {
    version: u64,
    current: Option<&'a str>,
    decks: &'a BTreeMap<String, Deck>,
}

#[derive(Debug, Default)]
pub struct LoadedDecks {
    pub decks: BTreeMap<String, Deck>,
    pub current: Option<String>,
    pub repairs: usize,
}

pub fn encode_decks(decks: &BTreeMap<String, Deck>, current: Option<&str>) -> Result<String> {
    let file = DeckFile {
        version: SCHEMA_VERSION,
        current,
        decks,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parse and validate the deck slot.
///
/// Accepts the versioned format and the legacy bare `{ id: deck }` map.
/// Fails only when the blob is not a JSON object at all.
pub fn decode_decks(raw: &str) -> Result<LoadedDecks> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(top) = value else {
        return Err(DeckboxError::PersistenceRead {
            key: DECKS_KEY.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    };

    let mut loaded = LoadedDecks::default();

    let version = top.get("version").and_then(Value::as_u64);
    let records = match version {
        Some(version) => {
            if version > SCHEMA_VERSION {
                log::warn!(
                    "Deck data has schema version {}, newer than {}; reading what we can",
                    version,
                    SCHEMA_VERSION
                );
            }
            loaded.current = top
                .get("current")
                .and_then(Value::as_str)
                .map(str::to_string);
            match top.get("decks") {
                Some(Value::Object(decks)) => decks.clone(),
                _ => {
                    log::warn!("Deck data has no decks map; starting empty");
                    loaded.repairs += 1;
                    Map::new()
                }
            }
        }
        None => {
            log::info!("Migrating legacy deck data to schema version {}", SCHEMA_VERSION);
            top
        }
    };

    for (key, record) in records {
        match validate_deck(&key, &record, &mut loaded.repairs) {
            Some(deck) => {
                loaded.decks.insert(key, deck);
            }
            None => {
                log::warn!("Dropping malformed deck record {}", key);
                loaded.repairs += 1;
            }
        }
    }

    Ok(loaded)
}

fn validate_deck(key: &str, record: &Value, repairs: &mut usize) -> Option<Deck> {
    let obj = record.as_object()?;

    if obj.get("id").and_then(Value::as_str) != Some(key) {
        log::warn!("Deck record {} had a missing or mismatched id; re-keyed", key);
        *repairs += 1;
    }

    let name = match obj.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => normalize_deck_name(name),
        _ => {
            log::warn!("Deck {} has no usable name; using default", key);
            *repairs += 1;
            normalize_deck_name("")
        }
    };

    let created_at = obj
        .get("created_at")
        .and_then(|v| serde_json::from_value::<DateTime<Utc>>(v.clone()).ok())
        .or_else(|| created_at_from_deck_id(key))
        .unwrap_or_default();

    let mut cards = BTreeMap::new();
    if let Some(raw_cards) = obj.get("cards") {
        match raw_cards.as_object() {
            Some(raw_cards) => {
                for (card_id, count) in raw_cards {
                    match count.as_u64().filter(|&c| c > 0) {
                        Some(c) if c > u64::from(MAX_COPIES) => {
                            log::warn!(
                                "Deck {}: {} copies of {} clamped to {}",
                                key,
                                c,
                                card_id,
                                MAX_COPIES
                            );
                            *repairs += 1;
                            cards.insert(card_id.clone(), MAX_COPIES);
                        }
                        Some(c) => {
                            // c <= MAX_COPIES here, so it fits.
                            cards.insert(card_id.clone(), c as u32);
                        }
                        None => {
                            log::warn!("Deck {}: dropping invalid count for {}", key, card_id);
                            *repairs += 1;
                        }
                    }
                }
            }
            None => {
                log::warn!("Deck {}: cards is not a map; emptied", key);
                *repairs += 1;
            }
        }
    }

    while cards.values().sum::<u32>() > MAX_DECK_SIZE {
        if let Some((card_id, _)) = cards.pop_last() {
            log::warn!("Deck {} over {} cards; dropped {}", key, MAX_DECK_SIZE, card_id);
            *repairs += 1;
        }
    }

    Some(Deck {
        id: key.to_string(),
        name,
        cards,
        created_at,
    })
}

pub fn encode_collection(statuses: &BTreeMap<String, CollectionStatus>) -> Result<String> {
    Ok(serde_json::to_string_pretty(statuses)?)
}

/// Parse the collection-status slot, dropping unknown status strings.
/// `none` entries are dropped too: absence already means none.
pub fn decode_collection(raw: &str) -> Result<BTreeMap<String, CollectionStatus>> {
    let parsed: HashMap<String, Value> = serde_json::from_str(raw)?;
    let mut statuses = BTreeMap::new();

    for (card_id, value) in parsed {
        let status = value
            .as_str()
            .and_then(|s| s.parse::<CollectionStatus>().ok());
        match status {
            Some(CollectionStatus::None) => {}
            Some(status) => {
                statuses.insert(card_id, status);
            }
            None => log::warn!("Dropping unknown collection status for {}", card_id),
        }
    }

    Ok(statuses)
}
