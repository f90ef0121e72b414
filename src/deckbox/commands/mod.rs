use crate::config::DeckboxConfig;
use crate::model::{Card, CollectionStatus, Deck, DeckSummary};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod create;
pub mod delete;
pub mod facets;
pub mod helpers;
pub mod list;
pub mod mark;
pub mod remove;
pub mod search;
pub mod select;
pub mod show;

#[derive(Debug, Clone)]
pub struct DeckboxPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A deck as shown in the deck list. `index` is the 1-based position.
#[derive(Debug, Clone)]
pub struct DeckListing {
    pub index: usize,
    pub deck: Deck,
    pub is_current: bool,
}

#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub card: Card,
    pub count: u32,
}

/// Everything needed to draw one deck: summary, resolved cards, stale ids.
#[derive(Debug, Clone)]
pub struct DeckView {
    pub deck: Deck,
    pub is_current: bool,
    pub summary: DeckSummary,
    pub entries: Vec<DeckEntry>,
    pub unknown_cards: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CardListing {
    pub card: Card,
    pub status: CollectionStatus,
    /// Copies in the current deck, 0 when there is none.
    pub in_deck: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Facets {
    pub sets: Vec<String>,
    pub rarities: Vec<String>,
    pub types: Vec<String>,
    pub weaknesses: Vec<String>,
    pub booster_packs: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_decks: Vec<Deck>,
    pub listed_decks: Vec<DeckListing>,
    pub deck_view: Option<DeckView>,
    pub listed_cards: Vec<CardListing>,
    pub facets: Option<Facets>,
    pub config: Option<DeckboxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_decks(mut self, decks: Vec<Deck>) -> Self {
        self.affected_decks = decks;
        self
    }

    pub fn with_listed_decks(mut self, decks: Vec<DeckListing>) -> Self {
        self.listed_decks = decks;
        self
    }

    pub fn with_deck_view(mut self, view: DeckView) -> Self {
        self.deck_view = Some(view);
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<CardListing>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: DeckboxConfig) -> Self {
        self.config = Some(config);
        self
    }
}
