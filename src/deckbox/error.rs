use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckboxError {
    #[error("Deck is at {limit} cards")]
    DeckFull { limit: u32 },

    #[error("Max {limit} copies of a card ({card_id})")]
    CopyLimit { card_id: String, limit: u32 },

    #[error("No active deck. Create or select a deck first")]
    NoActiveDeck,

    #[error("Deck not found: {0}")]
    DeckNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Could not load card data: {0}")]
    CatalogLoad(String),

    #[error("Failed to read {key}: {reason}")]
    PersistenceRead { key: String, reason: String },

    #[error("Failed to write {key}: {reason}")]
    PersistenceWrite { key: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DeckboxError {
    /// Composition-rule rejections: the caller is told, nothing changed.
    pub fn is_rule_rejection(&self) -> bool {
        matches!(
            self,
            DeckboxError::DeckFull { .. }
                | DeckboxError::CopyLimit { .. }
                | DeckboxError::NoActiveDeck
        )
    }
}

pub type Result<T> = std::result::Result<T, DeckboxError>;
