//! # Storage Layer
//!
//! All user state lives in a durable key-value slot with two fixed keys:
//!
//! - [`schema::DECKS_KEY`]: the deck collection plus the current selection
//! - [`schema::COLLECTION_KEY`]: owned/wanted status per card id
//!
//! Each value is one JSON document, read once when its store is built and
//! rewritten wholesale on every change (last writer wins).
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how". Moves opaque strings under keys.
//!   - [`fs_backend::FsBackend`]: production, one `<key>.json` per key with
//!     atomic tmp-then-rename writes.
//!   - [`mem_backend::MemBackend`]: tests, with read/write error simulation.
//! - [`schema`]: the "what". Versioned formats, legacy migration and the
//!   field-by-field validation applied on load.
//! - [`deck_store::DeckStore`] / [`ownership::OwnershipStore`]: own the
//!   in-memory state and decide when to persist.
//!
//! ## Failure Policy
//!
//! Storage is never fatal. Missing or malformed data loads as empty; a failed
//! write is logged and the session continues from memory.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── ptp_decks_v1.json        # {"version": 1, "current": ..., "decks": {...}}
//! ├── ptp_collection_v1.json   # {"<card id>": "owned" | "wanted"}
//! ├── config.json              # DeckboxConfig
//! └── cards.json               # default catalog location
//! ```

pub mod backend;
pub mod deck_store;
pub mod fs_backend;
pub mod mem_backend;
pub mod ownership;
pub mod schema;

pub use backend::StorageBackend;
pub use deck_store::DeckStore;
pub use ownership::{OwnershipCounts, OwnershipStore};
