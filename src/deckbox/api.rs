//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every deckbox operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: deck store, ownership store, catalog, config
//! - **Normalizes inputs** (deck selector strings into [`DeckSelector`])
//! - **Gates card-dependent operations** on a loaded catalog
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules; those live in
//! `commands/*.rs` and `engine.rs`.
//!
//! ## Catalog Availability
//!
//! The catalog is loaded before the facade is built. A failed load is kept as
//! its reason so deck management still works; anything that needs card data
//! (adding cards, summaries, search, browse, marking) returns
//! [`DeckboxError::CatalogLoad`] with that reason.
//!
//! ## Generic Over StorageBackend
//!
//! `DeckboxApi<B: StorageBackend>` runs on any backend:
//! - Production: `DeckboxApi<FsBackend>`
//! - Testing: `DeckboxApi<MemBackend>`

use crate::catalog::{CardFilter, Catalog};
use crate::commands;
use crate::commands::helpers::{resolve_deck, DeckSelector};
use crate::config::DeckboxConfig;
use crate::error::{DeckboxError, Result};
use crate::model::{CollectionStatus, Deck};
use crate::store::{DeckStore, OwnershipStore, StorageBackend};

pub struct DeckboxApi<B: StorageBackend> {
    decks: DeckStore<B>,
    ownership: OwnershipStore<B>,
    catalog: std::result::Result<Catalog, String>,
    config: DeckboxConfig,
    paths: commands::DeckboxPaths,
}

impl<B: StorageBackend + Clone> DeckboxApi<B> {
    pub fn new(
        backend: B,
        catalog: Result<Catalog>,
        config: DeckboxConfig,
        paths: commands::DeckboxPaths,
    ) -> Self {
        let catalog = catalog.map_err(|e| {
            log::warn!("Card data unavailable, deck management only: {}", e);
            match e {
                DeckboxError::CatalogLoad(reason) => reason,
                other => other.to_string(),
            }
        });

        Self {
            decks: DeckStore::load(backend.clone()),
            ownership: OwnershipStore::load(backend),
            catalog,
            config,
            paths,
        }
    }
}

impl<B: StorageBackend> DeckboxApi<B> {
    pub fn create_deck(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.decks, name)
    }

    pub fn list_decks(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.decks)
    }

    pub fn select_deck(&mut self, selector: &str) -> Result<commands::CmdResult> {
        commands::select::run(&mut self.decks, &DeckSelector::parse(selector))
    }

    pub fn delete_deck(&mut self, selector: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.decks, &DeckSelector::parse(selector))
    }

    /// Resolve a selector without acting on it (used for confirmation prompts).
    pub fn find_deck(&self, selector: &str) -> Result<&Deck> {
        resolve_deck(&self.decks, &DeckSelector::parse(selector))
    }

    pub fn add_cards<I: AsRef<str>>(&mut self, card_ids: &[I]) -> Result<commands::CmdResult> {
        let catalog = loaded(&self.catalog)?;
        commands::add::run(&mut self.decks, catalog, card_ids)
    }

    pub fn remove_cards<I: AsRef<str>>(&mut self, card_ids: &[I]) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.decks, self.catalog.as_ref().ok(), card_ids)
    }

    pub fn show_deck(&self, selector: Option<&str>) -> Result<commands::CmdResult> {
        let catalog = loaded(&self.catalog)?;
        let selector = selector.map(DeckSelector::parse);
        commands::show::run(&self.decks, catalog, selector.as_ref())
    }

    pub fn search_cards(&self, term: &str) -> Result<commands::CmdResult> {
        let catalog = loaded(&self.catalog)?;
        let (default_limit, max_limit) = self.config.search_limits();
        commands::search::run(
            &self.decks,
            &self.ownership,
            catalog,
            term,
            default_limit,
            max_limit,
        )
    }

    pub fn browse_cards(&self, filter: &CardFilter) -> Result<commands::CmdResult> {
        let catalog = loaded(&self.catalog)?;
        commands::search::browse(&self.decks, &self.ownership, catalog, filter)
    }

    pub fn mark_card(
        &mut self,
        card_id: &str,
        status: CollectionStatus,
    ) -> Result<commands::CmdResult> {
        let catalog = loaded(&self.catalog)?;
        commands::mark::run(&mut self.ownership, catalog, card_id, status)
    }

    pub fn facets(&self) -> Result<commands::CmdResult> {
        commands::facets::run(loaded(&self.catalog)?)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

fn loaded(catalog: &std::result::Result<Catalog, String>) -> Result<&Catalog> {
    catalog
        .as_ref()
        .map_err(|reason| DeckboxError::CatalogLoad(reason.clone()))
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CardListing, CmdMessage, CmdResult, DeckListing, DeckView, DeckboxPaths, Facets,
    MessageLevel,
};
