//! # Deckbox Architecture
//!
//! Deckbox is a **UI-agnostic card collection and deck-building library**. The
//! `deckbox` binary is one client of it; nothing below the CLI knows about a
//! terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns stores, catalog and config for a session            │
//! │  - Parses deck selectors, gates on catalog availability     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Deck Engine (engine.rs)    │
//! │  - Composition rules, summaries, listings                   │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DeckStore / OwnershipStore over a StorageBackend         │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The card [`catalog`] sits beside the stack: it is loaded once, read-only,
//! and passed by reference to whatever needs card data.
//!
//! ## Deck Rules
//!
//! A deck holds at most 60 cards and at most 4 copies of any card. Every
//! mutation goes through [`engine`], which checks both limits before touching
//! the deck. See the engine module docs for ordering details.
//!
//! ## Testing Strategy
//!
//! 1. **Engine, catalog, store, commands**: unit tests next to the code, using
//!    [`store::mem_backend::MemBackend`] so nothing touches disk.
//! 2. **API** (`api.rs`): dispatch and catalog gating.
//! 3. **Binary** (`tests/`): filesystem backend and end-to-end CLI runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user operation
//! - [`engine`]: Composition rules and deck summaries
//! - [`catalog`]: Card dataset, lookup and filtering
//! - [`store`]: Persistence of decks and collection status
//! - [`model`]: Core data types (`Card`, `Deck`, `CollectionStatus`)
//! - [`config`]: User settings
//! - [`init`]: Resolves directories and builds a ready-to-use API
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
