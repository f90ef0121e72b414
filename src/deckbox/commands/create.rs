use crate::commands::helpers::warn_if_unsaved;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckboxError, Result};
use crate::store::{DeckStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut DeckStore<B>, name: &str) -> Result<CmdResult> {
    let id = store.create_deck(name);
    let deck = store
        .get(&id)
        .cloned()
        .ok_or_else(|| DeckboxError::DeckNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deck created and selected: {}",
        deck.name
    )));
    warn_if_unsaved(&mut result, store.is_persisted());
    Ok(result.with_affected_decks(vec![deck]))
}
