use crate::catalog::Catalog;
use crate::commands::helpers::{require_card, warn_if_unsaved};
use crate::commands::{CardListing, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CollectionStatus;
use crate::store::{OwnershipStore, StorageBackend};

pub fn run<B: StorageBackend>(
    ownership: &mut OwnershipStore<B>,
    catalog: &Catalog,
    card_id: &str,
    status: CollectionStatus,
) -> Result<CmdResult> {
    let card = require_card(catalog, card_id)?;
    let previous = ownership.set_status(card_id, status);

    let mut result = CmdResult::default();
    if previous == status {
        result.add_message(CmdMessage::info(format!(
            "{} is already marked {}",
            card.name, status
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{}: {} -> {}",
            card.name, previous, status
        )));
    }
    warn_if_unsaved(&mut result, ownership.is_persisted());

    let counts = ownership.counts();
    result.add_message(CmdMessage::info(format!(
        "Collection: {} owned, {} wanted",
        counts.owned, counts.wanted
    )));

    let listing = CardListing {
        card: card.clone(),
        status,
        in_deck: 0,
    };
    Ok(result.with_listed_cards(vec![listing]))
}
