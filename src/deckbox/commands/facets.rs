use crate::catalog::Catalog;
use crate::commands::{CmdResult, Facets};
use crate::error::Result;

/// Distinct values for each browse filter.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let facets = Facets {
        sets: catalog.sets(),
        rarities: catalog.rarities(),
        types: catalog.types(),
        weaknesses: catalog.weaknesses(),
        booster_packs: catalog.booster_packs(),
    };
    Ok(CmdResult::default().with_facets(facets))
}
