use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, DeckboxPaths};
use crate::config::DeckboxConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &DeckboxPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = DeckboxConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = DeckboxConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DeckboxConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let catalog_path = (key == "catalog_path").then(|| config.resolved_catalog_path(dir));
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            if let Some(path) = catalog_path {
                result.add_message(check_catalog(&path));
            }
            Ok(result)
        }
    }
}

/// The new path is kept even when it does not load yet; the user may be about
/// to put the file there.
fn check_catalog(path: &Path) -> CmdMessage {
    match Catalog::load(path) {
        Ok(catalog) => CmdMessage::info(format!(
            "{} cards available from {}",
            catalog.len(),
            path.display()
        )),
        Err(e) => CmdMessage::warning(format!("{}. Card features stay off until it loads.", e)),
    }
}
