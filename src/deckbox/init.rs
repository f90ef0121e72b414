use crate::api::{DeckboxApi, DeckboxPaths};
use crate::catalog::Catalog;
use crate::config::DeckboxConfig;
use crate::error::{DeckboxError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "DECKBOX_HOME";
pub const CATALOG_ENV: &str = "DECKBOX_CATALOG";

pub struct DeckboxContext {
    pub api: DeckboxApi<FsBackend>,
    pub config: DeckboxConfig,
    pub catalog_path: PathBuf,
}

/// `DECKBOX_HOME` wins; otherwise the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "deckbox", "deckbox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckboxError::Config("Could not determine data directory".into()))
}

/// Catalog location by precedence: explicit flag, `DECKBOX_CATALOG`, config.
pub fn catalog_path(
    data_dir: &Path,
    config: &DeckboxConfig,
    flag: Option<&Path>,
    env_value: Option<PathBuf>,
) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or(env_value)
        .unwrap_or_else(|| config.resolved_catalog_path(data_dir))
}

pub fn initialize(catalog_flag: Option<&Path>) -> Result<DeckboxContext> {
    let data_dir = data_dir()?;
    initialize_in(&data_dir, catalog_flag)
}

pub fn initialize_in(data_dir: &Path, catalog_flag: Option<&Path>) -> Result<DeckboxContext> {
    let config = DeckboxConfig::load(data_dir).unwrap_or_else(|e| {
        log::error!("Ignoring unreadable config, using defaults: {}", e);
        DeckboxConfig::default()
    });

    let env_catalog = std::env::var_os(CATALOG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let catalog_path = catalog_path(data_dir, &config, catalog_flag, env_catalog);
    log::debug!(
        "Data dir {}, catalog {}",
        data_dir.display(),
        catalog_path.display()
    );

    let catalog = Catalog::load(&catalog_path);
    let paths = DeckboxPaths {
        data_dir: data_dir.to_path_buf(),
    };
    let api = DeckboxApi::new(FsBackend::new(data_dir), catalog, config.clone(), paths);

    Ok(DeckboxContext {
        api,
        config,
        catalog_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn catalog_flag_beats_env_and_config() {
        let data = Path::new("/data");
        let config = DeckboxConfig::default();

        let path = catalog_path(
            data,
            &config,
            Some(Path::new("/flag.json")),
            Some(PathBuf::from("/env.json")),
        );
        assert_eq!(path, PathBuf::from("/flag.json"));

        let path = catalog_path(data, &config, None, Some(PathBuf::from("/env.json")));
        assert_eq!(path, PathBuf::from("/env.json"));

        let path = catalog_path(data, &config, None, None);
        assert_eq!(path, data.join("cards.json"));
    }

    #[test]
    fn initialize_with_catalog_file() {
        let temp = TempDir::new().unwrap();
        let cards = temp.path().join("set.json");
        fs::write(&cards, r#"[{"id": "A1-001", "name": "Bulbasaur", "types": ["Grass"]}]"#)
            .unwrap();

        let mut ctx = initialize_in(temp.path(), Some(&cards)).unwrap();
        assert_eq!(ctx.catalog_path, cards);

        ctx.api.create_deck("Grass").unwrap();
        ctx.api.add_cards(&["A1-001"]).unwrap();
        assert!(temp.path().join("ptp_decks_v1.json").exists());
    }

    #[test]
    fn initialize_survives_missing_catalog() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");

        let mut ctx = initialize_in(temp.path(), Some(&missing)).unwrap();
        ctx.api.create_deck("Still works").unwrap();
        assert!(matches!(
            ctx.api.show_deck(None),
            Err(DeckboxError::CatalogLoad(_))
        ));
    }
}
