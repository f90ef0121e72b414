use deckbox::model::CollectionStatus;
use deckbox::store::backend::StorageBackend;
use deckbox::store::fs_backend::FsBackend;
use deckbox::store::schema::{COLLECTION_KEY, DECKS_KEY};
use deckbox::store::{DeckStore, OwnershipStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read("slot").unwrap(), None);

    backend.write("slot", "{\"a\": 1}").unwrap();
    assert_eq!(backend.read("slot").unwrap().as_deref(), Some("{\"a\": 1}"));

    // Other keys stay independent
    assert_eq!(backend.read("other").unwrap(), None);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write("slot", "first").unwrap();
    backend.write("slot", "second").unwrap();

    let expected = dir.path().join("slot.json");
    assert_eq!(backend.location("slot"), expected);
    assert_eq!(fs::read_to_string(&expected).unwrap(), "second");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(&nested);

    backend.write("slot", "x").unwrap();
    assert!(nested.join("slot.json").exists());
}

#[test]
fn test_fs_backend_unwritable_root_is_write_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();
    let backend = FsBackend::new(&blocker);

    let err = backend.write("slot", "x").unwrap_err();
    assert!(err.to_string().starts_with("Failed to write slot"));
}

#[test]
fn test_decks_survive_reload() {
    let (_dir, backend) = setup();
    let mut store = DeckStore::load(backend.clone());
    let fire = store.create_deck("Fire");
    store.add_card("A1-036").unwrap();
    store.add_card("A1-036").unwrap();
    let water = store.create_deck("Water");
    store.add_card("A1-053").unwrap();
    store.select_deck(&fire).unwrap();

    let reloaded = DeckStore::load(backend);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.current_id(), Some(fire.as_str()));
    assert_eq!(reloaded.get(&fire).unwrap().count_of("A1-036"), 2);
    assert_eq!(reloaded.get(&water).unwrap().name, "Water");
    assert_eq!(reloaded.get(&water).unwrap().count_of("A1-053"), 1);
}

#[test]
fn test_legacy_deck_file_is_migrated() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join(format!("{}.json", DECKS_KEY)),
        r#"{
            "deck-1700000000000": {"id": "deck-1700000000000", "name": "Old", "cards": {"A": 9, "B": 0}},
            "deck-1700000000500": {"name": "", "cards": {"C": 2}}
        }"#,
    )
    .unwrap();

    let mut store = DeckStore::load(backend.clone());
    let decks = store.decks();
    assert_eq!(decks.len(), 2);
    assert_eq!(decks[0].name, "Old");
    assert_eq!(decks[0].count_of("A"), 4);
    assert_eq!(decks[0].count_of("B"), 0);
    assert_eq!(decks[1].name, "Untitled deck");
    assert_eq!(store.current_id(), Some("deck-1700000000000"));

    // The next write upgrades the file to the versioned layout.
    store.create_deck("New");
    let raw = backend.read(DECKS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"version\": 1"));
}

#[test]
fn test_corrupt_deck_file_starts_empty() {
    let (dir, backend) = setup();
    fs::write(dir.path().join(format!("{}.json", DECKS_KEY)), "not json").unwrap();

    let store = DeckStore::load(backend);
    assert!(store.is_empty());
    assert!(store.current_deck().is_none());
}

#[test]
fn test_collection_survives_reload() {
    let (_dir, backend) = setup();
    let mut ownership = OwnershipStore::load(backend.clone());
    ownership.set_status("A1-001", CollectionStatus::Owned);
    ownership.set_status("A1-002", CollectionStatus::Wanted);

    let reloaded = OwnershipStore::load(backend.clone());
    assert_eq!(reloaded.status("A1-001"), CollectionStatus::Owned);
    assert_eq!(reloaded.status("A1-002"), CollectionStatus::Wanted);

    let raw = backend.read(COLLECTION_KEY).unwrap().unwrap();
    assert!(raw.contains("\"A1-001\": \"owned\""));
}

#[test]
fn test_write_failure_keeps_session_state() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").unwrap();

    let mut store = DeckStore::load(FsBackend::new(&blocker));
    let id = store.create_deck("Ephemeral");
    store.add_card("A1-001").unwrap();

    assert!(!store.is_persisted());
    assert_eq!(store.current_id(), Some(id.as_str()));
    assert_eq!(store.current_deck().unwrap().total_cards(), 1);
}
