use rolodex::models::{AddressBook, Record};
use rolodex::storage::{JsonSnapshotStore, SnapshotStore};

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890").unwrap();
    john.add_phone("5556667777").unwrap();
    john.add_birthday("05.06.1990").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("0987654321").unwrap();
    book.add_record(jane);

    book
}

#[test]
fn test_load_missing_file_yields_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("absent.json"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("book.json"));

    let book = sample_book();
    store.save(&book).unwrap();

    let restored = store.load().unwrap();
    assert_eq!(restored, book);

    let names: Vec<String> = restored
        .records()
        .map(|r| r.name().as_str().to_string())
        .collect();
    assert_eq!(names, vec!["John", "Jane"]);
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("book.json"));

    store.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(Record::new("Solo"));
    store.save(&smaller).unwrap();

    let restored = store.load().unwrap();
    assert_eq!(restored.len(), 1);
    assert!(restored.find("Solo").is_some());
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = JsonSnapshotStore::new(&path);

    store.save(&sample_book()).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("book.json");
    let store = JsonSnapshotStore::new(&path);

    store.save(&sample_book()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_rejects_corrupt_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonSnapshotStore::new(&path);
    assert!(store.load().is_err());
}

#[test]
fn test_load_rejects_invalid_field_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
        &path,
        r#"{"John": {"name": "John", "phones": ["not-a-phone"]}}"#,
    )
    .unwrap();

    let store = JsonSnapshotStore::new(&path);
    assert!(store.load().is_err());
}

#[test]
fn test_snapshot_is_human_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = JsonSnapshotStore::new(&path);

    store.save(&sample_book()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"John\""));
    assert!(contents.contains("1234567890"));
    assert!(contents.contains('\n'), "snapshot should be pretty-printed");
}
