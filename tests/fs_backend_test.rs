use roster::error::RosterError;
use roster::model::StudentRecord;
use roster::store::backend::StorageBackend;
use roster::store::fs_backend::FsBackend;
use roster::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::in_dir(&dir.path().join("data"), "students.json");
    (dir, backend)
}

#[test]
fn test_missing_file_loads_as_none() {
    let (_dir, backend) = setup();
    assert!(backend.load_records().unwrap().is_none());
}

#[test]
fn test_empty_file_loads_as_none() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(backend.data_file(), "").unwrap();
    assert!(backend.load_records().unwrap().is_none());
}

#[test]
fn test_save_creates_directory_and_pretty_json() {
    let (_dir, backend) = setup();
    let records = vec![StudentRecord::new("101", "Ana", 20).with_class("10")];

    backend.save_records(&records).unwrap();

    let on_disk = fs::read_to_string(backend.data_file()).unwrap();
    assert!(on_disk.starts_with("[\n"));
    assert!(on_disk.contains("\"roll_number\": \"101\""));
    assert!(on_disk.contains("\"class\": \"10\""));
    assert!(on_disk.contains("\"section\": \"\""));
    assert!(on_disk.contains("\"age\": 20"));
}

#[test]
fn test_save_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    backend
        .save_records(&[StudentRecord::new("1", "Ana", 20)])
        .unwrap();
    backend
        .save_records(&[StudentRecord::new("2", "Bob", 21)])
        .unwrap();

    for entry in fs::read_dir(dir.path().join("data")).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_reads_records_written_by_hand() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(
        backend.data_file(),
        r#"[
    {"roll_number": "101", "name": "Ana", "age": 20, "class": "10"},
    {"roll_number": "102", "name": "Bob", "age": 21, "class": "10", "section": "B", "address": "Elm St"}
]"#,
    )
    .unwrap();

    let records = backend.load_records().unwrap().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].section, "");
    assert_eq!(records[1].address, "Elm St");
}

#[test]
fn test_corrupt_file_is_parse_error() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(backend.data_file(), "not json at all").unwrap();

    assert!(matches!(
        backend.load_records(),
        Err(RosterError::Parse(_))
    ));
}

#[test]
fn test_invalid_utf8_is_parse_error() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(
        backend.data_file(),
        b"[{\"roll_number\": \"1\", \"name\": \"Jos\xe9\", \"age\": 20}]",
    )
    .unwrap();

    let err = backend.load_records().unwrap_err();
    assert!(matches!(err, RosterError::Parse(_)));
    assert!(err.is_recoverable_load());
}

#[test]
fn test_store_round_trip_through_file() {
    let (dir, backend) = setup();
    let mut store = RecordStore::with_backend(backend);
    store.load().unwrap();
    store
        .add(StudentRecord::new("101", "Ana", 20).with_section("A"))
        .unwrap();
    store
        .add(StudentRecord::new("7", "Cy", 3).with_address("Oak Rd"))
        .unwrap();
    let written = store.list_all().to_vec();

    let mut fresh = RecordStore::with_backend(FsBackend::in_dir(
        &dir.path().join("data"),
        "students.json",
    ));
    let report = fresh.load().unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(fresh.list_all(), written.as_slice());
}

#[test]
fn test_store_resets_on_corrupt_file() {
    let (dir, backend) = setup();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(backend.data_file(), "[{\"roll_number\": \"1\"").unwrap();

    let mut store = RecordStore::with_backend(backend);
    assert!(store.load().is_err());
    assert!(store.is_empty());

    // The next write replaces the corrupt file with valid data.
    store.add(StudentRecord::new("2", "Bob", 21)).unwrap();
    let mut fresh = RecordStore::with_backend(FsBackend::in_dir(
        &dir.path().join("data"),
        "students.json",
    ));
    fresh.load().unwrap();
    assert_eq!(fresh.len(), 1);
}
