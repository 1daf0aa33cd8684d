use std::fs;
use wastelog_store::{LogStore, StorageFormat};
use wastelog_types::WasteRecord;

fn sample_records() -> Vec<WasteRecord> {
    vec![
        WasteRecord::with_id("a-1", "BROT", 120, "VERDORBEN", Some("2025-10-01")).unwrap(),
        WasteRecord::with_id("a-2", "TRAUBEN", 200, "ZU VIEL GEKOCHT", Some("2025-10-02")).unwrap(),
        WasteRecord::with_id("a-3", "BROT", 80, "MHD ABGELAUFEN", Some("2025-10-03")).unwrap(),
        WasteRecord::with_id("a-4", "MILCH", 500, "VERDORBEN", Some("2025-10-04")).unwrap(),
    ]
}

#[test]
fn append_then_read_preserves_order_and_fields_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::open(dir.path().join("waste.jsonl"), StorageFormat::Jsonl).unwrap();

    let records = sample_records();
    for record in &records {
        store.append(record).unwrap();
    }

    let report = store.read_all().unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.records, records);
}

#[test]
fn append_then_read_preserves_order_and_fields_csv() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::open(dir.path().join("waste.csv"), StorageFormat::Csv).unwrap();

    let records = sample_records();
    for record in &records {
        store.append(record).unwrap();
    }

    let report = store.read_all().unwrap();
    assert!(report.skipped.is_empty());
    assert_eq!(report.records, records);
}

#[test]
fn read_all_on_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.jsonl");
    let store = LogStore::open(&path, StorageFormat::Jsonl).unwrap();
    fs::remove_file(&path).unwrap();

    let report = store.read_all().unwrap();
    assert!(report.records.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn csv_date_is_normalized_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::open(dir.path().join("waste.csv"), StorageFormat::Csv).unwrap();

    // German-format input comes back out as ISO on disk
    let record = WasteRecord::with_id("b-1", "KAESE", 50, "VERDORBEN", Some("03.10.2025")).unwrap();
    store.append(&record).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("2025-10-03"));
    assert!(!content.contains("03.10.2025"));
}

#[test]
fn malformed_jsonl_line_does_not_block_later_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.jsonl");
    let store = LogStore::open(&path, StorageFormat::Jsonl).unwrap();

    let records = sample_records();
    store.append(&records[0]).unwrap();
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("{broken json\n");
    fs::write(&path, content).unwrap();
    store.append(&records[1]).unwrap();

    let report = store.read_all().unwrap();
    assert_eq!(report.records, vec![records[0].clone(), records[1].clone()]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
}

#[test]
fn save_all_rewrites_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::open(dir.path().join("waste.jsonl"), StorageFormat::Jsonl).unwrap();

    let records = sample_records();
    for record in &records {
        store.append(record).unwrap();
    }

    // Drop one record via read-transform-rewrite
    let mut kept = store.read_all().unwrap().into_records();
    kept.retain(|r| r.id != "a-2");
    store.save_all(&kept).unwrap();

    let report = store.read_all().unwrap();
    assert_eq!(report.records.len(), 3);
    assert!(report.records.iter().all(|r| r.id != "a-2"));
    assert!(!store.path().with_file_name("waste.jsonl.tmp").exists());
}

#[test]
fn save_all_csv_keeps_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let store = LogStore::open(dir.path().join("waste.csv"), StorageFormat::Csv).unwrap();

    let records = sample_records();
    store.save_all(&records).unwrap();
    store.save_all(&records).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert_eq!(content.matches("ID,DATE,ITEM,GRAMS,REASON").count(), 1);
    assert_eq!(store.read_all().unwrap().records, records);
}

#[test]
fn stale_temp_file_does_not_corrupt_target() {
    // Simulates the aftermath of a crash between temp write and rename:
    // the target must stay untouched and a later save_all must still work.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.jsonl");
    let store = LogStore::open(&path, StorageFormat::Jsonl).unwrap();

    let records = sample_records();
    store.append(&records[0]).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    // Leftover temp file from an interrupted rewrite
    fs::write(path.with_file_name("waste.jsonl.tmp"), "half-written garbage").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), before);

    store.save_all(&records).unwrap();
    assert_eq!(store.read_all().unwrap().records, records);
    assert!(!path.with_file_name("waste.jsonl.tmp").exists());
}

#[test]
fn append_is_not_blocked_by_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("waste.jsonl");
    let store = LogStore::open(&path, StorageFormat::Jsonl).unwrap();

    // Even with an undecodable file body, append must only add to the end.
    fs::write(&path, "garbage line\n").unwrap();
    let record = sample_records().remove(0);
    store.append(&record).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("garbage line\n"));
    let report = store.read_all().unwrap();
    assert_eq!(report.records, vec![record]);
    assert_eq!(report.skipped.len(), 1);
}
