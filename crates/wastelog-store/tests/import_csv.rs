use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use wastelog_store::{import_csv, ImportOptions, LogStore, StorageFormat};

struct Fixture {
    _dir: tempfile::TempDir,
    store: LogStore,
    csv_path: PathBuf,
}

impl Fixture {
    fn new(csv_content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::open(dir.path().join("waste.jsonl"), StorageFormat::Jsonl).unwrap();
        let csv_path = dir.path().join("import.csv");
        fs::write(&csv_path, csv_content).unwrap();
        Self {
            _dir: dir,
            store,
            csv_path,
        }
    }
}

#[test]
fn imports_rows_with_default_headers() {
    let fixture = Fixture::new(
        "DATE,ITEM,GRAMS,REASON\n\
         2025-10-01,BROT,120,VERDORBEN\n\
         2025-10-02,MILCH,500,VERDORBEN\n",
    );

    let summary = import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap();
    assert_eq!(summary.added, 2);
    assert_eq!(summary.skipped, 0);
    assert!(summary.errors.is_empty());
    assert_eq!(summary.target, fixture.store.path());

    let records = fixture.store.read_all().unwrap().into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].item, "BROT");
    // Imported rows without an ID column still get ids assigned
    assert!(!records[0].id.is_empty());
}

#[test]
fn header_match_is_case_insensitive() {
    let fixture = Fixture::new("date,Item,grams,Reason\n2025-10-01,BROT,120,VERDORBEN\n");
    let summary = import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap();
    assert_eq!(summary.added, 1);
}

#[test]
fn keeps_supplied_ids() {
    let fixture = Fixture::new(
        "ID,DATE,ITEM,GRAMS,REASON\n\
         legacy-7,2025-10-01,BROT,120,VERDORBEN\n",
    );
    import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap();
    let records = fixture.store.read_all().unwrap().into_records();
    assert_eq!(records[0].id, "legacy-7");
}

#[test]
fn mapped_headers_override_detection() {
    let fixture = Fixture::new(
        "Datum,Artikel,Menge,Grund\n\
         01.10.2025,BROT,120,VERDORBEN\n",
    );
    let mapping: HashMap<String, String> = [
        ("DATE", "Datum"),
        ("ITEM", "Artikel"),
        ("GRAMS", "Menge"),
        ("REASON", "Grund"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let options = ImportOptions {
        mapping: Some(mapping),
        ..Default::default()
    };
    let summary = import_csv(&fixture.csv_path, &fixture.store, &options).unwrap();
    assert_eq!(summary.added, 1);
    let records = fixture.store.read_all().unwrap().into_records();
    assert_eq!(records[0].date.to_string(), "2025-10-01");
}

#[test]
fn semicolon_delimiter_is_sniffed() {
    let fixture = Fixture::new(
        "DATE;ITEM;GRAMS;REASON\n\
         2025-10-01;BROT;120;VERDORBEN\n",
    );
    let summary = import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap();
    assert_eq!(summary.added, 1);
}

#[test]
fn bad_rows_are_collected_not_fatal() {
    let fixture = Fixture::new(
        "DATE,ITEM,GRAMS,REASON\n\
         2025-10-01,BROT,120,VERDORBEN\n\
         2025-10-02,KAESE,not-a-number,ALT\n\
         someday,MILCH,500,VERDORBEN\n\
         2025-10-04,,10,LEER\n\
         2025-10-05,APFEL,80,BRAUN\n",
    );

    let summary = import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap();
    assert_eq!(summary.added, 2);
    assert_eq!(summary.skipped, 3);
    let lines: Vec<usize> = summary.errors.iter().map(|e| e.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
}

#[test]
fn dry_run_counts_without_writing() {
    let fixture = Fixture::new(
        "DATE,ITEM,GRAMS,REASON\n\
         2025-10-01,BROT,120,VERDORBEN\n\
         bad-date,MILCH,500,VERDORBEN\n",
    );

    let options = ImportOptions {
        dry_run: true,
        ..Default::default()
    };
    let summary = import_csv(&fixture.csv_path, &fixture.store, &options).unwrap();
    assert_eq!(summary.added, 1);
    assert_eq!(summary.skipped, 1);
    assert!(fixture.store.read_all().unwrap().records.is_empty());
}

#[test]
fn missing_required_column_is_an_error() {
    let fixture = Fixture::new("DATE,ITEM,REASON\n2025-10-01,BROT,VERDORBEN\n");
    let err = import_csv(&fixture.csv_path, &fixture.store, &ImportOptions::default()).unwrap_err();
    assert!(err.to_string().contains("GRAMS"));
}

#[test]
fn missing_file_is_an_error() {
    let fixture = Fixture::new("DATE,ITEM,GRAMS,REASON\n");
    let missing = fixture.csv_path.with_file_name("nope.csv");
    assert!(import_csv(&missing, &fixture.store, &ImportOptions::default()).is_err());
}
