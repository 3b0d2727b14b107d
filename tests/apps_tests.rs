use chrono::NaiveDate;
use devaudit::core::inventory::parse_profiler_json;
use devaudit::core::metadata::{parse_last_used, resolve_last_used};
use devaudit::core::usage::{REPORT_TITLE, UsageReporter, build_table};
use devaudit::models::application::{NEVER_OPENED, PATH_NOT_AVAILABLE, sort_records};
use devaudit::models::{ApplicationDescriptor, ApplicationRecord, LastUsed, SortOrder};
use devaudit::utils::table::strip_ansi;
use std::path::Path;

mod common;
use common::{FailingInventory, FakeInventory, FakeLookup};

fn record(name: &str, last_used: LastUsed) -> ApplicationRecord {
    ApplicationRecord {
        name: name.to_string(),
        last_used,
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> LastUsed {
    LastUsed::At(
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap(),
    )
}

#[test]
fn test_timestamp_redisplays_without_offset() {
    let value = parse_last_used("kMDItemLastUsedDate = 2024-01-02 03:04:05 +0000\n");
    assert_eq!(value.to_string(), "2024-01-02 03:04:05");

    // bare value and quoted value parse the same way
    assert_eq!(
        parse_last_used("2024-01-02 03:04:05 +0000").to_string(),
        "2024-01-02 03:04:05"
    );
    assert_eq!(
        parse_last_used("kMDItemLastUsedDate = \"2024-01-02 03:04:05 +0000\"").to_string(),
        "2024-01-02 03:04:05"
    );
}

#[test]
fn test_timestamp_keeps_wall_time_of_its_offset() {
    let value = parse_last_used("kMDItemLastUsedDate = 2024-06-30 23:15:00 +0200");
    assert_eq!(value, at(2024, 6, 30, 23, 15, 0));
}

#[test]
fn test_null_marker_means_never_opened() {
    assert_eq!(
        parse_last_used("kMDItemLastUsedDate = (null)\n"),
        LastUsed::NeverOpened
    );
    assert_eq!(parse_last_used(""), LastUsed::NeverOpened);
    assert_eq!(LastUsed::NeverOpened.to_string(), NEVER_OPENED);
}

#[test]
fn test_unparseable_value_becomes_error_text() {
    let value = parse_last_used("kMDItemLastUsedDate = yesterday");
    assert!(matches!(value, LastUsed::Error(_)));
    assert!(value.to_string().starts_with("Error: "));
}

#[test]
fn test_lookup_failure_becomes_error_text() {
    let lookup = FakeLookup::default();
    let value = resolve_last_used(&lookup, Path::new("/Applications/Ghost.app"));
    assert_eq!(
        value.to_string(),
        "Error: Internal error: no metadata for /Applications/Ghost.app"
    );
}

#[test]
fn test_missing_path_never_invokes_lookup() {
    let inventory = FakeInventory(vec![ApplicationDescriptor::new("Helper", None)]);
    let lookup = FakeLookup::default();

    let records = UsageReporter::new(&inventory, &lookup).collect().unwrap();

    assert_eq!(lookup.calls.get(), 0);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].last_used, LastUsed::PathNotAvailable);
    assert_eq!(records[0].display_last_used(), PATH_NOT_AVAILABLE);
}

#[test]
fn test_table_has_one_row_per_descriptor() {
    let inventory = FakeInventory(vec![
        ApplicationDescriptor::new("Safari", Some("/Applications/Safari.app")),
        ApplicationDescriptor::new("Notes", Some("/Applications/Notes.app")),
        ApplicationDescriptor::new("Helper", None),
        ApplicationDescriptor::new("Ghost", Some("/Applications/Ghost.app")),
    ]);
    let lookup = FakeLookup::default()
        .with(
            "/Applications/Safari.app",
            "kMDItemLastUsedDate = 2024-01-02 03:04:05 +0000",
        )
        .with("/Applications/Notes.app", "kMDItemLastUsedDate = (null)");

    let mut records = UsageReporter::new(&inventory, &lookup).collect().unwrap();
    assert_eq!(lookup.calls.get(), 3);

    let table = build_table(&mut records, SortOrder::Lexical);
    assert_eq!(table.row_count(), 4);

    let rendered = table.render(false);
    assert!(rendered.contains(REPORT_TITLE));
    assert!(rendered.contains("Application Name"));
    assert!(rendered.contains("Last Used Date"));
    assert_eq!(rendered.lines().filter(|l| l.starts_with('│')).count(), 4);
    assert!(rendered.contains("Error: "));
}

#[test]
fn test_inventory_failure_is_fatal() {
    let lookup = FakeLookup::default();
    assert!(UsageReporter::new(&FailingInventory, &lookup).collect().is_err());
}

#[test]
fn test_lexical_sort_is_descending_on_display_text() {
    let mut records = vec![
        record("Old", at(2023, 5, 1, 10, 0, 0)),
        record("Never", LastUsed::NeverOpened),
        record("New", at(2024, 1, 2, 3, 4, 5)),
        record("NoPath", LastUsed::PathNotAvailable),
        record("Broken", LastUsed::Error("boom".to_string())),
    ];

    sort_records(&mut records, SortOrder::Lexical);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    // "Path…" > "Never…" > "Error…" > "2024…" > "2023…"
    assert_eq!(names, vec!["NoPath", "Never", "Broken", "New", "Old"]);
}

#[test]
fn test_chronological_sort_puts_dates_first() {
    let mut records = vec![
        record("Broken", LastUsed::Error("boom".to_string())),
        record("Old", at(2023, 5, 1, 10, 0, 0)),
        record("NoPath", LastUsed::PathNotAvailable),
        record("Never", LastUsed::NeverOpened),
        record("New", at(2024, 1, 2, 3, 4, 5)),
    ];

    sort_records(&mut records, SortOrder::Chronological);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Old", "Never", "NoPath", "Broken"]);
}

#[test]
fn test_profiler_json_parsing() {
    let json = r#"{
        "SPApplicationsDataType": [
            {"_name": "Safari", "path": "/Applications/Safari.app", "version": "17.2"},
            {"_name": "Orphan"},
            {"path": "/Applications/Nameless.app"}
        ]
    }"#;

    let apps = parse_profiler_json(json).unwrap();
    assert_eq!(
        apps,
        vec![
            ApplicationDescriptor::new("Safari", Some("/Applications/Safari.app")),
            ApplicationDescriptor::new("Orphan", None),
            ApplicationDescriptor::new("Unknown", Some("/Applications/Nameless.app")),
        ]
    );

    assert!(parse_profiler_json("{}").unwrap().is_empty());
    assert!(parse_profiler_json("not json").is_err());
}

#[test]
fn test_colored_table_has_same_visible_text() {
    let mut records = vec![record("Safari", at(2024, 1, 2, 3, 4, 5))];
    let table = build_table(&mut records, SortOrder::Lexical);

    let plain = table.render(false);
    let colored = table.render(true);
    assert_ne!(plain, colored);
    assert_eq!(strip_ansi(&colored), plain);
}
