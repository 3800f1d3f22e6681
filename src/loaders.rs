use crate::model::Tracker;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Entry {
    pub employee: String,
    pub project: String,
    pub hours: i64,
    #[serde(default)]
    pub budget: Option<i64>,
}

impl Entry {
    fn new(employee: &str, project: &str, hours: i64, budget: i64) -> Entry {
        Entry {
            employee: employee.to_owned(),
            project: project.to_owned(),
            hours,
            budget: Some(budget),
        }
    }
}

/// Read entries from CSV data with an `employee,project,hours[,budget]`
/// header row.
pub fn load_entries<R: Read>(reader: R) -> Result<Vec<Entry>> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
        .deserialize::<Entry>()
        .enumerate()
        .map(|(n, record)| record.wrap_err_with(|| format!("invalid entry at record {}", n + 1)))
        .collect()
}

pub fn load_entries_from_file(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
    let entries =
        load_entries(file).wrap_err_with(|| format!("cannot load entries from {}", path.display()))?;
    info!(file = %path.display(), entries = entries.len(), "entries loaded");
    Ok(entries)
}

pub fn record_entries(tracker: &mut Tracker, entries: &[Entry], default_budget: i64) {
    for entry in entries {
        tracker.record_entry(
            &entry.employee,
            &entry.project,
            entry.hours,
            entry.budget.unwrap_or(default_budget),
        );
    }
}

pub fn demo_entries() -> Vec<Entry> {
    vec![
        Entry::new("Alice", "AI Automation", 45, 150),
        Entry::new("Bob", "AI Automation", 52, 150),
        Entry::new("Sourav", "AI Automation", 95, 150),
        Entry::new("Charlie", "Backend Refactor", 60, 140),
        Entry::new("Dave", "Backend Refactor", 60, 140),
        Entry::new("Eve", "UI Revamp", 50, 100),
        Entry::new("Frank", "UI Revamp", 45, 100),
    ]
}

#[test]
fn test_load_entries() {
    let data = "employee,project,hours,budget\n\
                Alice, P1, 45, 150\n\
                Bob,P1,52,\n\
                Carol,P2,10\n";
    let entries = load_entries(data.as_bytes()).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0], Entry::new("Alice", "P1", 45, 150));
    assert_eq!(entries[1].budget, None);
    assert_eq!(entries[2].budget, None);
    assert_eq!(entries[2].hours, 10);
}

#[test]
fn test_load_entries_rejects_bad_hours() {
    let data = "employee,project,hours\nAlice,P1,12\nBob,P1,many\n";
    let err = load_entries(data.as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "invalid entry at record 2");
}

#[test]
fn test_record_entries_default_budget() {
    let mut tracker = Tracker::new();
    let entries = vec![
        Entry {
            budget: None,
            ..Entry::new("Alice", "P1", 10, 0)
        },
        Entry::new("Bob", "P2", 10, 30),
    ];
    record_entries(&mut tracker, &entries, 75);
    assert_eq!(tracker.project("P1").unwrap().budget, 75);
    assert_eq!(tracker.project("P2").unwrap().budget, 30);
}

#[test]
fn test_demo_entries() {
    let mut tracker = Tracker::new();
    record_entries(&mut tracker, &demo_entries(), 150);
    assert_eq!(
        tracker.sorted_projects(),
        vec![
            ("AI Automation", 192),
            ("Backend Refactor", 120),
            ("UI Revamp", 95),
        ]
    );
}

#[test]
fn test_load_entries_from_missing_file() {
    let path = Path::new("does/not/exist/entries.csv");
    let err = load_entries_from_file(path).unwrap_err();
    assert_eq!(err.to_string(), format!("cannot open {}", path.display()));
}
