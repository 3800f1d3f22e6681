use super::{Hours, Project, ProjectId};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{debug, warn};

pub const DEFAULT_BUDGET: i64 = 150;

/// A value in a flat batch of entries, see [`Tracker::record_batch`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Field {
    Text(String),
    Hours(i64),
}

impl From<&str> for Field {
    fn from(s: &str) -> Field {
        Field::Text(s.to_owned())
    }
}

impl From<i64> for Field {
    fn from(hours: i64) -> Field {
        Field::Hours(hours)
    }
}

/// Projects indexed by name. Projects are kept in creation order, which is
/// the order every query walks them in.
#[derive(Debug, Default)]
pub struct Tracker {
    projects: Vec<Project>,
    by_name: HashMap<String, ProjectId>,
}

impl Tracker {
    pub fn new() -> Tracker {
        Tracker::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.by_name.get(name).map(|&ProjectId(id)| &self.projects[id])
    }

    /// Return the project with this name, creating it with `budget` if it
    /// does not exist yet. The budget of an existing project is left alone.
    fn project_mut_or_insert(&mut self, name: &str, budget: i64) -> &mut Project {
        let ProjectId(id) = match self.by_name.get(name) {
            Some(&id) => id,
            None => {
                let id = ProjectId(self.projects.len());
                debug!(project = %name, budget, "creating project");
                self.projects.push(Project::new(id, name, budget));
                self.by_name.insert(name.to_owned(), id);
                id
            }
        };
        &mut self.projects[id]
    }

    pub fn record_entry(&mut self, employee: &str, project: &str, hours: i64, budget: i64) {
        debug!(employee = %employee, project = %project, hours, "recording entry");
        self.project_mut_or_insert(project, budget)
            .add_hours(employee, hours);
    }

    /// Record entries given as consecutive (employee, project, hours)
    /// groups. A trailing incomplete group is ignored. Return the number of
    /// entries recorded.
    pub fn record_batch(&mut self, values: &[Field], budget: i64) -> usize {
        let mut recorded = 0;
        for group in values.chunks_exact(3) {
            if let [Field::Text(employee), Field::Text(project), Field::Hours(hours)] = group {
                self.record_entry(employee, project, *hours, budget);
                recorded += 1;
            } else {
                warn!(group = ?group, "skipping batch group which is not an entry");
            }
        }
        recorded
    }

    /// Project names and total hours, most hours first. Projects with the
    /// same total are ordered by name.
    pub fn sorted_projects(&self) -> Vec<(&str, Hours)> {
        let mut sorted = self
            .projects
            .iter()
            .map(|p| (p.name.as_str(), p.total_hours()))
            .collect::<Vec<_>>();
        sorted.sort_by_key(|&(name, hours)| (Reverse(hours), name));
        sorted
    }

    /// One line per project, computed when the iterator is advanced.
    pub fn project_summaries(&self) -> impl Iterator<Item = String> + '_ {
        self.projects.iter().map(|p| {
            format!(
                "Project: {} | Total Hours: {} | {}",
                p.name,
                p.total_hours(),
                p.budget_status()
            )
        })
    }

    /// Whether `name1` has more hours than `name2`, or `None` if one of the
    /// projects is unknown.
    pub fn compare(&self, name1: &str, name2: &str) -> Option<bool> {
        Some(self.project(name1)?.is_greater_than(self.project(name2)?))
    }

    /// Independent copy of every project, in creation order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// The project with the lowest total hours, the earliest created one
    /// in case of a tie.
    pub fn least_loaded(&self) -> Option<&Project> {
        self.projects.iter().min_by_key(|p| (p.total_hours(), p.id))
    }
}

#[cfg(test)]
fn sample() -> Tracker {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", 45, 150);
    tracker.record_entry("Bob", "P1", 52, 150);
    tracker.record_entry("Sourav", "P1", 95, 150);
    tracker
}

#[test]
fn test_record_entry_accumulates() {
    let mut tracker = sample();
    tracker.record_entry("Alice", "P1", 5, 150);
    let p1 = tracker.project("P1").unwrap();
    assert_eq!(p1.total_hours(), 197);
    assert_eq!(p1.hours_of("Alice"), Some(50));
    assert_eq!(p1.employees().values().sum::<Hours>(), p1.total_hours());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_budget_fixed_at_creation() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", 10, 20);
    tracker.record_entry("Bob", "P1", 10, 500);
    tracker.record_entry("Carol", "P1", 1, DEFAULT_BUDGET);
    assert_eq!(tracker.project("P1").unwrap().budget, 20);
}

#[test]
fn test_summaries() {
    let mut tracker = sample();
    tracker.record_entry("Eve", "P2", 100, 100);
    let summaries = tracker.project_summaries().collect::<Vec<_>>();
    assert_eq!(
        summaries,
        vec![
            "Project: P1 | Total Hours: 192 | BUDGET EXCEEDED",
            "Project: P2 | Total Hours: 100 | Within Budget",
        ]
    );
    // A fresh call reflects the current state.
    tracker.record_entry("Eve", "P2", 1, 100);
    assert_eq!(
        tracker.project_summaries().nth(1).unwrap(),
        "Project: P2 | Total Hours: 101 | BUDGET EXCEEDED"
    );
    assert_eq!(Tracker::new().project_summaries().count(), 0);
}

#[test]
fn test_sorted_projects() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "B", 10, 150);
    tracker.record_entry("Bob", "C", 30, 150);
    tracker.record_entry("Carol", "A", 10, 150);
    tracker.record_entry("Dave", "D", -5, 150);
    let sorted = tracker.sorted_projects();
    assert_eq!(sorted, vec![("C", 30), ("A", 10), ("B", 10), ("D", -5)]);
    assert!(sorted.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn test_compare() {
    let mut tracker = sample();
    tracker.record_entry("Eve", "P2", 10, 100);
    assert_eq!(tracker.compare("P1", "P2"), Some(true));
    assert_eq!(tracker.compare("P2", "P1"), Some(false));
    assert_eq!(tracker.compare("P1", "P1"), Some(false));
    assert_eq!(tracker.compare("X", "P1"), None);
    assert_eq!(tracker.compare("P1", "X"), None);
}

#[test]
fn test_snapshot_is_deep() {
    let mut tracker = sample();
    let mut snapshot = tracker.snapshot();
    snapshot[0].add_hours("Mallory", 1000);
    let live = tracker.project("P1").unwrap();
    assert_eq!(live.total_hours(), 192);
    assert_eq!(live.hours_of("Mallory"), None);
    tracker.record_entry("Alice", "P1", 8, 150);
    assert_eq!(snapshot[0].hours_of("Alice"), Some(45));
    assert_eq!(snapshot[0].total_hours(), 1192);
}

#[test]
fn test_record_batch() {
    let mut tracker = Tracker::new();
    let values = vec![
        Field::from("Alice"),
        Field::from("P1"),
        Field::from(10),
        Field::from("Bob"),
        Field::from("P2"),
        Field::from(20),
        Field::from("Carol"),
        Field::from("P1"),
    ];
    assert_eq!(tracker.record_batch(&values, 50), 2);
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.project("P1").unwrap().total_hours(), 10);
    assert_eq!(tracker.project("P1").unwrap().hours_of("Carol"), None);
    assert_eq!(tracker.project("P2").unwrap().budget, 50);
}

#[test]
fn test_record_batch_skips_malformed_group() {
    let mut tracker = Tracker::new();
    let values = vec![
        Field::from("Alice"),
        Field::from(10),
        Field::from("P1"),
        Field::from("Bob"),
        Field::from("P2"),
        Field::from(20),
    ];
    assert_eq!(tracker.record_batch(&values, DEFAULT_BUDGET), 1);
    assert!(tracker.project("P1").is_none());
    assert_eq!(tracker.project("P2").unwrap().total_hours(), 20);
}

#[test]
fn test_least_loaded() {
    let mut tracker = Tracker::new();
    assert!(tracker.least_loaded().is_none());
    tracker.record_entry("Alice", "P1", 30, 150);
    tracker.record_entry("Bob", "P2", 10, 150);
    tracker.record_entry("Carol", "P3", 10, 150);
    assert_eq!(tracker.least_loaded().unwrap().name, "P2");
}

#[test]
fn test_record_entry_large_hours() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", i64::MAX, 150);
    tracker.record_entry("Bob", "P1", 1, 150);
    let p1 = tracker.project("P1").unwrap();
    assert_eq!(p1.total_hours(), Hours::from(i64::MAX) + 1);
    assert_eq!(p1.employees().values().sum::<Hours>(), p1.total_hours());
    assert_eq!(tracker.suggest_reassignment().unwrap().employee, "Alice");
}
