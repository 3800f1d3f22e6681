use crate::model::{Hours, Tracker};
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
pub struct ProjectDetails {
    pub name: String,
    pub total_hours: Hours,
    pub employees: HashMap<String, Hours>,
    pub status: &'static str,
}

pub fn project_details(tracker: &Tracker) -> Vec<ProjectDetails> {
    tracker
        .projects()
        .iter()
        .map(|p| ProjectDetails {
            name: p.name.clone(),
            total_hours: p.total_hours(),
            employees: p.employees().clone(),
            status: if p.is_over_budget() { "EXCEEDED" } else { "OK" },
        })
        .collect()
}

pub fn exceeded_projects(tracker: &Tracker) -> BTreeSet<&str> {
    tracker
        .projects()
        .iter()
        .filter(|p| p.is_over_budget())
        .map(|p| p.name.as_str())
        .collect()
}

#[cfg(test)]
fn sample() -> Tracker {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "UI Revamp", 101, 100);
    tracker.record_entry("Bob", "Backend Refactor", 140, 140);
    tracker.record_entry("Carol", "AI Automation", 151, 150);
    tracker
}

#[test]
fn test_project_details() {
    let details = project_details(&sample());
    assert_eq!(
        details
            .iter()
            .map(|d| (d.name.as_str(), d.total_hours, d.status))
            .collect::<Vec<_>>(),
        vec![
            ("UI Revamp", 101, "EXCEEDED"),
            ("Backend Refactor", 140, "OK"),
            ("AI Automation", 151, "EXCEEDED"),
        ]
    );
    assert_eq!(details[0].employees.get("Alice"), Some(&101));
}

#[test]
fn test_exceeded_projects() {
    let tracker = sample();
    assert_eq!(
        exceeded_projects(&tracker).into_iter().collect::<Vec<_>>(),
        vec!["AI Automation", "UI Revamp"]
    );
    assert!(exceeded_projects(&Tracker::new()).is_empty());
}
