use super::{Hours, Project, Tracker};
use tracing::{debug, trace, warn};

/// Proposal to move an employee away from an over-budget project.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suggestion {
    pub employee: String,
    pub from: String,
    pub to: String,
}

impl Suggestion {
    /// The least loaded project may be the over-budget project itself when
    /// it is the only one or every other project has more hours.
    pub fn is_self_move(&self) -> bool {
        self.from == self.to
    }
}

/// Walk employees from the largest contributor down and return the one
/// whose hours bring the running total from within budget to above it.
fn violating_employee(project: &Project) -> Option<&str> {
    let budget = Hours::from(project.budget);
    let mut accumulated: Hours = 0;
    for (employee, hours) in project.ranked_employees() {
        let previous = accumulated;
        accumulated += hours;
        trace!(project = %project.name, employee = %employee, accumulated, "accumulating hours");
        if accumulated > budget && previous <= budget {
            return Some(employee);
        }
    }
    None
}

impl Tracker {
    /// Suggest moving the employee who tipped the first over-budget project
    /// above its budget to the least loaded project. Later over-budget
    /// projects are not considered.
    pub fn suggest_reassignment(&self) -> Option<Suggestion> {
        let source = self.projects().iter().find(|p| p.is_over_budget())?;
        debug!(
            project = %source.name,
            total_hours = source.total_hours(),
            budget = source.budget,
            "first project over budget",
        );
        let Some(employee) = violating_employee(source) else {
            debug!(project = %source.name, "no employee crosses the budget");
            return None;
        };
        let target = self.least_loaded()?;
        let suggestion = Suggestion {
            employee: employee.to_owned(),
            from: source.name.clone(),
            to: target.name.clone(),
        };
        if suggestion.is_self_move() {
            warn!(project = %source.name, "over-budget project is also the least loaded one");
        }
        Some(suggestion)
    }
}

#[cfg(test)]
fn ai_automation(tracker: &mut Tracker) {
    tracker.record_entry("Alice", "AI Automation", 45, 150);
    tracker.record_entry("Bob", "AI Automation", 52, 150);
    tracker.record_entry("Sourav", "AI Automation", 95, 150);
}

#[test]
fn test_single_project_targets_itself() {
    let mut tracker = Tracker::new();
    ai_automation(&mut tracker);
    let suggestion = tracker.suggest_reassignment().unwrap();
    assert_eq!(suggestion.employee, "Alice");
    assert_eq!(suggestion.from, "AI Automation");
    assert_eq!(suggestion.to, "AI Automation");
    assert!(suggestion.is_self_move());
}

#[test]
fn test_demo_data() {
    let mut tracker = Tracker::new();
    ai_automation(&mut tracker);
    tracker.record_entry("Charlie", "Backend Refactor", 60, 140);
    tracker.record_entry("Dave", "Backend Refactor", 60, 140);
    tracker.record_entry("Eve", "UI Revamp", 50, 100);
    tracker.record_entry("Frank", "UI Revamp", 45, 100);
    assert_eq!(
        tracker.suggest_reassignment(),
        Some(Suggestion {
            employee: "Alice".into(),
            from: "AI Automation".into(),
            to: "UI Revamp".into(),
        })
    );
}

#[test]
fn test_within_budget() {
    let mut tracker = Tracker::new();
    assert_eq!(tracker.suggest_reassignment(), None);
    tracker.record_entry("Alice", "P1", 150, 150);
    tracker.record_entry("Bob", "P2", 10, 150);
    assert_eq!(tracker.suggest_reassignment(), None);
}

#[test]
fn test_only_first_over_budget_project() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", 120, 100);
    tracker.record_entry("Bob", "P2", 500, 100);
    tracker.record_entry("Carol", "P3", 5, 100);
    let suggestion = tracker.suggest_reassignment().unwrap();
    assert_eq!(suggestion.employee, "Alice");
    assert_eq!(suggestion.from, "P1");
    assert_eq!(suggestion.to, "P3");
}

#[test]
fn test_largest_contributor_tips_budget() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", 10, 100);
    tracker.record_entry("Bob", "P1", 120, 100);
    tracker.record_entry("Carol", "P2", 1, 100);
    assert_eq!(tracker.suggest_reassignment().unwrap().employee, "Bob");
}

#[test]
fn test_employee_tie_broken_by_name() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Dave", "P1", 60, 100);
    tracker.record_entry("Charlie", "P1", 60, 100);
    // Charlie is ranked first, Dave tips the total from 60 to 120.
    assert_eq!(tracker.suggest_reassignment().unwrap().employee, "Dave");
}

#[test]
fn test_target_tie_goes_to_earliest_project() {
    let mut tracker = Tracker::new();
    tracker.record_entry("Alice", "P1", 200, 100);
    tracker.record_entry("Bob", "P3", 5, 100);
    tracker.record_entry("Carol", "P2", 5, 100);
    assert_eq!(tracker.suggest_reassignment().unwrap().to, "P3");
}

#[test]
fn test_no_violating_employee_stops_search() {
    let mut tracker = Tracker::new();
    // With a negative budget the running total starts above it, so no
    // employee ever crosses it.
    tracker.record_entry("Alice", "P1", 5, -10);
    tracker.record_entry("Bob", "P2", 200, 100);
    assert!(tracker.project("P1").unwrap().is_over_budget());
    assert_eq!(tracker.suggest_reassignment(), None);
}
