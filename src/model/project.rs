use std::collections::HashMap;
use std::fmt;

/// Accumulated hours. Entries are `i64`, sums are kept wider so that no
/// realistic sequence of entries can overflow.
pub type Hours = i128;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BudgetStatus {
    WithinBudget,
    Exceeded,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BudgetStatus::WithinBudget => write!(f, "Within Budget"),
            BudgetStatus::Exceeded => write!(f, "BUDGET EXCEEDED"),
        }
    }
}

/// Hours logged against a project, both in total and per employee.
///
/// `total_hours` is always the sum of the `employees` values. Cloning a
/// project copies the employee map as well, so a clone never shares state
/// with its original.
#[derive(Clone, Debug)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub budget: i64,
    total_hours: Hours,
    employees: HashMap<String, Hours>,
}

impl Project {
    pub fn new(id: ProjectId, name: &str, budget: i64) -> Project {
        Project {
            id,
            name: name.to_owned(),
            budget,
            total_hours: 0,
            employees: HashMap::new(),
        }
    }

    /// Add hours for an employee. Hours are not checked, negative values
    /// are accepted and reduce the totals. Any `i64` is accepted: totals
    /// are `i128` and would need more than 2^63 maximal entries to overflow.
    pub fn add_hours(&mut self, employee: &str, hours: i64) {
        let hours = Hours::from(hours);
        *self.employees.entry(employee.to_owned()).or_insert(0) += hours;
        self.total_hours += hours;
    }

    pub fn total_hours(&self) -> Hours {
        self.total_hours
    }

    pub fn employees(&self) -> &HashMap<String, Hours> {
        &self.employees
    }

    pub fn hours_of(&self, employee: &str) -> Option<Hours> {
        self.employees.get(employee).copied()
    }

    pub fn is_greater_than(&self, other: &Project) -> bool {
        self.total_hours > other.total_hours
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_hours > Hours::from(self.budget)
    }

    pub fn budget_status(&self) -> BudgetStatus {
        if self.is_over_budget() {
            BudgetStatus::Exceeded
        } else {
            BudgetStatus::WithinBudget
        }
    }

    /// Employees ordered by contributed hours, largest first. Employees
    /// with the same hours are ordered by name.
    pub fn ranked_employees(&self) -> Vec<(&str, Hours)> {
        let mut ranked = self
            .employees
            .iter()
            .map(|(name, &hours)| (name.as_str(), hours))
            .collect::<Vec<_>>();
        ranked.sort_by(|&(n1, h1), &(n2, h2)| h2.cmp(&h1).then_with(|| n1.cmp(n2)));
        ranked
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Project({}, {}h)", self.name, self.total_hours)
    }
}

#[test]
fn test_add_hours() {
    let mut p = Project::new(ProjectId(0), "dummy", 150);
    p.add_hours("Alice", 45);
    p.add_hours("Bob", 52);
    p.add_hours("Alice", 10);
    assert_eq!(p.total_hours(), 107);
    assert_eq!(p.hours_of("Alice"), Some(55));
    assert_eq!(p.hours_of("Bob"), Some(52));
    assert_eq!(p.hours_of("Carol"), None);
    assert_eq!(p.employees().values().sum::<Hours>(), p.total_hours());
}

#[test]
fn test_add_hours_accepts_non_positive() {
    let mut p = Project::new(ProjectId(0), "dummy", 150);
    p.add_hours("Alice", 20);
    p.add_hours("Alice", -30);
    p.add_hours("Bob", 0);
    assert_eq!(p.total_hours(), -10);
    assert_eq!(p.hours_of("Alice"), Some(-10));
    assert_eq!(p.hours_of("Bob"), Some(0));
}

#[test]
fn test_budget_status() {
    let mut p = Project::new(ProjectId(0), "dummy", 100);
    p.add_hours("Alice", 100);
    assert_eq!(p.budget_status(), BudgetStatus::WithinBudget);
    assert_eq!(p.budget_status().to_string(), "Within Budget");
    p.add_hours("Alice", 1);
    assert_eq!(p.budget_status(), BudgetStatus::Exceeded);
    assert_eq!(p.budget_status().to_string(), "BUDGET EXCEEDED");
}

#[test]
fn test_is_greater_than() {
    let mut p1 = Project::new(ProjectId(0), "p1", 100);
    let mut p2 = Project::new(ProjectId(1), "p2", 100);
    p1.add_hours("Alice", 10);
    p2.add_hours("Bob", 10);
    assert!(!p1.is_greater_than(&p2));
    assert!(!p2.is_greater_than(&p1));
    p1.add_hours("Alice", 1);
    assert!(p1.is_greater_than(&p2));
    assert!(!p2.is_greater_than(&p1));
}

#[test]
fn test_ranked_employees() {
    let mut p = Project::new(ProjectId(0), "dummy", 100);
    p.add_hours("Dave", 60);
    p.add_hours("Charlie", 60);
    p.add_hours("Eve", 80);
    assert_eq!(
        p.ranked_employees(),
        vec![("Eve", 80), ("Charlie", 60), ("Dave", 60)]
    );
}

#[test]
fn test_clone_is_independent() {
    let mut p = Project::new(ProjectId(0), "dummy", 100);
    p.add_hours("Alice", 10);
    let mut copy = p.clone();
    copy.add_hours("Alice", 5);
    copy.add_hours("Bob", 5);
    assert_eq!(p.total_hours(), 10);
    assert_eq!(p.hours_of("Bob"), None);
    assert_eq!(copy.total_hours(), 20);
    assert_eq!(p.to_string(), "Project(dummy, 10h)");
}

#[test]
fn test_add_hours_beyond_i64() {
    let mut p = Project::new(ProjectId(0), "dummy", 150);
    p.add_hours("Alice", i64::MAX);
    p.add_hours("Bob", 1);
    p.add_hours("Alice", i64::MAX);
    assert_eq!(p.total_hours(), 2 * Hours::from(i64::MAX) + 1);
    assert_eq!(p.hours_of("Alice"), Some(2 * Hours::from(i64::MAX)));
    assert_eq!(p.employees().values().sum::<Hours>(), p.total_hours());
    assert!(p.is_over_budget());
}
