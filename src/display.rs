use crate::model::{Suggestion, Tracker};
use crate::stats;

pub fn display_summary(tracker: &Tracker) {
    println!("Project summary:");
    for summary in tracker.project_summaries() {
        println!("  - {summary}");
    }
}

pub fn suggestion_text(suggestion: Option<&Suggestion>) -> String {
    match suggestion {
        Some(s) if s.is_self_move() => format!(
            "Suggestion: move employee \"{}\" out of {} (no less loaded project)",
            s.employee, s.from
        ),
        Some(s) => format!(
            "Suggestion: move employee \"{}\" from {} to {}",
            s.employee, s.from, s.to
        ),
        None => "All projects are within budget".to_owned(),
    }
}

pub fn display_suggestion(tracker: &Tracker) {
    println!("{}", suggestion_text(tracker.suggest_reassignment().as_ref()));
}

pub fn display_sorted(tracker: &Tracker) {
    println!("Sorted by workload (high to low):");
    for (name, hours) in tracker.sorted_projects() {
        println!("  - {name}: {hours}h");
    }
}

pub fn display_comparison(tracker: &Tracker) {
    if let [p1, p2, ..] = tracker.projects() {
        if let Some(greater) = tracker.compare(&p1.name, &p2.name) {
            println!("{} has more hours than {}? {}", p1.name, p2.name, greater);
        }
    }
}

pub fn display_details(tracker: &Tracker) {
    println!("Project details:");
    for details in stats::project_details(tracker) {
        let mut employees = details.employees.into_iter().collect::<Vec<_>>();
        employees.sort();
        print!(
            "  - {}: {}h - Status: {}",
            details.name, details.total_hours, details.status
        );
        for (employee, hours) in employees {
            print!(" [{employee}: {hours}h]");
        }
        println!();
    }
}

pub fn display_exceeded(tracker: &Tracker) {
    let exceeded = stats::exceeded_projects(tracker);
    if exceeded.is_empty() {
        println!("Projects exceeding budget: none");
    } else {
        println!("Projects exceeding budget:");
        for name in exceeded {
            println!("  - {name}");
        }
    }
}

pub fn display_snapshot(tracker: &Tracker) {
    let snapshot = tracker.snapshot();
    println!(
        "Snapshot saved: {}",
        snapshot
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
}

pub fn display_all(tracker: &Tracker) {
    if tracker.is_empty() {
        println!("No data available");
        return;
    }
    display_summary(tracker);
    println!();
    display_suggestion(tracker);
    println!();
    display_sorted(tracker);
    println!();
    display_comparison(tracker);
    display_details(tracker);
    println!();
    display_exceeded(tracker);
    println!();
    display_snapshot(tracker);
}

#[test]
fn test_suggestion_text() {
    let mut s = Suggestion {
        employee: "Alice".into(),
        from: "P1".into(),
        to: "P2".into(),
    };
    assert_eq!(
        suggestion_text(Some(&s)),
        "Suggestion: move employee \"Alice\" from P1 to P2"
    );
    s.to = "P1".into();
    assert_eq!(
        suggestion_text(Some(&s)),
        "Suggestion: move employee \"Alice\" out of P1 (no less loaded project)"
    );
    assert_eq!(suggestion_text(None), "All projects are within budget");
}
