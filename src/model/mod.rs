pub use self::project::{BudgetStatus, Hours, Project, ProjectId};
pub use self::suggestion::Suggestion;
pub use self::tracker::{DEFAULT_BUDGET, Field, Tracker};

mod project;
mod suggestion;
mod tracker;
