use clap::Parser;
use hourtrack::config::Config;
use hourtrack::display;
use hourtrack::loaders::{demo_entries, load_entries_from_file, record_entries};
use hourtrack::model::Tracker;
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    #[arg(short, long)]
    /// Use FILE instead of hourtrack.toml
    config: Option<PathBuf>,
    #[arg(short, long)]
    /// Budget for projects whose first entry carries none
    budget: Option<i64>,
    #[arg(long)]
    /// Record the demonstration entries
    demo: bool,
    #[arg(short, action = clap::ArgAction::Count)]
    /// Set verbosity level
    verbosity: u8,
    /// CSV files with employee,project,hours[,budget] entries
    files: Vec<PathBuf>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
    let config = Config::load_or_default(options.config.as_deref())?;
    let default_budget = options.budget.unwrap_or(config.tracker.default_budget);
    let mut tracker = Tracker::new();
    if options.demo || options.files.is_empty() {
        info!("recording demonstration entries");
        record_entries(&mut tracker, &demo_entries(), default_budget);
    }
    for file in &options.files {
        let entries = load_entries_from_file(file)?;
        record_entries(&mut tracker, &entries, default_budget);
    }
    info!(projects = tracker.len(), "entries recorded");
    display::display_all(&tracker);
    Ok(())
}
