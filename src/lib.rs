//! Track hours logged by employees on projects, detect projects going over
//! their budget, and suggest reassignments to balance the workload.

pub mod config;
pub mod display;
pub mod loaders;
pub mod model;
pub mod stats;
