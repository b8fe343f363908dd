pub mod aggregator;
pub mod config;
pub mod decode;
pub mod directory;
pub mod legend;
pub mod model;
pub mod notification;
pub mod state;

pub use aggregator::{aggregate, Grid};
pub use directory::{DirectoryError, TeamDirectory, TeamLookup};
pub use notification::should_notify;

#[cfg(test)]
mod scenario_test;
