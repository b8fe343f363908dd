#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod core;

pub mod cli;
pub use cli::run;
