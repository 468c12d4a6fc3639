//! CLI command implementations

pub mod definition;
pub mod parse;
pub mod rank;

pub use definition::{Cli, Commands};
