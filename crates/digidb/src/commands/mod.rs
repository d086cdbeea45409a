//! CLI command implementations.

pub mod list;
pub mod moves;
pub mod show;
