//! CLI subcommand implementations.

pub mod clean;
pub mod doctor;
pub mod plan;
pub mod target;
