//! CLI and IO Layer
//!
//! Reads LSIF dumps from disk, hands their lines to the core and prints what
//! comes back.

pub mod cli;
pub mod commands;

pub use cli::Cli;
