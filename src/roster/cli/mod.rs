//! # CLI Layer
//!
//! One possible UI client for roster. This is the only place that:
//! - parses arguments
//! - asks the user to confirm unusual ages and deletions
//! - writes to stdout/stderr and decides exit codes
//!
//! Everything else goes through `RosterApi`.

mod commands;
mod prompt;
mod render;
mod setup;

pub use commands::run;
