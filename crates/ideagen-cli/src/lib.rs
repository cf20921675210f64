//! Command-line entry point for the idea generation client
//!
//! The `ideagen` binary either opens the terminal UI or, in task mode, submits
//! a single idea and prints the agents' conversation and the final document to
//! stdout so the output can be piped or saved.

pub mod task;
