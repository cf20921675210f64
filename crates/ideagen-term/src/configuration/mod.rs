//! Configuration management for the terminal client.
//!
//! Values come from built-in defaults, an optional TOML file, and finally
//! command-line flags or environment variables, in that order of precedence.

mod config;

pub use config::*;
