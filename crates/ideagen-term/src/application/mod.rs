//! Application layer running the terminal interface.
//!
//! This module owns the terminal, the render loop, and the plain-text output
//! used when running without a UI.

pub mod output;
pub mod ui;
mod widgets;
