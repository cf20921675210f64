//! Core domain logic for the terminal client.
//!
//! This module contains the session state, the controller that drives a
//! submission, navigation gating and the message formatter, independent of
//! the terminal or the network.

pub mod models;
pub mod services;
