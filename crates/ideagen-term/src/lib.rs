//! Terminal front end for the idea generation service.
//!
//! This crate collects a team and an idea, submits them to the generation
//! service, and shows the agents' conversation and the final document on
//! three gated views. It also renders the same content as plain text for
//! non-interactive use.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, DisplayBlock, Event, FormInput, Notification, NotificationKind, SessionState, Step,
};
pub use domain::services::formatter;
pub use domain::services::{GenerationFailure, NavigationError, ViewController};
pub use infrastructure::clients::GenerationClientManager;
