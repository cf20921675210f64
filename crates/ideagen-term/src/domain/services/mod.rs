mod actions;
mod controller;
mod events;
pub mod formatter;
mod navigation;

pub use actions::*;
pub use controller::*;
pub use events::*;
pub use navigation::*;
