mod action;
mod display_block;
mod event;
mod form;
mod notification;
mod session_state;
mod step;

pub use action::*;
pub use display_block::*;
pub use event::*;
pub use form::*;
pub use notification::*;
pub use session_state::*;
pub use step::*;
