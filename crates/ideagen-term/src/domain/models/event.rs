use ideagen_client::ClientError;
use ideagen_client::GenerationResult;
use tui_textarea::Input;

use super::Notification;
use super::Step;

#[derive(Debug)]
pub enum Event {
    GenerationCompleted(Result<GenerationResult, ClientError>),
    Notification(Notification),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardCTRLO,
    KeyboardCTRLT,
    KeyboardEnter,
    KeyboardPaste(String),
    SelectStep(Step),
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
