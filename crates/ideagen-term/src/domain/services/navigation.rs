use strum::IntoEnumIterator;
use thiserror::Error;

use crate::domain::models::SessionState;
use crate::domain::models::Step;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{0} is not available yet")]
    Unavailable(Step),
}

/// Whether `step` may be shown given the data currently held.
pub fn is_selectable(step: Step, state: &SessionState) -> bool {
    return match step {
        Step::Form => true,
        Step::Communication => !state.conversations().is_empty(),
        Step::Result => !state.final_document().is_empty(),
    };
}

/// Every step paired with its current availability, in tab order.
pub fn selectable_steps(state: &SessionState) -> Vec<(Step, bool)> {
    return Step::iter()
        .map(|step| (step, is_selectable(step, state)))
        .collect();
}
