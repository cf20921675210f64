use strum_macros::{Display, EnumIter};

/// The three mutually exclusive views of the client.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Step {
    #[default]
    #[strum(serialize = "Idea Generation")]
    Form,
    #[strum(serialize = "Agent Conversation")]
    Communication,
    #[strum(serialize = "Final Document")]
    Result,
}
