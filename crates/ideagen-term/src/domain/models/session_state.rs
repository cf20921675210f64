use ideagen_client::AgentMessage;

use super::FormInput;
use super::Step;

/// Everything the client knows during one run of the program.
///
/// Setters never validate. Whether a step may be shown is decided by the
/// navigation gate, not by this storage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    form: FormInput,
    is_generating: bool,
    conversations: Vec<AgentMessage>,
    final_document: String,
    step: Step,
}

impl SessionState {
    pub fn new(form: FormInput) -> SessionState {
        return SessionState {
            form,
            ..Default::default()
        };
    }

    pub fn form(&self) -> &FormInput {
        return &self.form;
    }

    pub fn set_form(&mut self, form: FormInput) {
        self.form = form;
    }

    pub fn is_generating(&self) -> bool {
        return self.is_generating;
    }

    pub fn set_generating(&mut self, is_generating: bool) {
        self.is_generating = is_generating;
    }

    pub fn conversations(&self) -> &[AgentMessage] {
        return &self.conversations;
    }

    pub fn set_conversations(&mut self, conversations: Vec<AgentMessage>) {
        self.conversations = conversations;
    }

    pub fn final_document(&self) -> &str {
        return &self.final_document;
    }

    pub fn set_final_document(&mut self, final_document: String) {
        self.final_document = final_document;
    }

    pub fn step(&self) -> Step {
        return self.step;
    }

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }
}
