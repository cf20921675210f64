#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

use ideagen_client::ClientError;
use ideagen_client::GenerateRequest;
use ideagen_client::GenerationClientRef;
use ideagen_client::GenerationResult;
use ideagen_client::Team;
use thiserror::Error;
use tokio::sync::mpsc;

use super::navigation;
use super::NavigationError;
use crate::domain::models::Event;
use crate::domain::models::FormInput;
use crate::domain::models::Notification;
use crate::domain::models::SessionState;
use crate::domain::models::Step;

/// Why a submission produced no result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    #[error("Error: {0}")]
    Application(String),
    #[error("Error: {0}")]
    Transport(String),
}

impl GenerationFailure {
    /// The failure text without the "Error: " prefix shown to users.
    pub fn message(&self) -> &str {
        return match self {
            GenerationFailure::Application(message) | GenerationFailure::Transport(message) => {
                message
            }
        };
    }
}

impl From<ClientError> for GenerationFailure {
    fn from(err: ClientError) -> Self {
        return match err {
            ClientError::Application(message) => GenerationFailure::Application(message),
            other => GenerationFailure::Transport(other.to_string()),
        };
    }
}

/// Sole owner and writer of the session state.
pub struct ViewController {
    client: GenerationClientRef,
    event_tx: mpsc::UnboundedSender<Event>,
    state: SessionState,
}

impl ViewController {
    pub fn new(
        client: GenerationClientRef,
        event_tx: mpsc::UnboundedSender<Event>,
        default_team: Team,
    ) -> ViewController {
        return ViewController {
            client,
            event_tx,
            state: SessionState::new(FormInput::new(default_team, "")),
        };
    }

    pub fn state(&self) -> &SessionState {
        return &self.state;
    }

    pub fn set_idea(&mut self, idea: &str) {
        let team = self.state.form().team;
        self.state.set_form(FormInput::new(team, idea));
    }

    pub fn cycle_team(&mut self) {
        let mut form = self.state.form().clone();
        form.team = form.team.next();
        self.state.set_form(form);
    }

    /// Issues exactly one request for `form` and applies its outcome.
    pub async fn submit(&mut self, form: FormInput) -> Result<GenerationResult, GenerationFailure> {
        let request = self.begin_submission(form);
        let outcome = self.client.generate(request).await;
        return self.complete_submission(outcome);
    }

    /// First half of a submission: drop stale results and enter the in-flight state.
    pub fn begin_submission(&mut self, form: FormInput) -> GenerateRequest {
        self.state.set_conversations(vec![]);
        self.state.set_final_document(String::new());
        self.state.set_generating(true);
        self.state.set_step(Step::Form);

        let request = form.to_request();
        self.state.set_form(form);

        return request;
    }

    /// Second half of a submission. Always leaves the in-flight state.
    pub fn complete_submission(
        &mut self,
        outcome: Result<GenerationResult, ClientError>,
    ) -> Result<GenerationResult, GenerationFailure> {
        self.state.set_generating(false);

        match outcome {
            Ok(result) => {
                self.state.set_conversations(result.conversations.clone());
                self.state.set_final_document(result.final_document.clone());
                self.state.set_step(Step::Communication);
                return Ok(result);
            }
            Err(err) => {
                let failure = GenerationFailure::from(err);
                tracing::error!(error = %failure, "generation failed");

                self.state.set_step(Step::Form);
                self.notify(Notification::error(&failure.to_string()));
                return Err(failure);
            }
        }
    }

    pub fn is_selectable(&self, step: Step) -> bool {
        return navigation::is_selectable(step, &self.state);
    }

    pub fn selectable_steps(&self) -> Vec<(Step, bool)> {
        return navigation::selectable_steps(&self.state);
    }

    /// Switches the visible step. Never touches data or issues requests.
    pub fn select_step(&mut self, step: Step) -> Result<(), NavigationError> {
        if !self.is_selectable(step) {
            tracing::debug!(step = %step, "navigation rejected");
            return Err(NavigationError::Unavailable(step));
        }

        self.state.set_step(step);
        return Ok(());
    }

    /// "Generate New Idea": back to the form, previous results kept.
    pub fn start_new_idea(&mut self) {
        self.state.set_step(Step::Form);
    }

    fn notify(&self, notification: Notification) {
        if let Err(err) = self.event_tx.send(Event::Notification(notification)) {
            tracing::warn!(error = %err, "notification dropped");
        }
    }
}
