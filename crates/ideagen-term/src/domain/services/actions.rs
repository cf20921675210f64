use anyhow::Result;
use ideagen_client::GenerateRequest;
use ideagen_client::GenerationClientRef;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Notification;

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- F1 / F2 / F3 - Show the idea form, the agent conversation, or the final document.
- Enter - Submit the idea (idea form).
- CTRL+O - Insert a line break in the idea.
- CTRL+T - Switch team.
- n - Generate a new idea (conversation and document views).
- c / r - Jump to the conversation / final document.
- Up/Down, CTRL+U/CTRL+D - Scroll.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

async fn generate(
    client: GenerationClientRef,
    request: GenerateRequest,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let outcome = client.generate(request).await;
    event_tx.send(Event::GenerationCompleted(outcome))?;

    return Ok(());
}

async fn health_check(
    client: GenerationClientRef,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    if let Err(err) = client.health_check().await {
        tracing::warn!(error = %err, "generation service is not reachable");
        event_tx.send(Event::Notification(Notification::warning(&format!(
            "Hey, it looks like the generation service isn't reachable. Submissions may fail until it is.\n\nError: {err}"
        ))))?;
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        client: GenerationClientRef,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            let worker_client = client.clone();
            let worker_event_tx = event_tx.clone();
            match action {
                Action::HealthCheck => {
                    tokio::spawn(async move {
                        return health_check(worker_client, &worker_event_tx).await;
                    });
                }
                Action::GenerationRequest(request) => {
                    tokio::spawn(async move {
                        return generate(worker_client, request, &worker_event_tx).await;
                    });
                }
            }
        }

        return Ok(());
    }
}
