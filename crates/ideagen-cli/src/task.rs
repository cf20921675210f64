use anyhow::{bail, Result};
use ideagen_client::GenerationClientRef;
use ideagen_term::application::output;
use ideagen_term::{Event, FormInput, ViewController};
use tokio::sync::mpsc;

/// Submit one idea and return the plain-text report
pub async fn run_task(client: GenerationClientRef, form: FormInput) -> Result<String> {
    if !form.is_submittable() {
        bail!("Task mode requires an idea. Use --idea \"your idea here\"");
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
    let mut controller = ViewController::new(client, event_tx, form.team);

    match controller.submit(form).await {
        Ok(result) => Ok(output::render_result(&result)),
        Err(failure) => {
            while let Ok(event) = event_rx.try_recv() {
                if let Event::Notification(notification) = event {
                    log::error!("{}", notification.text);
                }
            }
            // main prefixes the error with "Error: " already.
            bail!("{}", failure.message())
        }
    }
}
