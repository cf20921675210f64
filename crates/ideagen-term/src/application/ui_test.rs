use std::sync::Arc;

use async_trait::async_trait;
use ideagen_client::AgentMessage;
use ideagen_client::ClientError;
use ideagen_client::GenerateRequest;
use ideagen_client::GenerationClient;
use ideagen_client::GenerationResult;
use ratatui::backend::TestBackend;

use super::*;
use crate::domain::models::FormInput;

struct OfflineClient;

#[async_trait]
impl GenerationClient for OfflineClient {
    async fn generate(&self, _request: GenerateRequest) -> Result<GenerationResult, ClientError> {
        return Err(ClientError::UnexpectedStatus(503));
    }

    async fn health_check(&self) -> Result<(), ClientError> {
        return Ok(());
    }
}

fn controller() -> (ViewController, mpsc::UnboundedReceiver<Event>) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let controller = ViewController::new(Arc::new(OfflineClient), event_tx, Team::HR);
    return (controller, event_rx);
}

fn key(c: char) -> Event {
    return Event::KeyboardCharInput(Input {
        key: Key::Char(c),
        ..Default::default()
    });
}

fn with_result(controller: &mut ViewController) {
    controller.begin_submission(FormInput::new(Team::HR, "Mentoring circles"));
    controller
        .complete_submission(Ok(GenerationResult {
            conversations: vec![AgentMessage::new("Coach", "**Pairs**\n1. Seniors")],
            final_document: "Mentoring plan".to_string(),
        }))
        .unwrap();
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    return buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| return row.iter().map(|cell| return cell.symbol()).collect::<String>())
        .collect::<Vec<String>>()
        .join("\n");
}

#[test]
fn it_sends_one_request_and_ignores_enter_while_generating() {
    let (mut controller, _event_rx) = controller();
    let mut view = ViewState::new();
    view.textarea.insert_str("Solar kiosks");

    match handle_event(&mut controller, &mut view, Event::KeyboardEnter) {
        Some(Action::GenerationRequest(request)) => {
            assert_eq!(request, GenerateRequest::new(Team::HR, "Solar kiosks"));
        }
        other => panic!("expected a generation request, got {other:?}"),
    }
    assert!(controller.state().is_generating());

    assert!(handle_event(&mut controller, &mut view, Event::KeyboardEnter).is_none());
    assert!(handle_event(&mut controller, &mut view, key('x')).is_none());
    assert_eq!(view.idea(), "Solar kiosks");
    assert!(controller.state().is_generating());
}

#[test]
fn it_refuses_a_blank_idea_with_a_notice() {
    let (mut controller, _event_rx) = controller();
    let mut view = ViewState::new();
    view.textarea.insert_str("   ");

    assert!(handle_event(&mut controller, &mut view, Event::KeyboardEnter).is_none());
    assert!(!controller.state().is_generating());
    assert_eq!(
        view.notification.as_ref().map(|n| return n.kind),
        Some(NotificationKind::Info)
    );

    // The next key only dismisses the notice.
    assert!(handle_event(&mut controller, &mut view, key('a')).is_none());
    assert!(view.notification.is_none());
    assert_eq!(view.idea(), "   ");
}

#[test]
fn it_returns_to_the_form_keeping_results() {
    let (mut controller, _event_rx) = controller();
    let mut view = ViewState::new();
    with_result(&mut controller);
    assert_eq!(controller.state().step(), Step::Communication);

    handle_event(&mut controller, &mut view, key('r'));
    assert_eq!(controller.state().step(), Step::Result);

    handle_event(&mut controller, &mut view, key('n'));
    assert_eq!(controller.state().step(), Step::Form);
    assert_eq!(controller.state().conversations().len(), 1);
    assert_eq!(controller.state().final_document(), "Mentoring plan");
}

#[test]
fn it_rejects_views_without_data() {
    let (mut controller, _event_rx) = controller();
    let mut view = ViewState::new();

    handle_event(&mut controller, &mut view, Event::SelectStep(Step::Communication));
    assert_eq!(controller.state().step(), Step::Form);
    handle_event(&mut controller, &mut view, Event::SelectStep(Step::Result));
    assert_eq!(controller.state().step(), Step::Form);

    with_result(&mut controller);
    handle_event(&mut controller, &mut view, Event::SelectStep(Step::Result));
    assert_eq!(controller.state().step(), Step::Result);
}

#[test]
fn it_applies_a_failed_generation() {
    let (mut controller, mut event_rx) = controller();
    let mut view = ViewState::new();
    controller.begin_submission(FormInput::new(Team::Marketing, "Podcast"));

    let outcome = Err(ClientError::UnexpectedStatus(503));
    assert!(handle_event(&mut controller, &mut view, Event::GenerationCompleted(outcome)).is_none());
    assert!(!controller.state().is_generating());
    assert_eq!(controller.state().step(), Step::Form);

    let event = event_rx.try_recv().unwrap();
    handle_event(&mut controller, &mut view, event);
    assert_eq!(
        view.notification.map(|n| return n.kind),
        Some(NotificationKind::Error)
    );
}

#[test]
fn it_scrolls_to_the_last_wrapped_row() {
    let document = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima \
                    mike november oscar papa ENDMARK";
    let mut terminal = Terminal::new(TestBackend::new(22, 6)).unwrap();
    let mut view = ViewState::new();
    view.scroll = u16::MAX;

    terminal
        .draw(|frame| {
            let area = frame.area();
            draw_scrollable(frame, area, "Final Document", Text::raw(document), &mut view);
        })
        .unwrap();

    assert!(view.scroll > 0);
    assert!(screen(&terminal).contains("ENDMARK"));
}

#[test]
fn it_keeps_short_documents_at_the_top() {
    let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
    let mut view = ViewState::new();
    view.scroll = 7;

    terminal
        .draw(|frame| {
            let area = frame.area();
            draw_scrollable(frame, area, "Final Document", Text::raw("Short plan"), &mut view);
        })
        .unwrap();

    assert_eq!(view.scroll, 0);
    assert!(screen(&terminal).contains("Short plan"));
}

#[test]
fn it_shows_a_long_error_in_full() {
    let text = format!(
        "Error: {} ENDMARK",
        "the generation service could not complete the request ".repeat(4)
    );
    let notification = Notification::error(&text);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    terminal
        .draw(|frame| draw_notification(frame, &notification))
        .unwrap();

    assert!(screen(&terminal).contains("ENDMARK"));
}
