#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ideagen_client::GenerationClientRef;
use ideagen_client::Team;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use super::widgets;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Notification;
use crate::domain::models::NotificationKind;
use crate::domain::models::Step;
use crate::domain::services::ActionsService;
use crate::domain::services::EventsService;
use crate::domain::services::ViewController;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const PAGE_SIZE: u16 = 10;

/// Terminal-only state that the session does not care about.
struct ViewState<'a> {
    textarea: TextArea<'a>,
    scroll: u16,
    notification: Option<Notification>,
    tick: usize,
}

impl<'a> ViewState<'a> {
    fn new() -> ViewState<'a> {
        let mut textarea = TextArea::default();
        textarea.set_block(Block::bordered().title("Your Idea"));
        textarea.set_placeholder_text("Describe the idea you want the agents to work on...");
        textarea.set_cursor_line_style(Style::default());

        return ViewState {
            textarea,
            scroll: 0,
            notification: None,
            tick: 0,
        };
    }

    fn idea(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll = u16::try_from(next).unwrap_or_default();
    }
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().ok();
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )
    .ok();
}

pub async fn start_loop(client: GenerationClientRef, default_team: Team) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let res = run(&mut terminal, client, default_team).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return res;
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: GenerationClientRef,
    default_team: Team,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let actions_client = client.clone();
    let actions_event_tx = event_tx.clone();
    tokio::spawn(async move {
        return ActionsService::start(actions_client, actions_event_tx, &mut action_rx).await;
    });
    action_tx.send(Action::HealthCheck)?;

    let mut events = EventsService::new(event_rx);
    let mut controller = ViewController::new(client, event_tx, default_team);
    let mut view = ViewState::new();

    loop {
        terminal.draw(|frame| draw(frame, &controller, &mut view))?;

        let event = events.next().await?;
        if matches!(event, Event::KeyboardCTRLC) {
            break;
        }

        if let Some(action) = handle_event(&mut controller, &mut view, event) {
            action_tx.send(action)?;
        }
    }

    return Ok(());
}

/// Applies one event to the session and the view. Returns the work the
/// actions service has to pick up, if any.
fn handle_event(
    controller: &mut ViewController,
    view: &mut ViewState,
    event: Event,
) -> Option<Action> {
    if view.notification.is_some() && is_keyboard(&event) {
        view.notification = None;
        return None;
    }

    let step = controller.state().step();
    let editing = step == Step::Form && !controller.state().is_generating();

    match event {
        Event::GenerationCompleted(outcome) => {
            if controller.complete_submission(outcome).is_ok() {
                view.scroll = 0;
            }
        }
        Event::Notification(notification) => {
            view.notification = Some(notification);
        }
        Event::SelectStep(target) => {
            if controller.select_step(target).is_ok() {
                view.scroll = 0;
            }
        }
        Event::KeyboardEnter if editing => {
            controller.set_idea(&view.idea());
            let form = controller.state().form().clone();
            if !form.is_submittable() {
                view.notification = Some(Notification::new(
                    NotificationKind::Info,
                    "Please describe your idea before submitting.",
                ));
                return None;
            }

            let request = controller.begin_submission(form);
            return Some(Action::GenerationRequest(request));
        }
        Event::KeyboardCTRLO if editing => {
            view.textarea.insert_newline();
        }
        Event::KeyboardCTRLT if editing => {
            controller.cycle_team();
        }
        Event::KeyboardPaste(text) if editing => {
            view.textarea.insert_str(text);
            controller.set_idea(&view.idea());
        }
        Event::KeyboardCharInput(input) if editing => {
            view.textarea.input(input);
            controller.set_idea(&view.idea());
        }
        Event::KeyboardCharInput(input) if step != Step::Form => match input.key {
            Key::Char('n') => {
                controller.start_new_idea();
            }
            Key::Char('c') => {
                if controller.select_step(Step::Communication).is_ok() {
                    view.scroll = 0;
                }
            }
            Key::Char('r') => {
                if controller.select_step(Step::Result).is_ok() {
                    view.scroll = 0;
                }
            }
            _ => {}
        },
        Event::UIScrollUp if editing => {
            view.textarea.input(arrow(Key::Up));
        }
        Event::UIScrollDown if editing => {
            view.textarea.input(arrow(Key::Down));
        }
        Event::UIScrollUp => view.scroll_by(-1),
        Event::UIScrollDown => view.scroll_by(1),
        Event::UIScrollPageUp => view.scroll_by(-i32::from(PAGE_SIZE)),
        Event::UIScrollPageDown => view.scroll_by(i32::from(PAGE_SIZE)),
        Event::UITick => {
            view.tick = view.tick.wrapping_add(1);
        }
        _ => {}
    }

    return None;
}

fn is_keyboard(event: &Event) -> bool {
    return matches!(
        event,
        Event::KeyboardCharInput(_)
            | Event::KeyboardCTRLO
            | Event::KeyboardCTRLT
            | Event::KeyboardEnter
            | Event::SelectStep(_)
    );
}

fn arrow(key: Key) -> Input {
    return Input {
        key,
        ..Default::default()
    };
}

fn draw(frame: &mut Frame, controller: &ViewController, view: &mut ViewState) {
    let [header_area, tabs_area, body_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header = Paragraph::new(Line::from(Span::styled(
        " AI Idea Generation",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().fg(Color::White).bg(widgets::ACCENT));
    frame.render_widget(header, header_area);

    let state = controller.state();
    let selected = Step::iter()
        .position(|step| return step == state.step())
        .unwrap_or_default();
    let tabs = Tabs::new(widgets::tab_titles(&controller.selectable_steps()))
        .select(selected)
        .block(Block::bordered())
        .highlight_style(
            Style::default()
                .fg(widgets::ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, tabs_area);

    match state.step() {
        Step::Form => draw_form(frame, body_area, controller, view),
        Step::Communication => {
            let lines = widgets::conversation_lines(state.conversations());
            draw_scrollable(frame, body_area, "Agent Conversation", Text::from(lines), view);
        }
        Step::Result => {
            let text = Text::raw(state.final_document().to_string());
            draw_scrollable(frame, body_area, "Final Document", text, view);
        }
    }

    let help = match state.step() {
        Step::Form if state.is_generating() => " Ctrl+C quit",
        Step::Form => " Enter submit idea  Ctrl+O new line  Ctrl+T team  F1-F3 views  Ctrl+C quit",
        Step::Communication => {
            " n generate new idea  r final document  ↑↓ scroll  F1-F3 views  Ctrl+C quit"
        }
        Step::Result => " n generate new idea  c conversation  ↑↓ scroll  F1-F3 views  Ctrl+C quit",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(help, Style::default().fg(Color::DarkGray))),
        help_area,
    );

    if let Some(notification) = &view.notification {
        draw_notification(frame, notification);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, controller: &ViewController, view: &ViewState) {
    let state = controller.state();

    if state.is_generating() {
        let spinner = SPINNER[view.tick % SPINNER.len()];
        let working = Paragraph::new(vec![
            Line::default(),
            Line::styled(
                format!("{spinner} AI Agents are Working..."),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::default(),
            Line::styled(
                "Our team of AI agents is collaborating on your idea. This may take a few moments.",
                Style::default().fg(Color::Gray),
            )
            .centered(),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title("New Idea"));
        frame.render_widget(working, area);
        return;
    }

    let [team_area, idea_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let team = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("< {} >", state.form().team),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Ctrl+T to change", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::bordered().title("Select Team"));
    frame.render_widget(team, team_area);
    frame.render_widget(&view.textarea, idea_area);
}

fn draw_scrollable(frame: &mut Frame, area: Rect, title: &str, text: Text, view: &mut ViewState) {
    let block = Block::bordered().title(title.to_string());
    let inner = block.inner(area);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });

    // Wrapped rows, not source lines, decide how far the view can move.
    let max_scroll = paragraph
        .line_count(inner.width)
        .saturating_sub(usize::from(inner.height));
    view.scroll = view
        .scroll
        .min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    frame.render_widget(paragraph.scroll((view.scroll, 0)).block(block), area);
}

fn draw_notification(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let width = area.width.saturating_sub(4).min(70);
    let paragraph = Paragraph::new(notification.text.clone()).wrap(Wrap { trim: false });
    let rows = u16::try_from(paragraph.line_count(width.saturating_sub(2))).unwrap_or(u16::MAX);
    let height = rows.saturating_add(2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    };

    let paragraph = paragraph.block(
        Block::bordered()
            .title(notification.kind.to_string())
            .title_bottom(" press any key ")
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
