use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;
use crate::domain::models::Step;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp);
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown);
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let key = match keyevent.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    KeyCode::PageUp => Key::PageUp,
                    KeyCode::PageDown => Key::PageDown,
                    KeyCode::Tab => Key::Tab,
                    KeyCode::Delete => Key::Delete,
                    KeyCode::F(n) => Key::F(n),
                    KeyCode::Backspace => Key::Backspace,
                    KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                let input = Input {
                    key,
                    ctrl: keyevent.modifiers.contains(KeyModifiers::CONTROL),
                    alt: keyevent.modifiers.contains(KeyModifiers::ALT),
                    shift: keyevent.modifiers.contains(KeyModifiers::SHIFT),
                };
                return Some(map_input(input));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

fn map_input(input: Input) -> Event {
    match input {
        Input { key: Key::F(1), .. } => {
            return Event::SelectStep(Step::Form);
        }
        Input { key: Key::F(2), .. } => {
            return Event::SelectStep(Step::Communication);
        }
        Input { key: Key::F(3), .. } => {
            return Event::SelectStep(Step::Result);
        }
        Input { key: Key::Down, .. } => {
            return Event::UIScrollDown;
        }
        Input { key: Key::Up, .. } => {
            return Event::UIScrollUp;
        }
        Input {
            key: Key::PageDown, ..
        } => {
            return Event::UIScrollPageDown;
        }
        Input {
            key: Key::PageUp, ..
        } => {
            return Event::UIScrollPageUp;
        }
        Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => {
            return Event::UIScrollPageDown;
        }
        Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => {
            return Event::UIScrollPageUp;
        }
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLC;
        }
        Input {
            key: Key::Char('o'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLO;
        }
        Input {
            key: Key::Char('t'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLT;
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Event::KeyboardEnter;
        }
        input => {
            return Event::KeyboardCharInput(input);
        }
    }
}
