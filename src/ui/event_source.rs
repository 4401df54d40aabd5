use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::{
    domain::events::{AppEvent, KeyInput, ScrollDirection},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal input plus events posted by background tasks. Background events
/// are drained first so a finished fetch shows up on the next frame.
pub struct CrosstermEventSource {
    background_rx: Option<Receiver<AppEvent>>,
}

impl CrosstermEventSource {
    pub fn new(background_rx: Receiver<AppEvent>) -> Self {
        Self {
            background_rx: Some(background_rx),
        }
    }

    fn next_background_event(&mut self) -> Option<AppEvent> {
        let rx = self.background_rx.as_ref()?;
        match rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::debug!("background event channel closed");
                self.background_rx = None;
                None
            }
        }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(event) = self.next_background_event() {
            return Ok(Some(event));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        Ok(match event::read()? {
            Event::Key(key) => map_key_event(key),
            Event::Mouse(mouse) => map_mouse_event(mouse),
            _ => None,
        })
    }
}

fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

fn map_mouse_event(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(AppEvent::Scroll(ScrollDirection::Up)),
        MouseEventKind::ScrollDown => Some(AppEvent::Scroll(ScrollDirection::Down)),
        _ => None,
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn chars_and_named_keys_become_input_keys() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(AppEvent::InputKey(KeyInput::new("q", false)))
        );
        assert_eq!(
            map_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AppEvent::InputKey(KeyInput::new("esc", false)))
        );
        assert_eq!(map_key_event(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn left_click_and_wheel_are_mapped() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(AppEvent::Click { column: 7, row: 3 })
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::ScrollDown)),
            Some(AppEvent::Scroll(ScrollDirection::Down))
        );
        assert_eq!(map_mouse_event(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn background_events_are_drained_before_terminal_input() {
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::ConversationFetchFailed)
            .expect("send should succeed");
        drop(tx);
        let mut source = CrosstermEventSource::new(rx);

        assert_eq!(
            source.next_background_event(),
            Some(AppEvent::ConversationFetchFailed)
        );
        assert_eq!(source.next_background_event(), None);
        assert!(source.background_rx.is_none());
    }

    #[test]
    fn mock_source_replays_events_in_order() {
        let mut source = MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(source.next_event().expect("mock"), Some(AppEvent::Tick));
        assert_eq!(
            source.next_event().expect("mock"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("mock"), None);
    }
}
