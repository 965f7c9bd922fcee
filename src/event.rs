use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

/// Terminal input the app reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Click { column: u16, row: u16 },
}

pub fn poll_event(timeout: Duration) -> color_eyre::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn next_input(timeout: Duration) -> color_eyre::Result<Option<Input>> {
    loop {
        match poll_event(timeout)? {
            Some(event) => {
                if let Some(input) = to_input(event) {
                    return Ok(Some(input));
                }
            }
            None => return Ok(None),
        }
    }
}

fn to_input(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Input::Key(key)),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(Input::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers, MouseEvent};

    use super::*;

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn left_press_becomes_click() {
        assert_eq!(
            to_input(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Input::Click { column: 4, row: 7 })
        );
        assert_eq!(to_input(mouse(MouseEventKind::Moved)), None);
        assert_eq!(to_input(mouse(MouseEventKind::Down(MouseButton::Right))), None);
    }

    #[test]
    fn key_releases_are_dropped() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(to_input(Event::Key(key)), Some(Input::Key(key)));
        key.kind = KeyEventKind::Release;
        assert_eq!(to_input(Event::Key(key)), None);
        assert_eq!(to_input(Event::FocusGained), None);
    }
}
