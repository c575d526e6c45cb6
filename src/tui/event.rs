use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::core::action::Action;

/// Translate a terminal event into the action it triggers, if any.
pub fn translate(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        },
        Event::Resize(width, height) => Some(Action::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<Action> {
    // Some terminals report releases and repeats too; only presses count
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (m, KeyCode::Char('c' | 'C')) if m.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(Action::InsertChar(c)),
        (_, KeyCode::Esc) => Some(Action::Quit),
        (_, KeyCode::Enter) => Some(Action::Submit),
        (_, KeyCode::Backspace) => Some(Action::Backspace),
        (_, KeyCode::Left) => Some(Action::CursorLeft),
        (_, KeyCode::Right) => Some(Action::CursorRight),
        (_, KeyCode::Up) => Some(Action::ScrollUp),
        (_, KeyCode::Down) => Some(Action::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_keybindings() {
        let none = KeyModifiers::NONE;
        assert_eq!(translate(&press(KeyCode::Enter, none)), Some(Action::Submit));
        assert_eq!(translate(&press(KeyCode::Esc, none)), Some(Action::Quit));
        assert_eq!(translate(&press(KeyCode::Backspace, none)), Some(Action::Backspace));
        assert_eq!(translate(&press(KeyCode::Left, none)), Some(Action::CursorLeft));
        assert_eq!(translate(&press(KeyCode::Right, none)), Some(Action::CursorRight));
        assert_eq!(translate(&press(KeyCode::Up, none)), Some(Action::ScrollUp));
        assert_eq!(translate(&press(KeyCode::Down, none)), Some(Action::ScrollDown));
    }

    #[test]
    fn test_printable_chars_insert() {
        assert_eq!(
            translate(&press(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::InsertChar('x'))
        );
        assert_eq!(
            translate(&press(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            Some(Action::InsertChar('X'))
        );
    }

    #[test]
    fn test_ctrl_c_quits_other_chords_ignored() {
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(translate(&press(KeyCode::Char('r'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate(&press(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_ctrl_shift_c_quits() {
        let chord = KeyModifiers::CONTROL | KeyModifiers::SHIFT;
        assert_eq!(translate(&press(KeyCode::Char('C'), chord)), Some(Action::Quit));
        assert_eq!(translate(&press(KeyCode::Char('c'), chord)), Some(Action::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release), None);
    }

    #[test]
    fn test_resize_and_mouse_wheel() {
        assert_eq!(
            translate(&Event::Resize(100, 30)),
            Some(Action::Resize { width: 100, height: 30 })
        );
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&wheel), Some(Action::ScrollDown));
    }
}
