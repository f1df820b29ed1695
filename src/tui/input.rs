use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pass::Category;
use crate::settings::{LENGTH_MAX, LENGTH_MIN};

/// What a key press asks the panel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Step(isize),
    SetLength(usize),
    Toggle(Category),
    Generate,
    Copy,
    Help,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Action::Step(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Action::Step(1),
        KeyCode::Home => Action::SetLength(LENGTH_MIN),
        KeyCode::End => Action::SetLength(LENGTH_MAX),
        KeyCode::Char('1') => Action::Toggle(Category::Uppercase),
        KeyCode::Char('2') => Action::Toggle(Category::Lowercase),
        KeyCode::Char('3') => Action::Toggle(Category::Digit),
        KeyCode::Char('4') => Action::Toggle(Category::Symbol),
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('?') => Action::Help,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slider_keys() {
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Step(-1)));
        assert_eq!(action_for(press(KeyCode::Char('l'))), Some(Action::Step(1)));
        assert_eq!(action_for(press(KeyCode::End)), Some(Action::SetLength(LENGTH_MAX)));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('c'))), Some(Action::Copy));
    }

    #[test]
    fn number_keys_toggle_categories() {
        assert_eq!(
            action_for(press(KeyCode::Char('4'))),
            Some(Action::Toggle(Category::Symbol))
        );
        assert_eq!(action_for(press(KeyCode::Char('5'))), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }
}
