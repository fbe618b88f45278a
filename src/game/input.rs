use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Flap,
    Quit,
}

/// Drain all pending terminal events and translate them into actions.
/// Called exactly once per frame; press events map straight to actions with
/// no state tracking. A mouse press counts as a flap.
pub fn poll_input(bindings: &KeyBindings) -> Result<Vec<InputAction>, std::io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if binding_matches(&bindings.quit, key.code) || key.code == KeyCode::Esc {
                    actions.push(InputAction::Quit);
                } else if binding_matches(&bindings.flap, key.code) {
                    actions.push(InputAction::Flap);
                }
            }
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Down(_)) {
                    actions.push(InputAction::Flap);
                }
            }
            _ => {}
        }
    }

    Ok(actions)
}

/// Match a configured key name ("Space", "Up", "Q", ...) against a key code.
/// Single characters compare case-insensitively.
pub fn binding_matches(binding: &str, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            if binding.eq_ignore_ascii_case("Space") {
                c == ' '
            } else {
                let mut chars = binding.chars();
                match (chars.next(), chars.next()) {
                    (Some(b), None) => b.eq_ignore_ascii_case(&c),
                    _ => false,
                }
            }
        }
        KeyCode::Up => binding.eq_ignore_ascii_case("Up"),
        KeyCode::Down => binding.eq_ignore_ascii_case("Down"),
        KeyCode::Left => binding.eq_ignore_ascii_case("Left"),
        KeyCode::Right => binding.eq_ignore_ascii_case("Right"),
        KeyCode::Enter => binding.eq_ignore_ascii_case("Enter"),
        KeyCode::Esc => binding.eq_ignore_ascii_case("Esc"),
        KeyCode::Tab => binding.eq_ignore_ascii_case("Tab"),
        KeyCode::Backspace => binding.eq_ignore_ascii_case("Backspace"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_bindings_are_case_insensitive() {
        assert!(binding_matches("q", KeyCode::Char('Q')));
        assert!(binding_matches("Q", KeyCode::Char('q')));
        assert!(!binding_matches("Q", KeyCode::Char('x')));
    }

    #[test]
    fn test_named_key_bindings() {
        assert!(binding_matches("Space", KeyCode::Char(' ')));
        assert!(binding_matches("Up", KeyCode::Up));
        assert!(binding_matches("Enter", KeyCode::Enter));
        assert!(!binding_matches("Up", KeyCode::Down));
    }

    #[test]
    fn test_multi_char_names_never_match_single_chars() {
        assert!(!binding_matches("Space", KeyCode::Char('s')));
        assert!(!binding_matches("Enter", KeyCode::Char('e')));
    }
}
