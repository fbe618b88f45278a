// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::io;
use std::time::Duration;

use super::state::{MenuItem, MenuState};

/// Menu action result
pub enum MenuAction {
    /// Continue in menu
    None,
    /// Start a game session
    StartGame,
    /// Exit application
    Quit,
}

/// Handle menu input and return the next action. Blocks for up to 100ms so
/// the menu does not spin the CPU while idle.
pub fn handle_menu_input(menu_state: &mut MenuState) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(handle_key_press(menu_state, key.code));
            }
            // A click anywhere starts the game, matching the original's
            // click-to-start button.
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                return Ok(MenuAction::StartGame);
            }
            _ => {}
        }
    }

    Ok(MenuAction::None)
}

fn handle_key_press(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            menu_state.select_previous();
            MenuAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            menu_state.select_next();
            MenuAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => match menu_state.selected_item() {
            MenuItem::Play => MenuAction::StartGame,
            MenuItem::Quit => MenuAction::Quit,
        },
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_on_play_starts_the_game() {
        let mut menu = MenuState::new();
        assert!(matches!(
            handle_key_press(&mut menu, KeyCode::Enter),
            MenuAction::StartGame
        ));
    }

    #[test]
    fn test_enter_on_quit_exits() {
        let mut menu = MenuState::new();
        menu.select_next();
        assert!(matches!(
            handle_key_press(&mut menu, KeyCode::Enter),
            MenuAction::Quit
        ));
    }

    #[test]
    fn test_q_quits_from_anywhere() {
        let mut menu = MenuState::new();
        assert!(matches!(
            handle_key_press(&mut menu, KeyCode::Char('q')),
            MenuAction::Quit
        ));
    }
}
