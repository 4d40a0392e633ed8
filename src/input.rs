//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`].
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist).
//! 2. Add a `KeyCode` match arm in [`handle_key_event`] that calls it.
//! 3. Update the help text in [`crate::ui`]'s status line.
//! 4. If the action touches the carousel, return the [`Effect`] it produced
//!    so the main loop can stop or restart the timers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, Effect};
use crate::rotation::RotationMsg;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Effect {
    if key.kind != KeyEventKind::Press {
        return Effect::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,

        // carousel
        KeyCode::Right | KeyCode::Char('l') => return app.apply(RotationMsg::Next),
        KeyCode::Left | KeyCode::Char('h') => return app.apply(RotationMsg::Previous),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            return app.apply(RotationMsg::JumpTo(index));
        }
        KeyCode::Char('r') => return app.reset_rotation(),

        // feed
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),

        // pages
        KeyCode::Char('c') => app.next_category(),
        KeyCode::Char('0') => app.set_category(None),
        _ => {}
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Settings::default()).unwrap()
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            handle_key_event(&mut app, press(code));
            assert!(app.quit);
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(&mut app, release), Effect::None);
        assert!(!app.quit);
    }

    #[test]
    fn arrows_navigate_slides_and_stop_autoplay() {
        let mut app = app();
        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Right)),
            Effect::StopAutoplay
        );
        assert_eq!(app.rotation_state.slide_index, 1);
        handle_key_event(&mut app, press(KeyCode::Left));
        handle_key_event(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.rotation_state.slide_index, 4);
    }

    #[test]
    fn digits_jump_one_based() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.rotation_state.slide_index, 2);
    }

    #[test]
    fn digit_past_last_slide_is_rejected() {
        let mut app = app();
        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Char('9'))),
            Effect::None
        );
        assert_eq!(app.rotation_state.slide_index, 0);
        assert!(app.rotation_state.auto_advance);
    }

    #[test]
    fn r_restarts_rotation() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Char('r'))),
            Effect::RestartTimers
        );
        assert!(app.rotation_state.auto_advance);
    }

    #[test]
    fn c_and_zero_switch_pages() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('c')));
        assert_eq!(app.category.as_deref(), Some("technology"));
        handle_key_event(&mut app, press(KeyCode::Char('0')));
        assert!(app.category.is_none());
    }

    #[test]
    fn j_scrolls_feed() {
        let mut app = app();
        handle_key_event(&mut app, press(KeyCode::Char('j')));
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.list_state.selected(), Some(11));
    }
}
