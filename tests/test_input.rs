use std::cell::RefCell;
use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use toohoo::input::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn release(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

/// Counts every query made against it.
#[derive(Default)]
struct CountingSource {
    down_queries: RefCell<HashMap<Action, u32>>,
    pressed_queries: RefCell<HashMap<Action, u32>>,
}

impl InputSource for CountingSource {
    fn is_down(&self, action: Action) -> bool {
        *self.down_queries.borrow_mut().entry(action).or_default() += 1;
        action == Action::MoveLeft
    }
    fn is_pressed(&self, action: Action) -> bool {
        *self.pressed_queries.borrow_mut().entry(action).or_default() += 1;
        true
    }
}

// ── TickInput::poll ───────────────────────────────────────────────────────────

#[test]
fn poll_queries_each_action_once() {
    let source = CountingSource::default();
    let input = TickInput::poll(&source);

    let down = source.down_queries.borrow();
    for action in [Action::MoveLeft, Action::MoveRight, Action::MoveUp, Action::MoveDown] {
        assert_eq!(down.get(&action), Some(&1));
    }
    assert_eq!(down.get(&Action::TogglePause), None);

    let pressed = source.pressed_queries.borrow();
    assert_eq!(pressed.get(&Action::TogglePause), Some(&1));
    assert_eq!(pressed.len(), 1);

    assert!(input.left);
    assert!(!input.right && !input.up && !input.down);
    assert!(input.toggle_pause);
}

// ── Bindings ──────────────────────────────────────────────────────────────────

#[test]
fn wasd_and_arrows_map_to_moves() {
    assert_eq!(action_for(KeyCode::Char('a')), Some(Action::MoveLeft));
    assert_eq!(action_for(KeyCode::Left), Some(Action::MoveLeft));
    assert_eq!(action_for(KeyCode::Char('D')), Some(Action::MoveRight));
    assert_eq!(action_for(KeyCode::Up), Some(Action::MoveUp));
    assert_eq!(action_for(KeyCode::Char('s')), Some(Action::MoveDown));
    assert_eq!(action_for(KeyCode::Char('p')), Some(Action::TogglePause));
    assert_eq!(action_for(KeyCode::Char('x')), None);
}

// ── KeyboardState ─────────────────────────────────────────────────────────────

#[test]
fn press_is_held_and_an_edge() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('a')));
    assert!(kb.is_down(Action::MoveLeft));
    assert!(kb.is_pressed(Action::MoveLeft));

    kb.begin_frame();
    assert!(kb.is_down(Action::MoveLeft));
    assert!(!kb.is_pressed(Action::MoveLeft));
}

#[test]
fn hold_expires_without_repeats() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Right));
    for _ in 0..8 {
        kb.begin_frame();
    }
    assert!(kb.is_down(Action::MoveRight));
    kb.begin_frame();
    assert!(!kb.is_down(Action::MoveRight));
}

#[test]
fn repeats_keep_key_held() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Up));
    for _ in 0..30 {
        kb.begin_frame();
        kb.handle_key(KeyEvent::new_with_kind(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        ));
    }
    assert!(kb.is_down(Action::MoveUp));
    assert!(!kb.is_pressed(Action::MoveUp));
}

#[test]
fn release_ends_hold_immediately() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('s')));
    kb.handle_key(release(KeyCode::Char('s')));
    assert!(!kb.is_down(Action::MoveDown));
}

#[test]
fn auto_repeat_presses_are_not_new_edges() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('p')));
    assert!(kb.is_pressed(Action::TogglePause));

    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('p')));
    assert!(!kb.is_pressed(Action::TogglePause));

    // After a release the next press is a fresh edge
    kb.handle_key(release(KeyCode::Char('p')));
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('p')));
    assert!(kb.is_pressed(Action::TogglePause));
}

#[test]
fn diagonal_holds_combine() {
    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('a')));
    kb.handle_key(press(KeyCode::Char('w')));
    let input = TickInput::poll(&kb);
    assert!(input.left && input.up);
    assert!(!input.right && !input.down && !input.toggle_pause);
}

#[test]
fn quit_keys() {
    for key in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut kb = KeyboardState::new();
        kb.begin_frame();
        kb.handle_key(key);
        assert!(kb.quit_requested());
    }

    let mut kb = KeyboardState::new();
    kb.begin_frame();
    kb.handle_key(press(KeyCode::Char('c')));
    assert!(!kb.quit_requested());
}
