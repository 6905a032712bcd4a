/// Input collaborator.
///
/// The game only ever asks two questions: is an action held right now, and
/// was it pressed this frame. `KeyboardState` answers them from crossterm
/// key events.

use std::collections::{HashMap, HashSet};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    TogglePause,
}

pub trait InputSource {
    /// Held this frame.
    fn is_down(&self, action: Action) -> bool;
    /// Went down this frame (an edge, not a hold).
    fn is_pressed(&self, action: Action) -> bool;
}

/// Everything the simulation reads from input during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub toggle_pause: bool,
}

impl TickInput {
    /// Query each action exactly once.
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            left: source.is_down(Action::MoveLeft),
            right: source.is_down(Action::MoveRight),
            up: source.is_down(Action::MoveUp),
            down: source.is_down(Action::MoveDown),
            toggle_pause: source.is_pressed(Action::TogglePause),
        }
    }
}

// ── Keyboard ─────────────────────────────────────────────────────────────────

/// A key counts as held if its last press/repeat event arrived within this
/// many frames. Terminals without release events only send repeats, at
/// 15 Hz or faster, so 8 frames @ 60 FPS (≈133 ms) stays refreshed.
const HOLD_WINDOW: u64 = 8;

pub fn action_for(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::MoveDown),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::TogglePause),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Hold and edge tracking over a stream of key events.
///
/// Call `begin_frame` once per frame before feeding that frame's events.
#[derive(Debug, Default)]
pub struct KeyboardState {
    frame: u64,
    /// Frame each held action was last seen (press or repeat).
    last_seen: HashMap<Action, u64>,
    pressed: HashSet<Action>,
    quit: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.pressed.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Press && is_quit(&key) {
            self.quit = true;
            return;
        }
        let Some(action) = action_for(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press => {
                // Classic terminals report auto-repeat as fresh presses, so a
                // press of an already-held key is not a new edge.
                if !self.is_down(action) {
                    self.pressed.insert(action);
                }
                self.last_seen.insert(action, self.frame);
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(action, self.frame);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&action);
            }
        }
    }

    /// Quit key seen; plays the part of a window-close request.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

impl InputSource for KeyboardState {
    fn is_down(&self, action: Action) -> bool {
        self.last_seen
            .get(&action)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}
