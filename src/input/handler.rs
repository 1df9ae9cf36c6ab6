use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::input::{KeyCode, is_quit_requested};
use macroquad::miniquad::{EventHandler, KeyMods};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Quit,
    None,
}

/// Key-down events in the order the window delivered them
#[derive(Debug, Default)]
struct KeyLog {
    keys: Vec<KeyCode>,
}

impl EventHandler for KeyLog {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.keys.push(keycode);
    }
}

pub struct InputHandler {
    subscriber: Option<usize>,
    log: KeyLog,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            subscriber: None,
            log: KeyLog::default(),
        }
    }

    pub fn handle_key(&self, key: KeyCode) -> KeyAction {
        match key {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),

            // Movement - WASD
            KeyCode::W => KeyAction::Move(Direction::Up),
            KeyCode::S => KeyAction::Move(Direction::Down),
            KeyCode::A => KeyAction::Move(Direction::Left),
            KeyCode::D => KeyAction::Move(Direction::Right),

            KeyCode::Escape => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    /// Drain every key pressed since the previous poll, oldest first.
    ///
    /// The subscriber is registered on the first poll, which has to run
    /// inside the macroquad window.
    pub fn poll(&mut self) -> Vec<KeyAction> {
        let subscriber = *self.subscriber.get_or_insert_with(register_input_subscriber);
        repeat_all_miniquad_input(&mut self.log, subscriber);

        let mut actions = self.drain();
        if is_quit_requested() {
            actions.push(KeyAction::Quit);
        }
        actions
    }

    /// Translate the recorded keys, keeping their arrival order
    fn drain(&mut self) -> Vec<KeyAction> {
        let keys = std::mem::take(&mut self.log.keys);
        keys.into_iter()
            .map(|key| self.handle_key(key))
            .filter(|action| *action != KeyAction::None)
            .collect()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction requests collected between two ticks.
///
/// Requests are judged against the direction the snake moved on its last
/// step, so a burst such as right -> up -> left inside one tick can never
/// reverse it. The latest valid request wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steering {
    committed: Direction,
    pending: Option<Direction>,
}

impl Steering {
    pub fn new(committed: Direction) -> Self {
        Self {
            committed,
            pending: None,
        }
    }

    /// Record a request; returns whether it was accepted
    pub fn request(&mut self, direction: Direction) -> bool {
        if self.committed.can_turn_to(direction) {
            self.pending = Some(direction);
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Hand the pending request to the next step
    pub fn take(&mut self) -> Action {
        Action::from(self.pending.take())
    }

    /// Sync with the direction the snake actually moved in
    pub fn commit(&mut self, direction: Direction) {
        self.committed = direction;
        self.pending = None;
    }
}
