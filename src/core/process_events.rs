//! Keyboard input: raylib key polling and the key -> velocity mapping.
use raylib::prelude::*;

use crate::core::player::{Direction, Player};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// WASD and the arrow keys both steer.
const BINDINGS: [(KeyboardKey, Key); 8] = [
    (KeyboardKey::KEY_W, Key::Up),
    (KeyboardKey::KEY_S, Key::Down),
    (KeyboardKey::KEY_A, Key::Left),
    (KeyboardKey::KEY_D, Key::Right),
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
];

/// Collects this frame's key transitions. Presses come before releases.
pub fn poll_events(window: &RaylibHandle) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if window.window_should_close() {
        events.push(InputEvent::Quit);
    }
    for (rl_key, key) in BINDINGS {
        if window.is_key_pressed(rl_key) {
            events.push(InputEvent::KeyDown(key));
        }
    }
    for (rl_key, key) in BINDINGS {
        if window.is_key_released(rl_key) {
            events.push(InputEvent::KeyUp(key));
        }
    }
    events
}

/// Applies one key transition to the player. Releasing either key of an axis
/// stops that axis. `Quit` is left to the caller.
pub fn apply_to_player(player: &mut Player<'_>, event: InputEvent) {
    match event {
        InputEvent::KeyDown(Key::Up) => player.set_vertical(Direction::Negative),
        InputEvent::KeyDown(Key::Down) => player.set_vertical(Direction::Positive),
        InputEvent::KeyDown(Key::Left) => player.set_horizontal(Direction::Negative),
        InputEvent::KeyDown(Key::Right) => player.set_horizontal(Direction::Positive),
        InputEvent::KeyUp(Key::Up | Key::Down) => player.set_vertical(Direction::Stop),
        InputEvent::KeyUp(Key::Left | Key::Right) => player.set_horizontal(Direction::Stop),
        InputEvent::Quit => {}
    }
}
