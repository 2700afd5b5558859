// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Keyboard source: currently held keys.

use std::collections::HashMap;
use std::fmt;

/// Physical key identifier (DOM `KeyboardEvent.code`, e.g. `"KeyW"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCode(String);

impl KeyCode {
    /// Wraps a key code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrowed code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Modifier keys held when a key event fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift.
    pub shift: bool,
    /// Control.
    pub ctrl: bool,
    /// Alt / Option.
    pub alt: bool,
    /// Meta / Command / Windows.
    pub meta: bool,
}

/// Tracks which keys are held, with the modifiers seen on key down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed_keys: HashMap<KeyCode, Modifiers>,
}

impl KeyboardState {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while `key` is held.
    pub fn is_pressed(&self, key: &KeyCode) -> bool {
        self.pressed_keys.contains_key(key)
    }

    /// Modifiers captured when `key` went down.
    pub fn modifiers(&self, key: &KeyCode) -> Option<Modifiers> {
        self.pressed_keys.get(key).copied()
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.pressed_keys.len()
    }

    pub(crate) fn key_down(&mut self, key: KeyCode, modifiers: Modifiers) {
        self.pressed_keys.insert(key, modifiers);
    }

    pub(crate) fn key_up(&mut self, key: &KeyCode) {
        self.pressed_keys.remove(key);
    }

    pub(crate) fn reset(&mut self) {
        self.pressed_keys.clear();
    }
}
