// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pointer source: last known position and held buttons.

use std::collections::HashSet;

/// Pointer button, following the DOM `MouseEvent.button` numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button or a touch contact.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Auxiliary,
    /// Any other button index.
    Other(u8),
}

impl PointerButton {
    /// Maps a DOM button index.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Tracks pointer position and held buttons.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: (f64, f64),
    pressed: HashSet<PointerButton>,
}

impl PointerState {
    /// Creates an empty tracker at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported position.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Returns `true` while `button` is held.
    pub fn is_pressed(&self, button: PointerButton) -> bool {
        self.pressed.contains(&button)
    }

    pub(crate) fn moved(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }

    pub(crate) fn pressed(&mut self, button: PointerButton, x: f64, y: f64) {
        self.position = (x, y);
        self.pressed.insert(button);
    }

    pub(crate) fn released(&mut self, button: PointerButton, x: f64, y: f64) {
        self.position = (x, y);
        self.pressed.remove(&button);
    }

    pub(crate) fn reset(&mut self) {
        self.pressed.clear();
    }
}
