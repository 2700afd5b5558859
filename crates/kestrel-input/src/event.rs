// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::config::SourceKind;
use crate::gamepad::GamepadId;
use crate::keyboard::{KeyCode, Modifiers};
use crate::pointer::PointerButton;

/// Platform-agnostic input event, translated by the host from native events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to `(x, y)` in surface coordinates.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer button went down.
    PointerDown {
        /// Button pressed.
        button: PointerButton,
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer button went up.
    PointerUp {
        /// Button released.
        button: PointerButton,
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Key went down (or auto-repeated).
    KeyDown {
        /// Physical key.
        key: KeyCode,
        /// Modifier snapshot.
        modifiers: Modifiers,
        /// Auto-repeat from a held key.
        repeat: bool,
    },
    /// Key went up.
    KeyUp {
        /// Physical key.
        key: KeyCode,
        /// Modifier snapshot.
        modifiers: Modifiers,
    },
    /// Controller plugged in.
    GamepadConnected {
        /// Controller slot.
        pad: GamepadId,
    },
    /// Controller removed.
    GamepadDisconnected {
        /// Controller slot.
        pad: GamepadId,
    },
    /// Analog axis changed. Raw value, nominally `[-1, 1]`.
    GamepadAxis {
        /// Controller slot.
        pad: GamepadId,
        /// Axis index in the standard mapping.
        axis: usize,
        /// Raw axis value.
        value: f64,
    },
    /// Digital button changed.
    GamepadButton {
        /// Controller slot.
        pad: GamepadId,
        /// Button index in the standard mapping.
        button: usize,
        /// New state.
        pressed: bool,
    },
}

impl InputEvent {
    /// Source this event belongs to.
    pub fn source(&self) -> SourceKind {
        match self {
            Self::PointerMove { .. } | Self::PointerDown { .. } | Self::PointerUp { .. } => {
                SourceKind::Pointer
            }
            Self::KeyDown { .. } | Self::KeyUp { .. } => SourceKind::Keyboard,
            Self::GamepadConnected { .. }
            | Self::GamepadDisconnected { .. }
            | Self::GamepadAxis { .. }
            | Self::GamepadButton { .. } => SourceKind::Gamepad,
        }
    }
}
