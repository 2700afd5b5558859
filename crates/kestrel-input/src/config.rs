// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Input sources a router can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    /// Mouse, pen and touch pointers.
    Pointer,
    /// Physical keyboard.
    Keyboard,
    /// Game controllers.
    Gamepad,
}

impl SourceKind {
    /// Every source, in binding order.
    pub const ALL: [Self; 3] = [Self::Pointer, Self::Keyboard, Self::Gamepad];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pointer => "pointer",
            Self::Keyboard => "keyboard",
            Self::Gamepad => "gamepad",
        })
    }
}

/// Input settings handed to the router (and persisted with engine prefs).
///
/// Missing fields fall back to [`InputConfig::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Ask the host to suppress the platform's default handling of
    /// handled events (page scroll, context menu, browser shortcuts).
    pub prevent_default: bool,
    /// Bind pointer listeners.
    pub pointer: bool,
    /// Bind keyboard listeners.
    pub keyboard: bool,
    /// Bind gamepad listeners.
    pub gamepad: bool,
    /// Axis magnitudes below this read as zero.
    pub gamepad_deadzone: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prevent_default: true,
            pointer: true,
            keyboard: true,
            gamepad: true,
            gamepad_deadzone: 0.1,
        }
    }
}

impl InputConfig {
    /// Returns whether `kind` is enabled.
    pub fn is_enabled(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Pointer => self.pointer,
            SourceKind::Keyboard => self.keyboard,
            SourceKind::Gamepad => self.gamepad,
        }
    }

    /// Enabled sources in binding order (pointer, keyboard, gamepad).
    pub fn enabled_sources(&self) -> Vec<SourceKind> {
        SourceKind::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// Checks values serde cannot constrain.
    pub fn validate(&self) -> Result<(), InputError> {
        if (0.0..1.0).contains(&self.gamepad_deadzone) {
            Ok(())
        } else {
            Err(InputError::InvalidDeadzone(self.gamepad_deadzone))
        }
    }
}
