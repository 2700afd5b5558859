// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Gamepad source: per-controller axes (with deadzone) and buttons.

use std::collections::BTreeMap;

use kestrel_math::clamp;
use tracing::debug;

/// Highest axis count tracked per pad; the standard mapping uses 4.
pub const MAX_AXES: usize = 16;

/// Highest button count tracked per pad; the standard mapping uses 17.
pub const MAX_BUTTONS: usize = 32;

/// Controller slot as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GamepadId(pub u32);

#[derive(Debug, Clone, Default)]
struct Pad {
    axes: Vec<f64>,
    buttons: Vec<bool>,
}

/// Tracks connected controllers.
#[derive(Debug, Clone)]
pub struct GamepadState {
    deadzone: f64,
    pads: BTreeMap<GamepadId, Pad>,
}

impl GamepadState {
    /// Creates a tracker that zeroes axis magnitudes below `deadzone`.
    pub fn new(deadzone: f64) -> Self {
        Self {
            deadzone,
            pads: BTreeMap::new(),
        }
    }

    /// Connected controllers in slot order.
    pub fn connected(&self) -> impl Iterator<Item = GamepadId> + '_ {
        self.pads.keys().copied()
    }

    /// Returns `true` if `pad` is connected.
    pub fn is_connected(&self, pad: GamepadId) -> bool {
        self.pads.contains_key(&pad)
    }

    /// Filtered axis value in `[-1, 1]`; `0.0` for unknown pads or axes.
    pub fn axis(&self, pad: GamepadId, axis: usize) -> f64 {
        self.pads
            .get(&pad)
            .and_then(|p| p.axes.get(axis))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns `true` while `button` is held on `pad`.
    pub fn is_pressed(&self, pad: GamepadId, button: usize) -> bool {
        self.pads
            .get(&pad)
            .and_then(|p| p.buttons.get(button))
            .copied()
            .unwrap_or(false)
    }

    /// Clamps `raw` to `[-1, 1]` and zeroes it inside the deadzone.
    /// Non-finite readings map to `0.0`.
    pub fn filter_axis(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return 0.0;
        }
        let value = clamp(raw, -1.0, 1.0);
        if value.abs() < self.deadzone {
            0.0
        } else {
            value
        }
    }

    pub(crate) fn connect(&mut self, pad: GamepadId) {
        self.pads.entry(pad).or_default();
    }

    pub(crate) fn disconnect(&mut self, pad: GamepadId) {
        self.pads.remove(&pad);
    }

    /// Stores a filtered axis reading. Readings for pads that are not
    /// connected, or for axes at or past [`MAX_AXES`], are dropped.
    pub(crate) fn set_axis(&mut self, pad: GamepadId, axis: usize, raw: f64) {
        if axis >= MAX_AXES {
            debug!(pad = pad.0, axis, "dropping out-of-range gamepad axis");
            return;
        }
        let value = self.filter_axis(raw);
        let Some(state) = self.pads.get_mut(&pad) else {
            debug!(pad = pad.0, "dropping axis event for disconnected pad");
            return;
        };
        if state.axes.len() <= axis {
            state.axes.resize(axis + 1, 0.0);
        }
        state.axes[axis] = value;
    }

    /// Stores a button state. Same drop rules as [`Self::set_axis`], capped
    /// at [`MAX_BUTTONS`].
    pub(crate) fn set_button(&mut self, pad: GamepadId, button: usize, pressed: bool) {
        if button >= MAX_BUTTONS {
            debug!(pad = pad.0, button, "dropping out-of-range gamepad button");
            return;
        }
        let Some(state) = self.pads.get_mut(&pad) else {
            debug!(pad = pad.0, "dropping button event for disconnected pad");
            return;
        };
        if state.buttons.len() <= button {
            state.buttons.resize(button + 1, false);
        }
        state.buttons[button] = pressed;
    }

    pub(crate) fn reset(&mut self) {
        self.pads.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_zeroes_small_values() {
        let state = GamepadState::new(0.2);
        assert_eq!(state.filter_axis(0.15), 0.0);
        assert_eq!(state.filter_axis(-0.19), 0.0);
        assert_eq!(state.filter_axis(0.5), 0.5);
    }

    #[test]
    fn axis_values_are_clamped() {
        let state = GamepadState::new(0.1);
        assert_eq!(state.filter_axis(1.7), 1.0);
        assert_eq!(state.filter_axis(-3.0), -1.0);
    }

    #[test]
    fn non_finite_axis_readings_read_as_zero() {
        let state = GamepadState::new(0.1);
        assert_eq!(state.filter_axis(f64::NAN), 0.0);
        assert_eq!(state.filter_axis(f64::INFINITY), 0.0);
        assert_eq!(state.filter_axis(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn axis_writes_grow_connected_pads() {
        let mut state = GamepadState::new(0.1);
        let pad = GamepadId(2);
        state.connect(pad);
        state.set_axis(pad, 3, -0.8);
        assert_eq!(state.axis(pad, 3), -0.8);
        assert_eq!(state.axis(pad, 0), 0.0);
        assert_eq!(state.axis(GamepadId(9), 0), 0.0);
    }

    #[test]
    fn late_events_do_not_reconnect_a_pad() {
        let mut state = GamepadState::new(0.1);
        let pad = GamepadId(1);
        state.connect(pad);
        state.disconnect(pad);
        state.set_button(pad, 0, true);
        state.set_axis(pad, 0, 0.9);
        assert!(!state.is_connected(pad));
        assert!(!state.is_pressed(pad, 0));
        assert_eq!(state.connected().count(), 0);
    }

    #[test]
    fn indices_past_the_cap_are_dropped() {
        let mut state = GamepadState::new(0.1);
        let pad = GamepadId(0);
        state.connect(pad);
        state.set_axis(pad, MAX_AXES, 0.5);
        state.set_button(pad, MAX_BUTTONS, true);
        state.set_axis(pad, MAX_AXES - 1, 0.5);
        assert_eq!(state.axis(pad, MAX_AXES), 0.0);
        assert!(!state.is_pressed(pad, MAX_BUTTONS));
        assert_eq!(state.axis(pad, MAX_AXES - 1), 0.5);
    }
}
