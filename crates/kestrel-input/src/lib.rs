// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kestrel-input: platform-agnostic input surface for Kestrel.
//!
//! Pointer, keyboard and gamepad sources each keep a small state tracker.
//! The host (browser glue, a winit loop, a test harness) implements
//! [`ListenerBinder`] to attach platform listeners, then feeds translated
//! [`InputEvent`]s through [`InputRouter::dispatch`], which also says whether
//! the platform's default action should be suppressed.
#![forbid(unsafe_code)]

mod config;
mod error;
mod event;
mod router;

pub mod gamepad;
pub mod keyboard;
pub mod pointer;

pub use config::{InputConfig, SourceKind};
pub use error::InputError;
pub use event::InputEvent;
pub use gamepad::{GamepadId, GamepadState, MAX_AXES, MAX_BUTTONS};
pub use keyboard::{KeyCode, KeyboardState, Modifiers};
pub use pointer::{PointerButton, PointerState};
pub use router::{Dispatch, InputRouter, ListenerBinder, ListenerOptions};
