// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Binds enabled sources through a host port and routes events to their
//! state trackers.

use tracing::{debug, info, warn};

use crate::config::{InputConfig, SourceKind};
use crate::error::InputError;
use crate::event::InputEvent;
use crate::gamepad::GamepadState;
use crate::keyboard::KeyboardState;
use crate::pointer::PointerState;

/// Options passed to the host with each bind request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Whether handled events should suppress the platform default.
    pub prevent_default: bool,
}

/// Host port that attaches and detaches platform listeners for a source.
///
/// A browser adapter maps this to `addEventListener`; a native adapter can
/// simply record which sources to forward from its event loop.
pub trait ListenerBinder {
    /// Attach listeners for `kind`.
    fn bind(&mut self, kind: SourceKind, options: ListenerOptions) -> Result<(), InputError>;
    /// Detach listeners for `kind`. Must tolerate kinds that were never bound.
    fn unbind(&mut self, kind: SourceKind);
}

/// Outcome of routing one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The event updated a tracker; the host should call its platform
    /// `preventDefault` equivalent when `prevent_default` is set.
    Handled {
        /// Suppress the platform default action.
        prevent_default: bool,
    },
    /// The event's source is disabled or not bound; leave it to the platform.
    Ignored,
}

/// Owns the source trackers and the binding lifecycle.
#[derive(Debug)]
pub struct InputRouter {
    config: InputConfig,
    attached: bool,
    bound: Vec<SourceKind>,
    pointer: PointerState,
    keyboard: KeyboardState,
    gamepad: GamepadState,
}

impl InputRouter {
    /// Creates a detached router after validating `config`.
    pub fn new(config: InputConfig) -> Result<Self, InputError> {
        config.validate()?;
        let gamepad = GamepadState::new(config.gamepad_deadzone);
        Ok(Self {
            config,
            attached: false,
            bound: Vec::new(),
            pointer: PointerState::new(),
            keyboard: KeyboardState::new(),
            gamepad,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Changes default-action suppression at runtime.
    ///
    /// While attached, every bound source is unbound and bound again with
    /// the new [`ListenerOptions`] so the host's listeners agree with
    /// [`Dispatch`]. If the host rejects a rebind, the router detaches and
    /// returns the error.
    pub fn set_prevent_default<B: ListenerBinder + ?Sized>(
        &mut self,
        prevent_default: bool,
        binder: &mut B,
    ) -> Result<(), InputError> {
        if self.config.prevent_default == prevent_default {
            return Ok(());
        }
        self.config.prevent_default = prevent_default;
        if !self.attached {
            return Ok(());
        }
        let options = self.listener_options();
        let sources = std::mem::take(&mut self.bound);
        for kind in sources.iter().rev() {
            binder.unbind(*kind);
        }
        for kind in sources {
            if let Err(err) = binder.bind(kind, options) {
                warn!(%kind, %err, "rebind failed; detaching");
                self.detach(binder);
                return Err(err);
            }
            self.bound.push(kind);
        }
        info!(prevent_default, "input sources rebound");
        Ok(())
    }

    /// Returns `true` between a successful `attach` and the next `detach`.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Sources currently bound, in binding order.
    pub fn bound_sources(&self) -> &[SourceKind] {
        &self.bound
    }

    /// Binds every enabled source.
    ///
    /// If the host rejects a source, the sources bound so far are unbound
    /// again and the error is returned; the router stays detached.
    pub fn attach<B: ListenerBinder + ?Sized>(&mut self, binder: &mut B) -> Result<(), InputError> {
        if self.attached {
            return Err(InputError::AlreadyAttached);
        }
        let options = self.listener_options();
        for kind in self.config.enabled_sources() {
            if let Err(err) = binder.bind(kind, options) {
                warn!(%kind, %err, "bind failed; rolling back");
                for done in self.bound.drain(..).rev() {
                    binder.unbind(done);
                }
                return Err(err);
            }
            debug!(%kind, prevent_default = options.prevent_default, "bound input source");
            self.bound.push(kind);
        }
        self.attached = true;
        info!(sources = self.bound.len(), "input router attached");
        Ok(())
    }

    /// Unbinds all bound sources and clears held state.
    pub fn detach<B: ListenerBinder + ?Sized>(&mut self, binder: &mut B) {
        for kind in self.bound.drain(..).rev() {
            binder.unbind(kind);
        }
        self.attached = false;
        self.pointer.reset();
        self.keyboard.reset();
        self.gamepad.reset();
        debug!("input router detached");
    }

    fn listener_options(&self) -> ListenerOptions {
        ListenerOptions {
            prevent_default: self.config.prevent_default,
        }
    }

    /// Routes `event` to its tracker.
    pub fn dispatch(&mut self, event: &InputEvent) -> Dispatch {
        if !self.bound.contains(&event.source()) {
            return Dispatch::Ignored;
        }
        match event {
            InputEvent::PointerMove { x, y } => self.pointer.moved(*x, *y),
            InputEvent::PointerDown { button, x, y } => self.pointer.pressed(*button, *x, *y),
            InputEvent::PointerUp { button, x, y } => self.pointer.released(*button, *x, *y),
            InputEvent::KeyDown { key, modifiers, .. } => {
                self.keyboard.key_down(key.clone(), *modifiers);
            }
            InputEvent::KeyUp { key, .. } => self.keyboard.key_up(key),
            InputEvent::GamepadConnected { pad } => self.gamepad.connect(*pad),
            InputEvent::GamepadDisconnected { pad } => self.gamepad.disconnect(*pad),
            InputEvent::GamepadAxis { pad, axis, value } => {
                self.gamepad.set_axis(*pad, *axis, *value);
            }
            InputEvent::GamepadButton {
                pad,
                button,
                pressed,
            } => self.gamepad.set_button(*pad, *button, *pressed),
        }
        Dispatch::Handled {
            prevent_default: self.config.prevent_default,
        }
    }

    /// Pointer tracker.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Keyboard tracker.
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Gamepad tracker.
    pub fn gamepad(&self) -> &GamepadState {
        &self.gamepad
    }
}
