// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use kestrel_input::{
    Dispatch, GamepadId, InputConfig, InputError, InputEvent, InputRouter, KeyCode,
    ListenerBinder, ListenerOptions, Modifiers, PointerButton, SourceKind,
};

#[derive(Default)]
struct RecordingBinder {
    bound: Vec<(SourceKind, ListenerOptions)>,
    unbound: Vec<SourceKind>,
    reject: Option<SourceKind>,
}

impl ListenerBinder for RecordingBinder {
    fn bind(&mut self, kind: SourceKind, options: ListenerOptions) -> Result<(), InputError> {
        if self.reject == Some(kind) {
            return Err(InputError::BindFailed {
                kind,
                reason: "no device".into(),
            });
        }
        self.bound.push((kind, options));
        Ok(())
    }

    fn unbind(&mut self, kind: SourceKind) {
        self.unbound.push(kind);
    }
}

fn key_down(code: &str) -> InputEvent {
    InputEvent::KeyDown {
        key: KeyCode::new(code),
        modifiers: Modifiers::default(),
        repeat: false,
    }
}

#[test]
fn attach_binds_enabled_sources_in_order() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");

    let kinds: Vec<_> = binder.bound.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, SourceKind::ALL.to_vec());
    assert!(binder.bound.iter().all(|(_, o)| o.prevent_default));
    assert!(router.is_attached());
}

#[test]
fn disabled_sources_are_not_bound_and_events_are_ignored() {
    let config = InputConfig {
        keyboard: false,
        ..InputConfig::default()
    };
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(config).expect("valid config");
    router.attach(&mut binder).expect("attach");

    assert_eq!(
        router.bound_sources(),
        &[SourceKind::Pointer, SourceKind::Gamepad]
    );
    assert_eq!(router.dispatch(&key_down("KeyW")), Dispatch::Ignored);
    assert!(!router.keyboard().is_pressed(&KeyCode::new("KeyW")));
}

#[test]
fn events_before_attach_are_ignored() {
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    assert_eq!(
        router.dispatch(&InputEvent::PointerMove { x: 1.0, y: 2.0 }),
        Dispatch::Ignored
    );
    assert_eq!(router.pointer().position(), (0.0, 0.0));
}

#[test]
fn failed_bind_rolls_back() {
    let mut binder = RecordingBinder {
        reject: Some(SourceKind::Gamepad),
        ..RecordingBinder::default()
    };
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    let err = router.attach(&mut binder).unwrap_err();

    assert!(matches!(
        err,
        InputError::BindFailed {
            kind: SourceKind::Gamepad,
            ..
        }
    ));
    assert_eq!(
        binder.unbound,
        vec![SourceKind::Keyboard, SourceKind::Pointer]
    );
    assert!(!router.is_attached());
    assert!(router.bound_sources().is_empty());
}

#[test]
fn attach_twice_is_rejected() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    assert_eq!(router.attach(&mut binder), Err(InputError::AlreadyAttached));
}

#[test]
fn prevent_default_flag_follows_config() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");

    assert_eq!(
        router.dispatch(&key_down("Space")),
        Dispatch::Handled {
            prevent_default: true
        }
    );
    router
        .set_prevent_default(false, &mut binder)
        .expect("rebind");
    assert_eq!(
        router.dispatch(&key_down("Space")),
        Dispatch::Handled {
            prevent_default: false
        }
    );
}

#[test]
fn changing_prevent_default_rebinds_attached_sources() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    binder.bound.clear();

    router
        .set_prevent_default(false, &mut binder)
        .expect("rebind");

    assert_eq!(
        binder.unbound,
        vec![SourceKind::Gamepad, SourceKind::Keyboard, SourceKind::Pointer]
    );
    let kinds: Vec<_> = binder.bound.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, SourceKind::ALL.to_vec());
    assert!(binder.bound.iter().all(|(_, o)| !o.prevent_default));
    assert_eq!(router.bound_sources(), SourceKind::ALL.as_slice());
    assert!(router.is_attached());
}

#[test]
fn prevent_default_change_while_detached_binds_nothing() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router
        .set_prevent_default(false, &mut binder)
        .expect("no host calls");
    assert!(binder.bound.is_empty() && binder.unbound.is_empty());

    router.attach(&mut binder).expect("attach");
    assert!(binder.bound.iter().all(|(_, o)| !o.prevent_default));
}

#[test]
fn failed_rebind_detaches() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    binder.reject = Some(SourceKind::Keyboard);

    let err = router.set_prevent_default(false, &mut binder).unwrap_err();
    assert!(matches!(
        err,
        InputError::BindFailed {
            kind: SourceKind::Keyboard,
            ..
        }
    ));
    assert!(!router.is_attached());
    assert!(router.bound_sources().is_empty());
    assert_eq!(router.dispatch(&key_down("KeyQ")), Dispatch::Ignored);
}

#[test]
fn out_of_range_gamepad_indices_are_dropped() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    let pad = GamepadId(0);
    router.dispatch(&InputEvent::GamepadConnected { pad });
    router.dispatch(&InputEvent::GamepadAxis {
        pad,
        axis: 0,
        value: 0.75,
    });

    router.dispatch(&InputEvent::GamepadAxis {
        pad,
        axis: usize::MAX,
        value: 0.5,
    });
    router.dispatch(&InputEvent::GamepadButton {
        pad,
        button: usize::MAX,
        pressed: true,
    });

    assert_eq!(router.gamepad().axis(pad, usize::MAX), 0.0);
    assert!(!router.gamepad().is_pressed(pad, usize::MAX));
    assert_eq!(router.gamepad().axis(pad, 0), 0.75);
}

#[test]
fn nan_axis_reading_is_stored_as_zero() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    let pad = GamepadId(0);
    router.dispatch(&InputEvent::GamepadConnected { pad });
    router.dispatch(&InputEvent::GamepadAxis {
        pad,
        axis: 0,
        value: f64::NAN,
    });
    assert_eq!(router.gamepad().axis(pad, 0), 0.0);
}

#[test]
fn gamepad_events_after_disconnect_do_not_reconnect() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    let pad = GamepadId(3);
    router.dispatch(&InputEvent::GamepadConnected { pad });
    router.dispatch(&InputEvent::GamepadDisconnected { pad });
    router.dispatch(&InputEvent::GamepadButton {
        pad,
        button: 1,
        pressed: true,
    });
    assert!(!router.gamepad().is_connected(pad));
    assert!(!router.gamepad().is_pressed(pad, 1));
}

#[test]
fn trackers_follow_events() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");

    router.dispatch(&InputEvent::PointerDown {
        button: PointerButton::Primary,
        x: 10.0,
        y: 20.0,
    });
    assert!(router.pointer().is_pressed(PointerButton::Primary));
    assert_eq!(router.pointer().position(), (10.0, 20.0));
    router.dispatch(&InputEvent::PointerUp {
        button: PointerButton::Primary,
        x: 12.0,
        y: 20.0,
    });
    assert!(!router.pointer().is_pressed(PointerButton::Primary));

    let shift = Modifiers {
        shift: true,
        ..Modifiers::default()
    };
    router.dispatch(&InputEvent::KeyDown {
        key: KeyCode::new("KeyA"),
        modifiers: shift,
        repeat: false,
    });
    assert_eq!(router.keyboard().modifiers(&KeyCode::new("KeyA")), Some(shift));
    router.dispatch(&InputEvent::KeyUp {
        key: KeyCode::new("KeyA"),
        modifiers: Modifiers::default(),
    });
    assert_eq!(router.keyboard().held_count(), 0);

    let pad = GamepadId(0);
    router.dispatch(&InputEvent::GamepadConnected { pad });
    router.dispatch(&InputEvent::GamepadAxis {
        pad,
        axis: 1,
        value: 0.05,
    });
    router.dispatch(&InputEvent::GamepadButton {
        pad,
        button: 0,
        pressed: true,
    });
    assert_eq!(router.gamepad().axis(pad, 1), 0.0);
    assert!(router.gamepad().is_pressed(pad, 0));
    router.dispatch(&InputEvent::GamepadDisconnected { pad });
    assert!(!router.gamepad().is_connected(pad));
}

#[test]
fn detach_unbinds_in_reverse_and_clears_state() {
    let mut binder = RecordingBinder::default();
    let mut router = InputRouter::new(InputConfig::default()).expect("valid config");
    router.attach(&mut binder).expect("attach");
    router.dispatch(&key_down("KeyD"));

    router.detach(&mut binder);
    assert_eq!(
        binder.unbound,
        vec![SourceKind::Gamepad, SourceKind::Keyboard, SourceKind::Pointer]
    );
    assert!(!router.is_attached());
    assert_eq!(router.keyboard().held_count(), 0);
    assert_eq!(router.dispatch(&key_down("KeyD")), Dispatch::Ignored);
}

#[test]
fn invalid_deadzone_is_rejected_up_front() {
    let config = InputConfig {
        gamepad_deadzone: -0.5,
        ..InputConfig::default()
    };
    assert_eq!(
        InputRouter::new(config).unwrap_err(),
        InputError::InvalidDeadzone(-0.5)
    );
}

#[test]
fn pointer_buttons_follow_dom_numbering() {
    assert_eq!(PointerButton::from_index(0), PointerButton::Primary);
    assert_eq!(PointerButton::from_index(1), PointerButton::Auxiliary);
    assert_eq!(PointerButton::from_index(2), PointerButton::Secondary);
    assert_eq!(PointerButton::from_index(4), PointerButton::Other(4));
}
