use crate::browser;
use anyhow::Result;
use futures::channel::mpsc::{unbounded, UnboundedReceiver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

// ==================== Key Events ====================
// keydown/keyup land here from the browser; the loop drains them once per
// frame on the same single-threaded cadence, so the flags never race

pub enum KeyPress {
    KeyDown(KeyboardEvent),
    KeyUp(KeyboardEvent),
}

/// Hook the window key handlers up to an unbounded channel
/// - the receiver side is owned by the game loop
/// - forget() leaks the closures on purpose : they must outlive this call
pub fn prepare_input() -> Result<UnboundedReceiver<KeyPress>> {
    let (keydown_sender, keyevent_receiver) = unbounded();
    let keydown_sender = Rc::new(RefCell::new(keydown_sender));
    let keyup_sender = Rc::clone(&keydown_sender);

    let onkeydown = browser::closure_wrap(Box::new(move |event: KeyboardEvent| {
        let _ = keydown_sender
            .borrow_mut()
            .start_send(KeyPress::KeyDown(event));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let onkeyup = browser::closure_wrap(Box::new(move |event: KeyboardEvent| {
        let _ = keyup_sender.borrow_mut().start_send(KeyPress::KeyUp(event));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    let window = browser::window()?;
    window.set_onkeydown(Some(onkeydown.as_ref().unchecked_ref()));
    window.set_onkeyup(Some(onkeyup.as_ref().unchecked_ref()));
    onkeydown.forget();
    onkeyup.forget();

    Ok(keyevent_receiver)
}

/// Drain every pending key event into the flag set
/// - Ok(None) means the sender hung up, Err means nothing pending; either
/// way the frame moves on with whatever state it has
pub fn process_input(state: &mut KeyState, keyevent_receiver: &mut UnboundedReceiver<KeyPress>) {
    loop {
        match keyevent_receiver.try_next() {
            Ok(None) => break,
            Err(_) => break,
            Ok(Some(event)) => match event {
                KeyPress::KeyDown(event) => state.set_pressed(&event.key(), true),
                KeyPress::KeyUp(event) => state.set_pressed(&event.key(), false),
            },
        }
    }
}

/// Physical-key-to-direction map
/// - matched against KeyboardEvent.key, so these are the printed characters
#[derive(Clone, Debug)]
pub struct KeyBindings {
    pub up: &'static str,
    pub down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: "w",
            down: "s",
            left: "a",
            right: "d",
        }
    }
}

/// Four independent held-key flags
/// - true while the matching physical key is down, false otherwise
/// - keys outside the binding set are ignored
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    bindings: KeyBindings,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    pub fn new() -> Self {
        KeyState::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        KeyState {
            bindings,
            ..KeyState::default()
        }
    }

    pub fn set_pressed(&mut self, key: &str, pressed: bool) {
        if key == self.bindings.up {
            self.up = pressed;
        } else if key == self.bindings.down {
            self.down = pressed;
        } else if key == self.bindings.left {
            self.left = pressed;
        } else if key == self.bindings.right {
            self.right = pressed;
        }
    }

    pub fn is_up_pressed(&self) -> bool {
        self.up
    }

    pub fn is_down_pressed(&self) -> bool {
        self.down
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left
    }

    pub fn is_right_pressed(&self) -> bool {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_direction_toggles_independently() {
        let mut state = KeyState::new();

        let cases: [(&str, fn(&KeyState) -> bool); 4] = [
            ("w", KeyState::is_up_pressed),
            ("s", KeyState::is_down_pressed),
            ("a", KeyState::is_left_pressed),
            ("d", KeyState::is_right_pressed),
        ];

        for (key, flag) in cases {
            state.set_pressed(key, true);
            assert!(flag(&state), "'{}' should set its flag", key);

            // the other three must be untouched
            let held: usize = [
                state.is_up_pressed(),
                state.is_down_pressed(),
                state.is_left_pressed(),
                state.is_right_pressed(),
            ]
            .iter()
            .filter(|&&pressed| pressed)
            .count();
            assert_eq!(held, 1, "only '{}' should be held", key);

            state.set_pressed(key, false);
            assert!(!flag(&state), "'{}' should clear its flag", key);
        }
    }

    #[test]
    fn keys_outside_the_binding_set_are_ignored() {
        let mut state = KeyState::new();

        state.set_pressed("x", true);
        state.set_pressed("ArrowUp", true);

        assert!(!state.is_up_pressed());
        assert!(!state.is_down_pressed());
        assert!(!state.is_left_pressed());
        assert!(!state.is_right_pressed());
    }

    #[test]
    fn rebound_keys_move_with_the_bindings() {
        let mut state = KeyState::with_bindings(KeyBindings {
            up: "i",
            down: "k",
            left: "j",
            right: "l",
        });

        state.set_pressed("w", true);
        assert!(!state.is_up_pressed(), "old binding should be inert");

        state.set_pressed("i", true);
        assert!(state.is_up_pressed());

        state.set_pressed("i", false);
        assert!(!state.is_up_pressed());
    }

    #[test]
    fn holding_all_four_keys_at_once_is_representable() {
        let mut state = KeyState::new();

        for key in ["w", "a", "s", "d"] {
            state.set_pressed(key, true);
        }

        assert!(state.is_up_pressed());
        assert!(state.is_down_pressed());
        assert!(state.is_left_pressed());
        assert!(state.is_right_pressed());
    }
}
