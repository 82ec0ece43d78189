//! Keyboard device

use crate::engine::input::action::Action;
use crate::engine::input::config::KeyBindings;
use crate::engine::input::hardware::Hardware;
use crate::engine::input::state::DeviceState;

/// Keyboard read through a fixed set of key bindings
#[derive(Debug, Clone)]
pub struct Keyboard {
    bindings: KeyBindings,
}

impl Keyboard {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// A flag is set when any key bound to it is held
    pub fn state<H: Hardware + ?Sized>(&self, hardware: &H) -> DeviceState {
        let mut state = DeviceState::NONE;
        for action in Action::ALL {
            let held = self
                .bindings
                .keys_for(action)
                .iter()
                .any(|key| hardware.key_pressed(*key));
            state.set(action, held);
        }
        state
    }
}
