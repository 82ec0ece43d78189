//! Input devices
//!
//! The set of device kinds is closed: a player is either on the keyboard or
//! on a joystick. Both produce a [`DeviceState`] from [`Hardware`] reads.

mod gamepad;
mod keyboard;

pub use gamepad::{AxisMode, Gamepad};
pub use keyboard::Keyboard;

use super::hardware::Hardware;
use super::state::DeviceState;

/// Display name of the keyboard device
pub const KEYBOARD_NAME: &str = "Keyboard";

/// A physical input source bound to a player slot
#[derive(Debug, Clone)]
pub enum Device {
    Keyboard(Keyboard),
    Gamepad(Gamepad),
}

impl Device {
    /// Sample the device. Missing hardware reads as all-false.
    pub fn state<H: Hardware + ?Sized>(&self, hardware: &H) -> DeviceState {
        match self {
            Device::Keyboard(keyboard) => keyboard.state(hardware),
            Device::Gamepad(gamepad) => gamepad.state(hardware),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Device::Keyboard(_) => KEYBOARD_NAME,
            Device::Gamepad(gamepad) => gamepad.name(),
        }
    }

    /// Hardware joystick slot, `None` for the keyboard
    pub fn joystick_slot(&self) -> Option<usize> {
        match self {
            Device::Keyboard(_) => None,
            Device::Gamepad(gamepad) => Some(gamepad.slot()),
        }
    }
}

impl From<Keyboard> for Device {
    fn from(keyboard: Keyboard) -> Self {
        Device::Keyboard(keyboard)
    }
}

impl From<Gamepad> for Device {
    fn from(gamepad: Gamepad) -> Self {
        Device::Gamepad(gamepad)
    }
}
