//! In-memory hardware for testing without real devices
//!
//! # Usage
//!
//! ```
//! use arcade_input::engine::input::mock::MockHardware;
//! use arcade_input::engine::input::Hardware;
//!
//! let mut hardware = MockHardware::new();
//! hardware.connect_joystick(0, "Xbox Wireless Controller");
//! hardware.set_axis(0, 0, -1.0);
//! assert!(hardware.joystick_present(0));
//! assert_eq!(hardware.joystick_axis(0, 0), -1.0);
//! ```

use super::hardware::Hardware;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// One simulated joystick
#[derive(Debug, Clone, Default)]
pub struct MockJoystick {
    pub name: String,
    pub axes: HashMap<usize, f64>,
    pub buttons: HashSet<usize>,
}

/// Scriptable `Hardware` implementation
#[derive(Debug, Clone, Default)]
pub struct MockHardware {
    joysticks: HashMap<usize, MockJoystick>,
    keys: HashSet<KeyCode>,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plug a joystick into a slot, replacing whatever was there
    pub fn connect_joystick(&mut self, slot: usize, name: &str) {
        self.joysticks.insert(
            slot,
            MockJoystick {
                name: name.to_string(),
                ..Default::default()
            },
        );
    }

    /// Unplug a joystick
    pub fn disconnect_joystick(&mut self, slot: usize) {
        self.joysticks.remove(&slot);
    }

    /// Set an axis on a connected joystick (ignored if the slot is empty)
    pub fn set_axis(&mut self, slot: usize, axis: usize, value: f64) {
        if let Some(joystick) = self.joysticks.get_mut(&slot) {
            joystick.axes.insert(axis, value);
        }
    }

    /// Set both stick axes at once
    pub fn set_stick(&mut self, slot: usize, x: f64, y: f64) {
        self.set_axis(slot, 0, x);
        self.set_axis(slot, 1, y);
    }

    /// Press or release a button on a connected joystick
    pub fn set_button(&mut self, slot: usize, button: usize, pressed: bool) {
        if let Some(joystick) = self.joysticks.get_mut(&slot) {
            if pressed {
                joystick.buttons.insert(button);
            } else {
                joystick.buttons.remove(&button);
            }
        }
    }

    /// Press or release a keyboard key
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }
}

impl Hardware for MockHardware {
    fn joystick_present(&self, slot: usize) -> bool {
        self.joysticks.contains_key(&slot)
    }

    fn joystick_axis(&self, slot: usize, axis: usize) -> f64 {
        self.joysticks
            .get(&slot)
            .and_then(|j| j.axes.get(&axis).copied())
            .unwrap_or(0.0)
    }

    fn joystick_pressed(&self, slot: usize, button: usize) -> bool {
        self.joysticks
            .get(&slot)
            .is_some_and(|j| j.buttons.contains(&button))
    }

    fn joystick_name(&self, slot: usize) -> String {
        self.joysticks
            .get(&slot)
            .map(|j| j.name.clone())
            .unwrap_or_default()
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }
}
