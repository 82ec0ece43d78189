// Hardware polling capability
//
// Devices never talk to a backend directly. They read through `Hardware`,
// which the host provides: `DesktopHardware` for the real game (winit
// keyboard, gilrs joysticks) or `MockHardware` for tests.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[cfg(feature = "gamepad")]
use super::joystick::GilrsJoysticks;

/// Raw, synchronous reads of the host's input hardware.
///
/// Every call returns the last known value immediately. A slot with no
/// joystick reads as centered axes and released buttons.
pub trait Hardware {
    /// Whether a joystick is plugged into a hardware slot
    fn joystick_present(&self, slot: usize) -> bool;

    /// Axis position in `[-1, 1]`
    fn joystick_axis(&self, slot: usize, axis: usize) -> f64;

    /// Whether a joystick button is held
    fn joystick_pressed(&self, slot: usize, button: usize) -> bool;

    /// Human-readable controller name
    fn joystick_name(&self, slot: usize) -> String;

    /// Whether a keyboard key is held
    fn key_pressed(&self, key: KeyCode) -> bool;
}

/// Keyboard state accumulated from window key events
#[derive(Debug, Clone, Default)]
pub struct KeyboardTracker {
    pressed: HashSet<KeyCode>,
}

impl KeyboardTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys are tracked
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.set_key(key_code, event.state == ElementState::Pressed);
        }
    }

    /// Record a key as held or released
    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }
}

/// Hardware for the desktop build: winit keyboard plus gilrs joysticks
/// when the `gamepad` feature is enabled.
pub struct DesktopHardware {
    keyboard: KeyboardTracker,

    /// None if gamepad support failed to initialize
    #[cfg(feature = "gamepad")]
    joysticks: Option<GilrsJoysticks>,
}

impl DesktopHardware {
    pub fn new() -> Self {
        #[cfg(feature = "gamepad")]
        let joysticks = match GilrsJoysticks::new() {
            Ok(joysticks) => Some(joysticks),
            Err(e) => {
                log::warn!(
                    "Failed to initialize gamepad support: {}. Only the keyboard will be available.",
                    e
                );
                None
            }
        };

        Self {
            keyboard: KeyboardTracker::new(),
            #[cfg(feature = "gamepad")]
            joysticks,
        }
    }

    /// Feed a winit key event into the keyboard state
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.keyboard.process_keyboard_event(event);
    }

    pub fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut KeyboardTracker {
        &mut self.keyboard
    }

    /// Drain pending backend events (connects, disconnects).
    /// Call once per frame before polling the controller.
    pub fn pump(&mut self) {
        #[cfg(feature = "gamepad")]
        if let Some(joysticks) = self.joysticks.as_mut() {
            joysticks.pump();
        }
    }
}

impl Default for DesktopHardware {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "gamepad")]
impl Hardware for DesktopHardware {
    fn joystick_present(&self, slot: usize) -> bool {
        self.joysticks.as_ref().is_some_and(|j| j.present(slot))
    }

    fn joystick_axis(&self, slot: usize, axis: usize) -> f64 {
        self.joysticks.as_ref().map_or(0.0, |j| j.axis(slot, axis))
    }

    fn joystick_pressed(&self, slot: usize, button: usize) -> bool {
        self.joysticks.as_ref().is_some_and(|j| j.pressed(slot, button))
    }

    fn joystick_name(&self, slot: usize) -> String {
        self.joysticks
            .as_ref()
            .map(|j| j.name(slot))
            .unwrap_or_default()
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }
}

#[cfg(not(feature = "gamepad"))]
impl Hardware for DesktopHardware {
    fn joystick_present(&self, _slot: usize) -> bool {
        false
    }

    fn joystick_axis(&self, _slot: usize, _axis: usize) -> f64 {
        0.0
    }

    fn joystick_pressed(&self, _slot: usize, _button: usize) -> bool {
        false
    }

    fn joystick_name(&self, _slot: usize) -> String {
        String::new()
    }

    fn key_pressed(&self, key: KeyCode) -> bool {
        self.keyboard.is_pressed(key)
    }
}
