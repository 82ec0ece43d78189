//! Joystick / gamepad device

use crate::core::math::stick_direction;
use crate::engine::input::config::{ControllerConfig, GamepadMapping};
use crate::engine::input::hardware::Hardware;
use crate::engine::input::state::DeviceState;
use glam::DVec2;
use log::debug;

/// How a gamepad's movement axes are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Axes report exactly -1, 0 or 1
    Digital,
    /// Axes report any value in [-1, 1]; movement needs full deflection
    Analog,
}

/// A joystick in a hardware slot
#[derive(Debug, Clone)]
pub struct Gamepad {
    slot: usize,
    name: String,
    mode: AxisMode,
    mapping: GamepadMapping,
    epsilon: f64,
}

impl Gamepad {
    /// Bind to a hardware slot. The axis mode is picked once, from the name.
    pub fn new<H: Hardware + ?Sized>(slot: usize, hardware: &H, config: &ControllerConfig) -> Self {
        let name = hardware.joystick_name(slot);
        let mode = if config.analog.is_digital_name(&name) {
            AxisMode::Digital
        } else {
            AxisMode::Analog
        };
        debug!("Joystick {} ({:?}) uses {:?} axes", slot, name, mode);

        Self {
            slot,
            name,
            mode,
            mapping: config.gamepad,
            epsilon: config.analog.epsilon,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> AxisMode {
        self.mode
    }

    /// Current stick position, y down-positive
    fn stick<H: Hardware + ?Sized>(&self, hardware: &H) -> DVec2 {
        DVec2::new(
            hardware.joystick_axis(self.slot, self.mapping.axis_x),
            hardware.joystick_axis(self.slot, self.mapping.axis_y),
        )
    }

    pub fn state<H: Hardware + ?Sized>(&self, hardware: &H) -> DeviceState {
        if !hardware.joystick_present(self.slot) {
            return DeviceState::NONE;
        }

        let stick = self.stick(hardware);
        let mut state = DeviceState::NONE;

        match self.mode {
            AxisMode::Digital => {
                state.left = stick.x == -1.0;
                state.right = stick.x == 1.0;
                state.up = stick.y == -1.0;
                state.down = stick.y == 1.0;
            }
            AxisMode::Analog => state.set_direction(stick_direction(stick, self.epsilon)),
        }

        let button = |id: usize| hardware.joystick_pressed(self.slot, id);
        state.fire = button(self.mapping.fire);
        state.grenade = button(self.mapping.grenade);
        state.weapon_next = button(self.mapping.weapon_next);
        state.weapon_prev = button(self.mapping.weapon_prev);

        state
    }
}
