// Joystick polling through gilrs

use gilrs::{Axis, Button, EventType, Gamepad, GamepadId, Gilrs};
use log::{debug, info};

/// Axis ids in hardware order; `true` marks axes gilrs reports up-positive,
/// which get flipped to the down-positive joystick convention.
const AXES: [(Axis, bool); 6] = [
    (Axis::LeftStickX, false),
    (Axis::LeftStickY, true),
    (Axis::RightStickX, false),
    (Axis::RightStickY, true),
    (Axis::DPadX, false),
    (Axis::DPadY, true),
];

/// Button ids in hardware order (South=A, East=B, West=X, North=Y in Xbox layout)
const BUTTONS: [Button; 10] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
];

/// gilrs context plus a stable slot number for every gamepad seen.
///
/// Slots are handed out in order of appearance and never reused, so a
/// controller that disconnects simply reads as absent.
pub struct GilrsJoysticks {
    gilrs: Gilrs,
    slots: Vec<GamepadId>,
}

impl GilrsJoysticks {
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;
        let slots: Vec<GamepadId> = gilrs.gamepads().map(|(id, _)| id).collect();
        debug!("gilrs initialized with {} gamepad(s)", slots.len());

        Ok(Self { gilrs, slots })
    }

    /// Process pending gilrs events without collecting them
    pub fn pump(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    let slot = match self.slots.iter().position(|id| *id == event.id) {
                        Some(slot) => slot,
                        None => {
                            self.slots.push(event.id);
                            self.slots.len() - 1
                        }
                    };
                    info!("Gamepad {} connected in slot {}", event.id, slot);
                }
                EventType::Disconnected => {
                    info!("Gamepad {} disconnected", event.id);
                }
                _ => {}
            }
        }
    }

    fn gamepad(&self, slot: usize) -> Option<Gamepad<'_>> {
        let id = *self.slots.get(slot)?;
        self.gilrs.connected_gamepad(id)
    }

    pub fn present(&self, slot: usize) -> bool {
        self.gamepad(slot).is_some()
    }

    pub fn axis(&self, slot: usize, axis: usize) -> f64 {
        let (Some(gamepad), Some(&(axis, flip))) = (self.gamepad(slot), AXES.get(axis)) else {
            return 0.0;
        };
        let value = f64::from(gamepad.value(axis)).clamp(-1.0, 1.0);
        if flip {
            -value
        } else {
            value
        }
    }

    pub fn pressed(&self, slot: usize, button: usize) -> bool {
        match (self.gamepad(slot), BUTTONS.get(button)) {
            (Some(gamepad), Some(button)) => gamepad.is_pressed(*button),
            _ => false,
        }
    }

    pub fn name(&self, slot: usize) -> String {
        self.gamepad(slot)
            .map(|gamepad| gamepad.name().to_string())
            .unwrap_or_default()
    }
}
