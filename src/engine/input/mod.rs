// Input unification layer
//
// Turns raw per-frame hardware reads (keyboard, digital joysticks, analog
// gamepads) into one normalized state per player, plus edge-triggered menu
// events and rapid fire for held buttons.
//
// ## Architecture
//
// - `action`: Player actions and default key bindings
// - `config`: Key bindings, gamepad layout, analog and timing settings
// - `state`: `DeviceState`, the per-sample snapshot
// - `events`: Edge detection into `UiEventState`
// - `rapid_fire`: Auto-repeat for held buttons
// - `hardware`: The polling capability devices read through
// - `device`: Keyboard and gamepad devices
// - `manager`: `InputController`, player assignment and per-frame polling
//
// ## Usage Example
//
// ```rust
// use engine::input::{DesktopHardware, InputController};
//
// let mut input = InputController::new(DesktopHardware::new());
//
// // Menus before player selection read every device at once
// if let Some(events) = input.ui_events_combined() {
//     if events.pressed_button {
//         input.assign_devices();
//     }
// }
//
// // In game, each player reads their own slot once per frame
// if let Ok(Some(events)) = input.ui_events(0) {
//     if events.pressed_button {
//         // Player 1 fires (repeats while held)
//     }
// }
// ```

pub mod action;
pub mod config;
pub mod device;
pub mod events;
pub mod hardware;
#[cfg(feature = "gamepad")]
pub mod joystick;
pub mod manager;
pub mod mock;
pub mod rapid_fire;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use config::{ControllerConfig, KeyBindings};
pub use device::{AxisMode, Device};
pub use events::UiEventState;
pub use hardware::{DesktopHardware, Hardware, KeyboardTracker};
pub use manager::{DeviceInfo, InputController, InputError};
pub use rapid_fire::RapidFireState;
pub use state::DeviceState;
