// Input controller - binds devices to players and derives per-frame events

use super::config::ControllerConfig;
use super::device::{Device, Gamepad, Keyboard, KEYBOARD_NAME};
use super::events::UiEventState;
use super::hardware::Hardware;
use super::rapid_fire::{RapidFirePhase, RapidFireState};
use super::state::DeviceState;
use crate::core::clock::{Clock, SystemClock};
use log::{debug, info, trace};

/// Number of player slots
pub const MAX_PLAYERS: usize = 2;

/// Input controller errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid player index {index}: {assigned} player slot(s) assigned")]
    InvalidPlayerIndex { index: usize, assigned: usize },
}

/// Entry in the device picker list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    /// Hardware joystick slot, `None` for the keyboard
    pub joystick_slot: Option<usize>,
}

/// A player slot and everything remembered about it between frames
#[derive(Debug)]
struct PlayerSlot {
    device: Device,
    last_state: Option<DeviceState>,
    rapid_fire: RapidFireState,
}

impl PlayerSlot {
    fn new(device: Device) -> Self {
        Self {
            device,
            last_state: None,
            rapid_fire: RapidFireState::new(),
        }
    }
}

/// Per-frame input front end for the whole game.
///
/// Before assignment, menus read the combined view of every device. After
/// `assign_devices`, each player reads their own slot.
pub struct InputController<H: Hardware, C: Clock = SystemClock> {
    hardware: H,
    clock: C,
    config: ControllerConfig,

    /// Keyboard used for the combined view and as the fallback device
    keyboard: Keyboard,

    /// Assigned player slots, in player order
    players: Vec<PlayerSlot>,

    /// Gamepads read by the combined view, by ascending slot. Rebuilt only
    /// when the set of present joysticks changes.
    combined_pads: Vec<Gamepad>,

    /// Baseline for combined-view edge detection
    combined_last_state: Option<DeviceState>,
}

impl<H: Hardware> InputController<H> {
    /// Create a controller with default configuration and the system clock
    pub fn new(hardware: H) -> Self {
        Self::with_clock(hardware, SystemClock, ControllerConfig::default())
    }

    /// Create a controller with custom configuration and the system clock
    pub fn with_config(hardware: H, config: ControllerConfig) -> Self {
        Self::with_clock(hardware, SystemClock, config)
    }
}

impl<H: Hardware, C: Clock> InputController<H, C> {
    pub fn with_clock(hardware: H, clock: C, config: ControllerConfig) -> Self {
        let keyboard = Keyboard::new(config.keyboard.clone());
        Self {
            hardware,
            clock,
            config,
            keyboard,
            players: Vec::with_capacity(MAX_PLAYERS),
            combined_pads: Vec::with_capacity(MAX_PLAYERS),
            combined_last_state: None,
        }
    }

    /// Present joystick slots in enumeration order
    fn present_joysticks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.config.max_joysticks).filter(|slot| self.hardware.joystick_present(*slot))
    }

    /// Bind devices to player slots: joysticks first, in enumeration order,
    /// then the keyboard if a slot is still free.
    ///
    /// Call once per session; calling again appends to the existing slots.
    pub fn assign_devices(&mut self) {
        let joysticks: Vec<usize> = self.present_joysticks().collect();
        debug!("Found {} joystick(s): {:?}", joysticks.len(), joysticks);

        for slot in joysticks {
            if self.players.len() >= MAX_PLAYERS {
                break;
            }
            let gamepad = Gamepad::new(slot, &self.hardware, &self.config);
            self.push_player(gamepad.into());
        }

        if self.players.len() < MAX_PLAYERS {
            self.push_player(self.keyboard.clone().into());
        }
    }

    fn push_player(&mut self, device: Device) {
        match device.joystick_slot() {
            Some(slot) => info!(
                "Player {} assigned to {} (joystick {})",
                self.players.len() + 1,
                device.name(),
                slot
            ),
            None => info!("Player {} assigned to {}", self.players.len() + 1, device.name()),
        }
        self.players.push(PlayerSlot::new(device));
    }

    /// True if at least one joystick is present (keyboard + joystick = 2 devices)
    pub fn has_two_or_more_devices(&self) -> bool {
        self.present_joysticks().next().is_some()
    }

    /// Number of assigned player slots
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    fn player(&self, index: usize) -> Result<&PlayerSlot, InputError> {
        self.players.get(index).ok_or(InputError::InvalidPlayerIndex {
            index,
            assigned: self.players.len(),
        })
    }

    /// Sample a player's device
    pub fn device_state(&self, player_index: usize) -> Result<DeviceState, InputError> {
        let player = self.player(player_index)?;
        Ok(player.device.state(&self.hardware))
    }

    /// Name of a player's device
    pub fn device_name(&self, player_index: usize) -> Result<String, InputError> {
        Ok(self.player(player_index)?.device.name().to_string())
    }

    /// Rapid-fire phase of a player's button
    pub fn rapid_fire_phase(&self, player_index: usize) -> Result<RapidFirePhase, InputError> {
        Ok(self.player(player_index)?.rapid_fire.phase())
    }

    /// Poll a player's device and diff it against the previous poll.
    ///
    /// Returns `Ok(None)` on the first poll of a slot: there is nothing to
    /// compare against yet, and the sample becomes the baseline.
    pub fn ui_events(&mut self, player_index: usize) -> Result<Option<UiEventState>, InputError> {
        let now = self.clock.now();
        let timing = self.config.rapid_fire;
        let assigned = self.players.len();
        let player = self
            .players
            .get_mut(player_index)
            .ok_or(InputError::InvalidPlayerIndex {
                index: player_index,
                assigned,
            })?;

        let new_state = player.device.state(&self.hardware);
        let Some(prev_state) = player.last_state.replace(new_state) else {
            return Ok(None);
        };

        let fired = player
            .rapid_fire
            .update(new_state.is_button_pressed(), now, &timing);
        let events = UiEventState::with_rapid_fire(&prev_state, &new_state, fired);
        if events.any() {
            trace!("Player {} events: {:?}", player_index + 1, events);
        }

        Ok(Some(events))
    }

    /// Merge of the keyboard and the first two present joysticks,
    /// independent of player assignment
    pub fn combined_state(&mut self) -> DeviceState {
        self.refresh_combined_pads();
        self.combined_pads
            .iter()
            .map(|gamepad| gamepad.state(&self.hardware))
            .fold(self.keyboard.state(&self.hardware), DeviceState::combine)
    }

    /// Keep one gamepad per present slot. Pads that stay present are reused,
    /// so names are read and axis modes picked once per connection.
    fn refresh_combined_pads(&mut self) {
        let present: Vec<usize> = self.present_joysticks().take(MAX_PLAYERS).collect();
        if self.combined_pads.iter().map(Gamepad::slot).eq(present.iter().copied()) {
            return;
        }

        let mut cached = std::mem::take(&mut self.combined_pads);
        for slot in present {
            let gamepad = match cached.iter().position(|pad| pad.slot() == slot) {
                Some(i) => cached.swap_remove(i),
                None => Gamepad::new(slot, &self.hardware, &self.config),
            };
            self.combined_pads.push(gamepad);
        }
        debug!(
            "Combined view reads joystick(s) {:?}",
            self.combined_pads.iter().map(Gamepad::slot).collect::<Vec<_>>()
        );
    }

    /// Menu events from the combined view. Buttons are plain edges, no repeat.
    pub fn ui_events_combined(&mut self) -> Option<UiEventState> {
        let new_state = self.combined_state();
        let prev_state = self.combined_last_state.replace(new_state)?;

        let events = UiEventState::with_button_edge(&prev_state, &new_state);
        if events.any() {
            trace!("Combined events: {:?}", events);
        }
        Some(events)
    }

    /// Keyboard plus every present joystick, for device pickers
    pub fn device_inventory(&self) -> Vec<DeviceInfo> {
        let keyboard = DeviceInfo {
            name: KEYBOARD_NAME.to_string(),
            joystick_slot: None,
        };
        let joysticks = self.present_joysticks().map(|slot| DeviceInfo {
            name: self.hardware.joystick_name(slot),
            joystick_slot: Some(slot),
        });

        std::iter::once(keyboard).chain(joysticks).collect()
    }

    /// Forget every baseline and rapid-fire state; assignments are kept.
    /// The next poll of each slot yields no event.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.last_state = None;
            player.rapid_fire.reset();
        }
        self.combined_last_state = None;
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Mutable access for the host loop (e.g. feeding key events)
    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
