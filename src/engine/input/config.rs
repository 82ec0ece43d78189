// Input configuration: key bindings, gamepad layout and timing

use super::action::{default_keyboard_bindings, Action};
use crate::core::math::FULL_DEFLECTION_EPSILON;
use std::collections::HashMap;
use std::time::Duration;
use winit::keyboard::KeyCode;

/// Number of hardware joystick slots checked during enumeration
pub const MAX_JOYSTICKS: usize = 16;

/// Keyboard bindings: maps keys to actions.
/// Several keys may drive the same action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl KeyBindings {
    /// Create an empty binding set
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create bindings from a list of (key, action) pairs
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        // A key drives at most one action
        if let Some(previous) = self.bindings.insert(key, action) {
            if let Some(keys) = self.action_to_keys.get_mut(&previous) {
                keys.retain(|k| *k != key);
            }
        }
        self.action_to_keys.entry(action).or_default().push(key);
    }

    /// Get all keys bound to an action
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.action_to_keys
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_keyboard_bindings())
    }
}

/// Axis and button ids a gamepad is read through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamepadMapping {
    pub axis_x: usize,
    pub axis_y: usize,
    pub fire: usize,
    pub grenade: usize,
    pub weapon_next: usize,
    pub weapon_prev: usize,
}

impl Default for GamepadMapping {
    fn default() -> Self {
        Self {
            axis_x: 0,
            axis_y: 1,
            fire: 0,
            grenade: 1,
            weapon_next: 5,
            weapon_prev: 4,
        }
    }
}

/// How analog sticks are interpreted
#[derive(Debug, Clone, PartialEq)]
pub struct AnalogSettings {
    /// A stick counts as fully deflected at magnitude >= 1 - epsilon
    pub epsilon: f64,

    /// Lowercase name fragments of controllers that only report -1/0/1
    pub digital_name_patterns: Vec<String>,
}

impl AnalogSettings {
    /// Check a controller name against the digital-only list (case-insensitive)
    pub fn is_digital_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.digital_name_patterns
            .iter()
            .any(|pattern| name.contains(&pattern.to_lowercase()))
    }
}

impl Default for AnalogSettings {
    fn default() -> Self {
        Self {
            epsilon: FULL_DEFLECTION_EPSILON,
            digital_name_patterns: [
                "competition pro",
                "dragonrise",
                "generic usb joystick",
                "quickshot",
                "retro",
                "arcade stick",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Auto-repeat timing for a held button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RapidFireTiming {
    /// Hold time before repeating starts
    pub initial_delay: Duration,
    /// Time between repeats once repeating
    pub repeat_interval: Duration,
}

impl Default for RapidFireTiming {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(750),
            repeat_interval: Duration::from_millis(300),
        }
    }
}

/// Everything the input controller can be tuned with
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub keyboard: KeyBindings,
    pub gamepad: GamepadMapping,
    pub analog: AnalogSettings,
    pub rapid_fire: RapidFireTiming,
    /// Joystick slots `0..max_joysticks` are enumerated
    pub max_joysticks: usize,
}

impl ControllerConfig {
    pub fn with_keyboard(mut self, keyboard: KeyBindings) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_gamepad(mut self, gamepad: GamepadMapping) -> Self {
        self.gamepad = gamepad;
        self
    }

    pub fn with_analog(mut self, analog: AnalogSettings) -> Self {
        self.analog = analog;
        self
    }

    pub fn with_rapid_fire(mut self, rapid_fire: RapidFireTiming) -> Self {
        self.rapid_fire = rapid_fire;
        self
    }

    pub fn with_max_joysticks(mut self, max_joysticks: usize) -> Self {
        self.max_joysticks = max_joysticks;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            keyboard: KeyBindings::default(),
            gamepad: GamepadMapping::default(),
            analog: AnalogSettings::default(),
            rapid_fire: RapidFireTiming::default(),
            max_joysticks: MAX_JOYSTICKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_action() {
        let mut config = KeyBindings::new();
        config.bind(KeyCode::KeyW, Action::Up);

        assert_eq!(config.keys_for(Action::Up), &[KeyCode::KeyW]);
        assert!(config.keys_for(Action::Down).is_empty());
    }

    #[test]
    fn test_multiple_keys_per_action() {
        let mut config = KeyBindings::new();
        config.bind(KeyCode::Space, Action::Fire);
        config.bind(KeyCode::ControlLeft, Action::Fire);

        let keys = config.keys_for(Action::Fire);
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&KeyCode::Space));
        assert!(keys.contains(&KeyCode::ControlLeft));
    }

    #[test]
    fn test_rebind_key() {
        let mut config = KeyBindings::new();
        config.bind(KeyCode::Space, Action::Fire);
        config.bind(KeyCode::Space, Action::Grenade);

        assert_eq!(config.keys_for(Action::Grenade), &[KeyCode::Space]);
        assert!(config.keys_for(Action::Fire).is_empty());
    }

    #[test]
    fn test_bind_same_key_twice() {
        let mut config = KeyBindings::new();
        config.bind(KeyCode::Space, Action::Fire);
        config.bind(KeyCode::Space, Action::Fire);

        assert_eq!(config.keys_for(Action::Fire), &[KeyCode::Space]);
    }

    #[test]
    fn test_default_bindings() {
        let config = KeyBindings::default();
        assert_eq!(config.keys_for(Action::Fire), &[KeyCode::Space]);
        assert_eq!(config.keys_for(Action::Up), &[KeyCode::ArrowUp]);
    }

    #[test]
    fn test_digital_name_detection_is_case_insensitive() {
        let analog = AnalogSettings::default();
        assert!(analog.is_digital_name("DragonRise Inc.   Generic   USB  Joystick  "));
        assert!(analog.is_digital_name("Competition PRO USB"));
        assert!(!analog.is_digital_name("Xbox Wireless Controller"));
        assert!(!analog.is_digital_name(""));
    }

    #[test]
    fn test_default_controller_config() {
        let config = ControllerConfig::default();
        assert_eq!(config.max_joysticks, 16);
        assert_eq!(config.rapid_fire.initial_delay, Duration::from_millis(750));
        assert_eq!(config.rapid_fire.repeat_interval, Duration::from_millis(300));
        assert_eq!(config.analog.epsilon, 0.05);
    }

    #[test]
    fn test_builder_methods() {
        let config = ControllerConfig::default()
            .with_max_joysticks(4)
            .with_keyboard(KeyBindings::new())
            .with_analog(AnalogSettings {
                epsilon: 0.1,
                digital_name_patterns: Vec::new(),
            });

        assert_eq!(config.max_joysticks, 4);
        assert!(config.keyboard.keys_for(Action::Fire).is_empty());
        assert!(!config.analog.is_digital_name("quickshot"));
    }
}
