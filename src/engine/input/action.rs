// Player action definitions and default bindings

use winit::keyboard::KeyCode;

/// Every input a player can produce, one per `DeviceState` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    Up,
    Down,
    Left,
    Right,

    // Buttons
    Fire,
    Grenade,
    WeaponNext,
    WeaponPrev,
}

impl Action {
    /// All actions in flag order
    pub const ALL: [Action; 8] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Fire,
        Action::Grenade,
        Action::WeaponNext,
        Action::WeaponPrev,
    ];
}

/// Default keyboard bindings (arrow keys + Space)
pub fn default_keyboard_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowUp, Action::Up),
        (KeyCode::ArrowDown, Action::Down),
        (KeyCode::ArrowLeft, Action::Left),
        (KeyCode::ArrowRight, Action::Right),
        (KeyCode::Space, Action::Fire),
        (KeyCode::KeyX, Action::Grenade),
        (KeyCode::KeyE, Action::WeaponNext),
        (KeyCode::KeyQ, Action::WeaponPrev),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Fire, Action::Fire);
        assert_ne!(Action::Fire, Action::Grenade);
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        let bindings = default_keyboard_bindings();
        for action in Action::ALL {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{action:?} has no default key"
            );
        }
    }

    #[test]
    fn test_no_duplicate_keys_in_defaults() {
        let bindings = default_keyboard_bindings();
        let mut seen_keys = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen_keys.insert(key), "Duplicate key found in default bindings");
        }
    }
}
