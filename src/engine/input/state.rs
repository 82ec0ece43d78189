// Normalized per-device input snapshot

use super::action::Action;
use crate::core::math::Direction;

/// Instantaneous state of one device at one polling instant.
///
/// Flags are independent: nothing stops a device from reporting up and down
/// at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceState {
    // Movement
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,

    // Buttons
    pub fire: bool,
    pub grenade: bool,
    pub weapon_next: bool,
    pub weapon_prev: bool,
}

impl DeviceState {
    /// State with every flag cleared
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        fire: false,
        grenade: false,
        weapon_next: false,
        weapon_prev: false,
    };

    /// Merge two samples: a flag is set if either sample has it
    pub fn combine(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
            fire: self.fire || other.fire,
            grenade: self.grenade || other.grenade,
            weapon_next: self.weapon_next || other.weapon_next,
            weapon_prev: self.weapon_prev || other.weapon_prev,
        }
    }

    /// True if any of fire, grenade or the weapon toggles is held
    pub fn is_button_pressed(&self) -> bool {
        self.fire || self.grenade || self.weapon_next || self.weapon_prev
    }

    /// Set a single action flag
    pub fn set(&mut self, action: Action, pressed: bool) {
        let flag = match action {
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Fire => &mut self.fire,
            Action::Grenade => &mut self.grenade,
            Action::WeaponNext => &mut self.weapon_next,
            Action::WeaponPrev => &mut self.weapon_prev,
        };
        *flag = pressed;
    }

    /// Builder-style variant of `set(action, true)`
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    /// Copy movement flags from a stick direction
    pub fn set_direction(&mut self, direction: Direction) {
        self.up = direction.up;
        self.down = direction.down;
        self.left = direction.left;
        self.right = direction.right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every one of the 256 flag combinations
    fn all_states() -> impl Iterator<Item = DeviceState> {
        (0u16..256).map(|bits| {
            let mut state = DeviceState::NONE;
            for (i, action) in Action::ALL.iter().enumerate() {
                state.set(*action, bits & (1 << i) != 0);
            }
            state
        })
    }

    #[test]
    fn test_default_is_all_false() {
        assert_eq!(DeviceState::default(), DeviceState::NONE);
        assert!(!DeviceState::default().is_button_pressed());
    }

    #[test]
    fn test_all_states_are_distinct() {
        let states: std::collections::HashSet<_> = all_states().collect();
        assert_eq!(states.len(), 256);
    }

    #[test]
    fn test_combine_is_or() {
        let a = DeviceState::NONE.with(Action::Up).with(Action::Fire);
        let b = DeviceState::NONE.with(Action::Left);
        let merged = a.combine(b);

        assert!(merged.up && merged.fire && merged.left);
        assert!(!merged.down && !merged.right && !merged.grenade);
    }

    #[test]
    fn test_combine_commutative_and_idempotent() {
        for a in all_states() {
            assert_eq!(a.combine(a), a);
            for b in all_states() {
                assert_eq!(a.combine(b), b.combine(a));
            }
        }
    }

    #[test]
    fn test_combine_associative() {
        // Stride through the combinations to keep the triple loop small
        let sample: Vec<_> = all_states().step_by(7).collect();
        for a in &sample {
            for b in &sample {
                for c in &sample {
                    assert_eq!(a.combine(*b).combine(*c), a.combine(b.combine(*c)));
                }
            }
        }
    }

    #[test]
    fn test_combine_with_none_is_identity() {
        for a in all_states() {
            assert_eq!(a.combine(DeviceState::NONE), a);
        }
    }

    #[test]
    fn test_is_button_pressed() {
        assert!(!DeviceState::NONE.is_button_pressed());
        assert!(!DeviceState::NONE
            .with(Action::Up)
            .with(Action::Down)
            .with(Action::Left)
            .with(Action::Right)
            .is_button_pressed());

        for action in [Action::Fire, Action::Grenade, Action::WeaponNext, Action::WeaponPrev] {
            assert!(DeviceState::NONE.with(action).is_button_pressed());
        }
    }

    #[test]
    fn test_set_touches_one_flag() {
        let mut seen = std::collections::HashSet::new();
        for action in Action::ALL {
            let mut state = DeviceState::NONE;
            state.set(action, true);
            assert_ne!(state, DeviceState::NONE);
            assert!(seen.insert(state), "{action:?} shares a flag");

            state.set(action, false);
            assert_eq!(state, DeviceState::NONE);
        }
    }

    #[test]
    fn test_set_direction() {
        let mut state = DeviceState::NONE.with(Action::Fire).with(Action::Down);
        state.set_direction(Direction::UP_LEFT);

        assert!(state.up && state.left);
        assert!(!state.down && !state.right);
        assert!(state.fire, "Buttons are untouched");
    }
}
