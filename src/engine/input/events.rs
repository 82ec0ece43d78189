// Edge-triggered UI navigation events

use super::state::DeviceState;

/// Discrete menu events derived from two consecutive samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiEventState {
    pub moved_up: bool,
    pub moved_down: bool,
    pub moved_left: bool,
    pub moved_right: bool,
    pub pressed_button: bool,
}

impl UiEventState {
    /// Movement edges between two samples.
    ///
    /// An edge only fires when the other axis is idle in the new sample,
    /// so diagonals never move a menu cursor.
    fn movement(prev: &DeviceState, new: &DeviceState) -> Self {
        let horizontal = new.left || new.right;
        let vertical = new.up || new.down;

        Self {
            moved_up: !prev.up && new.up && !horizontal,
            moved_down: !prev.down && new.down && !horizontal,
            moved_left: !prev.left && new.left && !vertical,
            moved_right: !prev.right && new.right && !vertical,
            pressed_button: false,
        }
    }

    /// Events for an assigned player; the button edge comes from rapid fire
    pub fn with_rapid_fire(prev: &DeviceState, new: &DeviceState, fired: bool) -> Self {
        Self {
            pressed_button: fired,
            ..Self::movement(prev, new)
        }
    }

    /// Events for the combined pre-assignment view; plain button edge, no repeat
    pub fn with_button_edge(prev: &DeviceState, new: &DeviceState) -> Self {
        Self {
            pressed_button: !prev.is_button_pressed() && new.is_button_pressed(),
            ..Self::movement(prev, new)
        }
    }

    /// True if any event fired
    pub fn any(&self) -> bool {
        self.moved_up || self.moved_down || self.moved_left || self.moved_right || self.pressed_button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::Action;

    fn state(actions: &[Action]) -> DeviceState {
        actions
            .iter()
            .fold(DeviceState::NONE, |state, action| state.with(*action))
    }

    #[test]
    fn test_single_direction_edge() {
        let events = UiEventState::with_button_edge(&DeviceState::NONE, &state(&[Action::Up]));
        assert_eq!(
            events,
            UiEventState {
                moved_up: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_each_direction_edge() {
        let cases = [
            (Action::Up, UiEventState { moved_up: true, ..Default::default() }),
            (Action::Down, UiEventState { moved_down: true, ..Default::default() }),
            (Action::Left, UiEventState { moved_left: true, ..Default::default() }),
            (Action::Right, UiEventState { moved_right: true, ..Default::default() }),
        ];
        for (action, expected) in cases {
            let events = UiEventState::with_button_edge(&DeviceState::NONE, &state(&[action]));
            assert_eq!(events, expected, "{action:?}");
        }
    }

    #[test]
    fn test_diagonal_suppressed() {
        let events =
            UiEventState::with_button_edge(&DeviceState::NONE, &state(&[Action::Up, Action::Left]));
        assert!(!events.any());
    }

    #[test]
    fn test_diagonal_suppressed_even_when_held_axis_is_old() {
        // Holding left, then adding up: up is new but left is still active
        let events =
            UiEventState::with_button_edge(&state(&[Action::Left]), &state(&[Action::Up, Action::Left]));
        assert!(!events.moved_up);
        assert!(!events.moved_left);
    }

    #[test]
    fn test_held_direction_is_not_an_edge() {
        let up = state(&[Action::Up]);
        let events = UiEventState::with_button_edge(&up, &up);
        assert!(!events.any());
    }

    #[test]
    fn test_opposite_directions_on_one_axis() {
        // Up and down together do not suppress each other
        let events =
            UiEventState::with_button_edge(&DeviceState::NONE, &state(&[Action::Up, Action::Down]));
        assert!(events.moved_up && events.moved_down);
        assert!(!events.moved_left && !events.moved_right);
    }

    #[test]
    fn test_button_edge() {
        let fire = state(&[Action::Fire]);
        assert!(UiEventState::with_button_edge(&DeviceState::NONE, &fire).pressed_button);
        assert!(!UiEventState::with_button_edge(&fire, &fire).pressed_button);
        assert!(!UiEventState::with_button_edge(&fire, &DeviceState::NONE).pressed_button);

        // Switching buttons while holding one is not a new press
        let grenade = state(&[Action::Grenade]);
        assert!(!UiEventState::with_button_edge(&fire, &grenade).pressed_button);
    }

    #[test]
    fn test_rapid_fire_result_passed_through() {
        let fire = state(&[Action::Fire]);
        assert!(UiEventState::with_rapid_fire(&fire, &fire, true).pressed_button);
        assert!(!UiEventState::with_rapid_fire(&DeviceState::NONE, &fire, false).pressed_button);
    }

    #[test]
    fn test_button_does_not_affect_movement() {
        let events = UiEventState::with_rapid_fire(
            &DeviceState::NONE,
            &state(&[Action::Right, Action::Fire]),
            true,
        );
        assert!(events.moved_right && events.pressed_button);
        assert!(!events.moved_left && !events.moved_up && !events.moved_down);
    }
}
