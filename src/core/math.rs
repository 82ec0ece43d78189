// Stick geometry: deflection and angle-to-direction mapping
//
// Axis convention follows joystick hardware: x grows to the right, y grows
// downwards, so a stick pushed up reads y = -1.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_8, TAU};

/// Default tolerance for "fully deflected" (cheap sticks rarely reach 1.0)
pub const FULL_DEFLECTION_EPSILON: f64 = 0.05;

/// Cardinal movement flags produced by a stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Direction {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const UP: Self = Self::new(true, false, false, false);
    pub const DOWN: Self = Self::new(false, true, false, false);
    pub const LEFT: Self = Self::new(false, false, true, false);
    pub const RIGHT: Self = Self::new(false, false, false, true);
    pub const UP_LEFT: Self = Self::new(true, false, true, false);
    pub const UP_RIGHT: Self = Self::new(true, false, false, true);
    pub const DOWN_LEFT: Self = Self::new(false, true, true, false);
    pub const DOWN_RIGHT: Self = Self::new(false, true, false, true);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }
}

/// Upper bound (inclusive) of each 45° sector, lowest angle first.
/// Angles above the last bound wrap around to `RIGHT`.
const SECTORS: [(f64, Direction); 8] = [
    (FRAC_PI_8, Direction::RIGHT),
    (3.0 * FRAC_PI_8, Direction::UP_RIGHT),
    (5.0 * FRAC_PI_8, Direction::UP),
    (7.0 * FRAC_PI_8, Direction::UP_LEFT),
    (9.0 * FRAC_PI_8, Direction::LEFT),
    (11.0 * FRAC_PI_8, Direction::DOWN_LEFT),
    (13.0 * FRAC_PI_8, Direction::DOWN),
    (15.0 * FRAC_PI_8, Direction::DOWN_RIGHT),
];

/// Distance of the stick from its center
pub fn stick_magnitude(stick: DVec2) -> f64 {
    stick.length()
}

/// Check whether the stick is pushed to (nearly) the edge of its range
pub fn is_stick_moved_fully(stick: DVec2, epsilon: f64) -> bool {
    stick_magnitude(stick) >= 1.0 - epsilon
}

/// Stick angle in `[0, 2π)`, counter-clockwise with 0 = right and π/2 = up
pub fn stick_angle(stick: DVec2) -> f64 {
    let angle = (-stick.y).atan2(stick.x);
    let angle = if angle < 0.0 { angle + TAU } else { angle };

    // A tiny negative angle can round up to exactly TAU
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// Map an angle in `[0, 2π)` to one of eight directions.
///
/// Sector boundaries sit at odd multiples of π/8. A boundary angle belongs
/// to the lower sector, since sectors are tested lowest angle first.
pub fn angle_to_direction(angle: f64) -> Direction {
    SECTORS
        .iter()
        .find(|(upper, _)| angle <= *upper)
        .map(|(_, direction)| *direction)
        .unwrap_or(Direction::RIGHT)
}

/// Movement flags for an analog stick; partial tilts report no movement
pub fn stick_direction(stick: DVec2, epsilon: f64) -> Direction {
    if is_stick_moved_fully(stick, epsilon) {
        angle_to_direction(stick_angle(stick))
    } else {
        Direction::NONE
    }
}
