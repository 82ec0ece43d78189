// Core utilities shared by the engine: geometry and time

pub mod clock;
pub mod math;
