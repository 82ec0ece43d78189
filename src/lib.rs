//! Per-frame input unification for a two-player arcade shooter.
//!
//! See [`engine::input`] for the device, state and event model and
//! [`engine::input::InputController`] for the per-frame entry point.

pub mod core;
pub mod engine;
