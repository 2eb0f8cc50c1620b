#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod render;
mod settings;
mod snapshot;

pub use settings::{ensure_finite, SettingsError, SimulationSettings, SpeedClampMode};
pub use snapshot::{AgentSnapshot, FlockSnapshot, Position, Viewport};
