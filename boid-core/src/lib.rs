#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod behavior;
mod boid;
mod config;
mod flock;
mod vector;

pub use boid::Boid;
pub use config::{BoidConfig, Bounds, SpeedClamp};
pub use flock::{Flock, INITIAL_SPEED};
pub use vector::Vector2D;
