//! Shared engine utilities.

pub mod rng;

pub use rng::GameRng;
