//! Deterministic platformer simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame (per-frame units, no dt)
//! - Seeded RNG only, injected into the level generator
//! - No rendering or platform dependencies

pub mod level;
pub mod state;
pub mod tick;

pub use level::generate;
pub use state::{Coin, Enemy, GamePhase, GameState, Platform, Player};
pub use tick::{StepResult, TickInput, tick};
