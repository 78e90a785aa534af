//! Space Invaders simulation
//!
//! Same rules as the platformer module: one tick per frame, per-frame
//! units, no rendering or platform dependencies.

pub mod state;
pub mod tick;

pub use state::{Bullet, GamePhase, GameState, Invader, Ship};
pub use tick::{TickInput, tick};
