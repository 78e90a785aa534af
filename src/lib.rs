//! Canvas Arcade - small browser arcade games
//!
//! Core modules:
//! - `platformer`: Deterministic platformer simulation (physics, collisions, levels)
//! - `invaders`: Space Invaders simulation
//! - `hero`: Decorative landing-page banner animation
//! - `render`: Canvas-2D drawing (wasm only, reads state and never mutates it)
//! - `highscores`: Per-game leaderboards
//! - `settings`: Display preferences

pub mod geom;
pub mod hero;
pub mod highscores;
pub mod invaders;
pub mod platformer;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;

pub use geom::Aabb;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. One tick corresponds to one animation
    /// frame of the per-frame unit system (speeds are px/frame).
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum catch-up ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Default game canvas dimensions (the pages size their canvases to this)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Hero banner canvas dimensions
    pub const HERO_WIDTH: f32 = 480.0;
    pub const HERO_HEIGHT: f32 = 320.0;
}
