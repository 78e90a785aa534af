//! Invaders game state and entity types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::Aabb;

/// Ship dimensions and speed (px/frame)
pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 20.0;
pub const SHIP_SPEED: f32 = 8.0;
/// Bullet dimensions and speed (px/frame, upward)
pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 10.0;
/// Invader grid geometry
pub const INVADER_WIDTH: f32 = 50.0;
pub const INVADER_HEIGHT: f32 = 30.0;
pub const INVADER_PADDING: f32 = 20.0;
pub const INVADER_OFFSET_TOP: f32 = 50.0;
pub const INVADER_COLUMNS: u32 = 8;
/// The grid marches 1 px/frame and drops this much on edge contact
pub const INVADER_DESCENT: f32 = 20.0;
/// Wave escalation: rows start at 3 and cap at 5
pub const START_ROWS: u32 = 3;
pub const MAX_ROWS: u32 = 5;
/// Points per invader destroyed
pub const INVADER_SCORE: u64 = 100;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub bounds: Aabb,
}

impl Ship {
    /// Centered at the bottom of the canvas
    pub fn spawn(canvas_w: f32, canvas_h: f32) -> Self {
        Self {
            bounds: Aabb::new(
                canvas_w / 2.0 - SHIP_WIDTH / 2.0,
                canvas_h - 50.0,
                SHIP_WIDTH,
                SHIP_HEIGHT,
            ),
        }
    }
}

/// A bullet travelling upward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub bounds: Aabb,
}

/// A grid invader; `row` is kept for per-row coloring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invader {
    pub bounds: Aabb,
    pub row: u32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub canvas: Vec2,
    pub score: u64,
    /// Invader rows in the current wave
    pub rows: u32,
    pub phase: GamePhase,
    /// March direction, +1.0 or -1.0
    pub direction: f32,
    pub time_ticks: u64,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub invaders: Vec<Invader>,
}

impl GameState {
    pub fn new(canvas_w: f32, canvas_h: f32) -> Self {
        let mut state = Self {
            canvas: Vec2::new(canvas_w, canvas_h),
            score: 0,
            rows: START_ROWS,
            phase: GamePhase::Playing,
            direction: 1.0,
            time_ticks: 0,
            ship: Ship::spawn(canvas_w, canvas_h),
            bullets: Vec::new(),
            invaders: Vec::new(),
        };
        state.spawn_wave();
        state
    }

    /// Rebuild the invader grid for the current row count
    pub fn spawn_wave(&mut self) {
        self.direction = 1.0;
        self.bullets.clear();
        self.invaders.clear();
        for r in 0..self.rows {
            for c in 0..INVADER_COLUMNS {
                let x = c as f32 * (INVADER_WIDTH + INVADER_PADDING) + INVADER_PADDING;
                let y = r as f32 * (INVADER_HEIGHT + INVADER_PADDING) + INVADER_OFFSET_TOP;
                self.invaders.push(Invader {
                    bounds: Aabb::new(x, y, INVADER_WIDTH, INVADER_HEIGHT),
                    row: r,
                });
            }
        }
    }

    /// Fire a bullet from the ship's top center
    pub fn shoot(&mut self) {
        let ship = &self.ship.bounds;
        self.bullets.push(Bullet {
            bounds: Aabb::new(
                ship.pos.x + ship.size.x / 2.0 - BULLET_WIDTH / 2.0,
                ship.pos.y,
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ),
        });
    }

    /// Full reset: score, rows, wave, ship position
    pub fn restart(&mut self) {
        log::info!("Restarting invaders session");
        self.score = 0;
        self.rows = START_ROWS;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.ship = Ship::spawn(self.canvas.x, self.canvas.y);
        self.spawn_wave();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_grid() {
        let state = GameState::new(800.0, 500.0);
        assert_eq!(state.invaders.len(), (START_ROWS * INVADER_COLUMNS) as usize);
        let first = &state.invaders[0].bounds;
        assert_eq!(first.pos.x, INVADER_PADDING);
        assert_eq!(first.pos.y, INVADER_OFFSET_TOP);
    }

    #[test]
    fn test_ship_spawns_centered() {
        let state = GameState::new(800.0, 500.0);
        assert_eq!(state.ship.bounds.pos.x, 375.0);
        assert_eq!(state.ship.bounds.pos.y, 450.0);
    }

    #[test]
    fn test_shoot_spawns_centered_bullet() {
        let mut state = GameState::new(800.0, 500.0);
        state.shoot();
        assert_eq!(state.bullets.len(), 1);
        let bullet = &state.bullets[0].bounds;
        assert_eq!(bullet.pos.x, 375.0 + 25.0 - 2.5);
        assert_eq!(bullet.pos.y, 450.0);
    }
}
