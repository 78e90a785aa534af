//! Platformer game state and core simulation types
//!
//! Everything needed to replay a session deterministically lives here; the
//! RNG is never stored, only the seed it is derived from.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::geom::Aabb;

/// Gravity acceleration (px/frame^2)
pub const GRAVITY: f32 = 0.5;
/// Horizontal move speed (px/frame)
pub const PLAYER_SPEED: f32 = 5.0;
/// Jump launch speed (px/frame, applied upward)
pub const JUMP_POWER: f32 = 12.0;
/// Player box dimensions
pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Spawn point x; y is `canvas_h - SPAWN_HEIGHT`
pub const SPAWN_X: f32 = 100.0;
pub const SPAWN_HEIGHT: f32 = 200.0;
/// Coin box edge length
pub const COIN_SIZE: f32 = 15.0;
/// Enemy box edge length
pub const ENEMY_SIZE: f32 = 30.0;
/// How far an enemy patrols from its start x before turning around
pub const ENEMY_PATROL_RANGE: f32 = 150.0;
/// Ground platform thickness
pub const GROUND_HEIGHT: f32 = 20.0;
/// Starting lives
pub const START_LIVES: i32 = 3;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal until explicit restart
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Aabb,
    pub vel: Vec2,
    /// Set while airborne from a jump; cleared on any landing
    pub jumping: bool,
}

impl Player {
    /// Create the player at the spawn point
    pub fn spawn(canvas_h: f32) -> Self {
        Self {
            bounds: Aabb::new(
                SPAWN_X,
                canvas_h - SPAWN_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel: Vec2::ZERO,
            jumping: false,
        }
    }

    /// Teleport back to the spawn point (after enemy damage)
    pub fn respawn(&mut self, canvas_h: f32) {
        self.bounds.pos = Vec2::new(SPAWN_X, canvas_h - SPAWN_HEIGHT);
    }

    /// Launch a jump if grounded (discrete edge, not sampled every frame)
    pub fn jump(&mut self) {
        if !self.jumping {
            self.vel.y = -JUMP_POWER;
            self.jumping = true;
        }
    }
}

/// A static platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Aabb,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, w, h),
        }
    }
}

/// A collectible coin (no behavior, removed on player overlap)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub bounds: Aabb,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            bounds: Aabb::new(x, y, COIN_SIZE, COIN_SIZE),
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub bounds: Aabb,
    /// Patrol speed, scales with the level it was spawned on
    pub speed: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    /// Patrol anchor
    pub start_x: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, level: u32) -> Self {
        Self {
            bounds: Aabb::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            speed: 2.0 + level as f32 * 0.5,
            direction: 1.0,
            start_x: x,
        }
    }

    /// Advance one frame of back-and-forth patrol
    pub fn patrol(&mut self) {
        self.bounds.pos.x += self.speed * self.direction;
        if (self.bounds.pos.x - self.start_x).abs() > ENEMY_PATROL_RANGE {
            self.direction = -self.direction;
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; level entities derive from it
    pub seed: u64,
    /// Canvas dimensions the session was created for
    pub canvas: Vec2,
    pub score: u64,
    pub lives: i32,
    /// Current level (1-based)
    pub level: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Level-scoped collections, regenerated wholesale on level transitions
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Create a fresh session and generate level 1
    pub fn new(seed: u64, canvas_w: f32, canvas_h: f32) -> Self {
        let mut state = Self {
            seed,
            canvas: Vec2::new(canvas_w, canvas_h),
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Player::spawn(canvas_h),
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
        };
        state.regenerate();
        state
    }

    /// Derive the RNG for a given level from the session seed
    fn level_rng(&self) -> Pcg32 {
        let stream = (self.level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Pcg32::seed_from_u64(self.seed ^ stream)
    }

    /// Replace all level-scoped entities for the current level
    pub fn regenerate(&mut self) {
        let mut rng = self.level_rng();
        let (platforms, coins, enemies) =
            super::level::generate(self.level, self.canvas.x, self.canvas.y, &mut rng);
        self.platforms = platforms;
        self.coins = coins;
        self.enemies = enemies;
    }

    /// Full reset: score, lives, level, entities, player position
    pub fn restart(&mut self) {
        log::info!("Restarting platformer session (seed {})", self.seed);
        self.score = 0;
        self.lives = START_LIVES;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.player = Player::spawn(self.canvas.y);
        self.regenerate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7, 800.0, 500.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.bounds.pos.x, SPAWN_X);
        assert_eq!(state.player.bounds.pos.y, 300.0);
    }

    #[test]
    fn test_same_seed_same_level() {
        let a = GameState::new(42, 800.0, 500.0);
        let b = GameState::new(42, 800.0, 500.0);
        assert_eq!(a.platforms.len(), b.platforms.len());
        for (pa, pb) in a.platforms.iter().zip(&b.platforms) {
            assert_eq!(pa.bounds, pb.bounds);
        }
        for (ca, cb) in a.coins.iter().zip(&b.coins) {
            assert_eq!(ca.bounds, cb.bounds);
        }
    }

    #[test]
    fn test_enemy_patrol_turnaround() {
        let mut enemy = Enemy::new(100.0, 100.0, 1);
        assert_eq!(enemy.speed, 2.5);
        // Walk right until the patrol range flips the direction
        for _ in 0..100 {
            enemy.patrol();
        }
        assert_eq!(enemy.direction, -1.0);
        assert!(enemy.bounds.pos.x - enemy.start_x <= ENEMY_PATROL_RANGE + enemy.speed);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Player::spawn(500.0);
        player.jump();
        assert!(player.jumping);
        assert_eq!(player.vel.y, -JUMP_POWER);

        // A second jump mid-air does nothing
        player.vel.y = -3.0;
        player.jump();
        assert_eq!(player.vel.y, -3.0);
    }
}
