//! Landing-page hero banner animation
//!
//! Purely decorative: a scrolling starfield, a few drifting saucers, and an
//! emitter that occasionally fires a bullet. Still modeled as a proper
//! stepped simulation with an injected RNG so it stays testable.

use glam::Vec2;
use rand::Rng;

use crate::geom::Aabb;

pub const STAR_COUNT: usize = 50;
pub const DRIFTER_COUNT: usize = 8;
/// Chance per frame that the emitter fires
pub const FIRE_CHANCE: f64 = 0.05;
/// Bullet climb speed (px/frame)
pub const BULLET_SPEED: f32 = 5.0;

/// A background star scrolling downward
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// A saucer bouncing horizontally across the banner
#[derive(Debug, Clone)]
pub struct Drifter {
    pub bounds: Aabb,
    pub vel_x: f32,
}

/// A bullet rising from the emitter
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
}

/// Banner animation state
#[derive(Debug, Clone)]
pub struct HeroState {
    pub canvas: Vec2,
    /// The little ship at the bottom that fires bullets
    pub emitter: Aabb,
    pub stars: Vec<Star>,
    pub drifters: Vec<Drifter>,
    pub bullets: Vec<Bullet>,
}

impl HeroState {
    pub fn new(canvas_w: f32, canvas_h: f32, rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0.0..canvas_w),
                    rng.random_range(0.0..canvas_h),
                ),
                size: rng.random_range(1.0..3.0),
                speed: rng.random_range(1.0..3.0),
            })
            .collect();

        let drifters = (0..DRIFTER_COUNT)
            .map(|_| Drifter {
                bounds: Aabb::new(
                    rng.random_range(0.0..canvas_w - 30.0),
                    rng.random_range(0.0..canvas_h / 2.0),
                    30.0,
                    20.0,
                ),
                vel_x: rng.random_range(-1.0..1.0),
            })
            .collect();

        Self {
            canvas: Vec2::new(canvas_w, canvas_h),
            emitter: Aabb::new(canvas_w / 2.0 - 15.0, canvas_h - 40.0, 30.0, 15.0),
            stars,
            drifters,
            bullets: Vec::new(),
        }
    }

    /// Advance the banner by one frame
    pub fn tick(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.pos.y += star.speed;
            if star.pos.y > self.canvas.y {
                star.pos.y = 0.0;
                star.pos.x = rng.random_range(0.0..self.canvas.x);
            }
        }

        for drifter in &mut self.drifters {
            drifter.bounds.pos.x += drifter.vel_x;
            if drifter.bounds.pos.x <= 0.0 || drifter.bounds.right() >= self.canvas.x {
                drifter.vel_x = -drifter.vel_x;
            }
        }

        for bullet in &mut self.bullets {
            bullet.pos.y -= BULLET_SPEED;
        }
        self.bullets.retain(|b| b.pos.y >= 0.0);

        if rng.random_bool(FIRE_CHANCE) {
            self.bullets.push(Bullet {
                pos: Vec2::new(self.emitter.pos.x + self.emitter.size.x / 2.0, self.emitter.pos.y),
            });
        }
    }
}
