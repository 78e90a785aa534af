//! Per-frame simulation tick for the invaders game

use super::state::{
    BULLET_SPEED, GamePhase, GameState, INVADER_DESCENT, INVADER_SCORE, MAX_ROWS, SHIP_SPEED,
};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Shoot pressed this frame (edge)
    pub shoot: bool,
    /// Restart command (edge)
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    // Ship movement, clamped to the canvas
    if input.left {
        state.ship.bounds.pos.x -= SHIP_SPEED;
    }
    if input.right {
        state.ship.bounds.pos.x += SHIP_SPEED;
    }
    state.ship.bounds.clamp_x(state.canvas.x);

    if input.shoot {
        state.shoot();
    }

    step_bullets(state);
    step_invaders(state);
}

/// Move bullets upward, cull offscreen ones, resolve invader hits
fn step_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.bounds.pos.y -= BULLET_SPEED;
    }

    // Read pass: pair each surviving bullet with at most one invader
    let mut spent_bullets: Vec<usize> = Vec::new();
    let mut hit_invaders: Vec<usize> = Vec::new();
    for (b_idx, bullet) in state.bullets.iter().enumerate() {
        if bullet.bounds.pos.y < 0.0 {
            spent_bullets.push(b_idx);
            continue;
        }
        for (i_idx, invader) in state.invaders.iter().enumerate() {
            if hit_invaders.contains(&i_idx) {
                continue;
            }
            if bullet.bounds.overlaps(&invader.bounds) {
                spent_bullets.push(b_idx);
                hit_invaders.push(i_idx);
                state.score += INVADER_SCORE;
                break;
            }
        }
    }

    if !spent_bullets.is_empty() {
        let mut idx = 0;
        state.bullets.retain(|_| {
            let keep = !spent_bullets.contains(&idx);
            idx += 1;
            keep
        });
    }
    if !hit_invaders.is_empty() {
        let mut idx = 0;
        state.invaders.retain(|_| {
            let keep = !hit_invaders.contains(&idx);
            idx += 1;
            keep
        });
    }
}

/// March the grid, reverse and descend on edge contact, detect loss,
/// escalate to the next wave when the grid is cleared
fn step_invaders(state: &mut GameState) {
    let mut hit_edge = false;

    for invader in &mut state.invaders {
        invader.bounds.pos.x += state.direction;

        if (state.direction > 0.0 && invader.bounds.right() > state.canvas.x)
            || (state.direction < 0.0 && invader.bounds.pos.x < 0.0)
        {
            hit_edge = true;
        }

        if invader.bounds.bottom() > state.ship.bounds.pos.y {
            state.phase = GamePhase::GameOver;
        }
    }

    if state.phase == GamePhase::GameOver {
        log::info!("Invaders reached the ship, score {}", state.score);
        return;
    }

    if hit_edge {
        state.direction = -state.direction;
        for invader in &mut state.invaders {
            invader.bounds.pos.y += INVADER_DESCENT;
        }
    }

    if state.invaders.is_empty() {
        state.rows = (state.rows + 1).min(MAX_ROWS);
        log::info!("Wave cleared, next wave has {} rows", state.rows);
        state.spawn_wave();
    }
}
