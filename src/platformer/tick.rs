//! Per-frame simulation tick
//!
//! `step_player` is the pure physics & collision step: it mutates entities
//! and reports what happened as a `StepResult`. `tick` is the state machine
//! around it, applying deltas to score/lives/level and reacting to triggers.

use glam::Vec2;

use super::state::{GamePhase, GameState, GRAVITY, JUMP_POWER, PLAYER_SPEED, Player};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Jump pressed this frame (edge, not sampled)
    pub jump: bool,
    /// Restart command (edge)
    pub restart: bool,
}

/// Outcome of one physics & collision step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    pub score_delta: u64,
    pub life_delta: i32,
    /// The last coin was collected this frame
    pub level_up: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // The restart button works from any phase, matching the original
    if input.restart {
        state.restart();
        return;
    }

    // No frame processing while game over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        state.player.jump();
    }

    // Enemies patrol before player interactions are resolved
    for enemy in &mut state.enemies {
        enemy.patrol();
    }

    let result = step_player(
        &mut state.player,
        &state.platforms,
        &mut state.coins,
        &mut state.enemies,
        input,
        state.canvas,
    );

    state.score += result.score_delta;
    state.lives = (state.lives + result.life_delta).max(0);

    // The coin pass settles before the enemy pass can end the run, so a
    // level earned on the fatal frame still counts
    if result.level_up {
        state.level += 1;
        log::info!("Level up -> {}", state.level);
        state.regenerate();
    }

    if state.lives == 0 {
        log::info!(
            "Game over at level {} with score {}",
            state.level,
            state.score
        );
        state.phase = GamePhase::GameOver;
    }
}

/// One physics & collision step for the player.
///
/// Order matters and follows the frame loop exactly: gravity, horizontal
/// input, clamping, floor fall, platform landing, coin pickup, enemy
/// interaction. Side effects are confined to the passed-in entities; the
/// caller applies the returned deltas.
pub fn step_player(
    player: &mut Player,
    platforms: &[super::state::Platform],
    coins: &mut Vec<super::state::Coin>,
    enemies: &mut Vec<super::state::Enemy>,
    input: &TickInput,
    canvas: Vec2,
) -> StepResult {
    let mut result = StepResult::default();

    // Gravity, then vertical integration
    player.vel.y += GRAVITY;
    player.bounds.pos.y += player.vel.y;

    // Horizontal movement is instantaneous, no acceleration or friction
    player.vel.x = if input.left {
        -PLAYER_SPEED
    } else if input.right {
        PLAYER_SPEED
    } else {
        0.0
    };
    player.bounds.pos.x += player.vel.x;
    player.bounds.clamp_x(canvas.x);

    // Fell past the bottom of the canvas
    if player.bounds.pos.y > canvas.y {
        player.bounds.pos.y = canvas.y;
        player.vel.y = 0.0;
        player.jumping = false;
        result.life_delta -= 1;
    }

    // Platform landing: one-sided, land-from-above only. The top-edge
    // condition uses the post-move position; once a landing zeroes the
    // vertical velocity, later platforms in the iteration cannot match.
    for platform in platforms {
        let top = platform.bounds.pos.y;
        if player.bounds.bottom() > top
            && player.bounds.pos.y < top
            && player.bounds.overlaps_x(&platform.bounds)
            && player.vel.y > 0.0
        {
            player.bounds.pos.y = top - player.bounds.size.y;
            player.vel.y = 0.0;
            player.jumping = false;
        }
    }

    // Coin pickup: every overlapping coin is collected this frame
    let before = coins.len();
    let player_box = player.bounds;
    coins.retain(|coin| !player_box.overlaps(&coin.bounds));
    let collected = before - coins.len();
    result.score_delta += 10 * collected as u64;
    if collected > 0 && coins.is_empty() {
        result.level_up = true;
    }

    // Enemy interaction: stomps bounce and score, anything else hurts and
    // teleports back to spawn. Removals are applied after the read pass.
    let mut defeated: Vec<usize> = Vec::new();
    for (idx, enemy) in enemies.iter().enumerate() {
        if !player.bounds.overlaps(&enemy.bounds) {
            continue;
        }
        if player.bounds.bottom() < enemy.bounds.mid_y() && player.vel.y > 0.0 {
            defeated.push(idx);
            player.vel.y = -JUMP_POWER / 1.5;
            result.score_delta += 20;
        } else {
            result.life_delta -= 1;
            player.respawn(canvas.y);
        }
    }
    if !defeated.is_empty() {
        let mut idx = 0;
        enemies.retain(|_| {
            let keep = !defeated.contains(&idx);
            idx += 1;
            keep
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platformer::state::{Coin, Enemy, Platform, SPAWN_X};
    use proptest::prelude::*;

    const W: f32 = 800.0;
    const H: f32 = 500.0;

    /// A session with all level entities stripped out, for targeted setups
    fn bare_state() -> GameState {
        let mut state = GameState::new(123, W, H);
        state.platforms.clear();
        state.coins.clear();
        state.enemies.clear();
        state
    }

    #[test]
    fn test_floor_fall_costs_one_life() {
        let mut state = bare_state();
        let input = TickInput::default();

        for _ in 0..200 {
            tick(&mut state, &input);
            if state.lives < 3 {
                break;
            }
        }

        assert_eq!(state.lives, 2);
        assert_eq!(state.player.bounds.pos.y, H);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_lands_on_platform_from_above() {
        let mut state = bare_state();
        state.platforms.push(Platform::new(50.0, 400.0, 200.0, 15.0));
        // Player starts at y=300 above the platform and falls onto it
        let input = TickInput::default();
        for _ in 0..60 {
            tick(&mut state, &input);
        }

        assert_eq!(state.player.bounds.bottom(), 400.0);
        assert_eq!(state.player.vel.y, 0.0);
        assert!(!state.player.jumping);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_no_landing_from_below() {
        let mut state = bare_state();
        // Platform above the player; jumping up through it must not snap
        state.platforms.push(Platform::new(0.0, 250.0, W, 15.0));
        state.player.jump();

        let input = TickInput::default();
        tick(&mut state, &input);

        // Moving upward, so the land-from-above rule never fires
        assert!(state.player.vel.y < 0.0);
        assert!(state.player.bounds.pos.y < 300.0);
    }

    #[test]
    fn test_coin_pickup_scores_ten_each() {
        let mut state = bare_state();
        let p = state.player.bounds.pos;
        state.coins.push(Coin::new(p.x, p.y));
        state.coins.push(Coin::new(p.x + 10.0, p.y + 10.0));
        state.coins.push(Coin::new(700.0, 50.0)); // out of reach

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 20);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_emptying_coins_triggers_single_level_up() {
        let mut state = bare_state();
        let p = state.player.bounds.pos;
        state.coins.push(Coin::new(p.x, p.y));
        state.coins.push(Coin::new(p.x + 5.0, p.y + 5.0));

        tick(&mut state, &TickInput::default());

        // Both coins collected in one frame, exactly one level transition
        assert_eq!(state.score, 20);
        assert_eq!(state.level, 2);
        // Freshly generated level 2: 1 ground + 9 platforms, 16 coins, 4 enemies
        assert_eq!(state.platforms.len(), 10);
        assert_eq!(state.coins.len(), 16);
        assert_eq!(state.enemies.len(), 4);
    }

    #[test]
    fn test_stomp_defeats_enemy_and_bounces() {
        let mut state = bare_state();
        state.player.bounds.pos = Vec2::new(100.0, 125.0);
        state.player.vel.y = 5.0;
        let mut enemy = Enemy::new(100.0, 160.0, 1);
        enemy.speed = 0.0; // hold still for the test
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default());

        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 20);
        assert_eq!(state.lives, 3);
        assert_eq!(state.player.vel.y, -JUMP_POWER / 1.5);
    }

    #[test]
    fn test_side_hit_costs_life_and_respawns() {
        let mut state = bare_state();
        state.player.bounds.pos = Vec2::new(400.0, 290.0);
        let mut enemy = Enemy::new(400.0, 300.0, 1);
        enemy.speed = 0.0;
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.lives, 2);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.player.bounds.pos.x, SPAWN_X);
        assert_eq!(state.player.bounds.pos.y, H - 200.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_level_earned_on_fatal_frame_still_counts() {
        let mut state = bare_state();
        state.lives = 1;
        state.player.bounds.pos = Vec2::new(400.0, 290.0);
        // Last coin and a lethal side hit resolve in the same frame
        state.coins.push(Coin::new(400.0, 300.0));
        let mut enemy = Enemy::new(400.0, 300.0, 1);
        enemy.speed = 0.0;
        state.enemies.push(enemy);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 10);
        // The coin pass settled first: level advanced and regenerated
        assert_eq!(state.level, 2);
        assert_eq!(state.platforms.len(), 10);
    }

    #[test]
    fn test_game_over_is_terminal_until_restart() {
        let mut state = bare_state();
        state.lives = 1;

        // Fall off the bottom to lose the last life
        let input = TickInput::default();
        for _ in 0..200 {
            tick(&mut state, &input);
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);

        // Frozen: no frame processing while game over
        let ticks = state.time_ticks;
        let score = state.score;
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.score, score);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = bare_state();
        state.score = 400;
        state.lives = 0;
        state.level = 4;
        state.phase = GamePhase::GameOver;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.level, 1);
        assert_eq!(state.platforms.len(), 8);
        assert_eq!(state.coins.len(), 13);
        assert_eq!(state.enemies.len(), 3);
        assert_eq!(state.player.bounds.pos, Vec2::new(SPAWN_X, H - 200.0));
    }

    proptest! {
        #[test]
        fn prop_player_x_always_clamped(
            seed in 0u64..500,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..300),
        ) {
            let mut state = GameState::new(seed, W, H);
            for (left, right, jump) in moves {
                let input = TickInput { left, right, jump, restart: false };
                tick(&mut state, &input);
                prop_assert!(state.player.bounds.pos.x >= 0.0);
                prop_assert!(state.player.bounds.right() <= W);
            }
        }
    }
}
