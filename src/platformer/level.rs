//! Level generation
//!
//! Produces the platform/coin/enemy set for a level. The RNG is injected so
//! tests and replays can supply a seeded generator; only the statistical
//! shape matters, not exact values.

use rand::Rng;

use super::state::{COIN_SIZE, Coin, ENEMY_SIZE, Enemy, GROUND_HEIGHT, Platform};

/// Thickness of generated (non-ground) platforms
const PLATFORM_HEIGHT: f32 = 15.0;
/// Generated platform widths fall in [MIN_WIDTH, MIN_WIDTH + WIDTH_SPREAD)
const MIN_WIDTH: f32 = 80.0;
const WIDTH_SPREAD: f32 = 100.0;
/// Vertical band for generated platforms, measured up from the canvas bottom
const BAND_TOP: f32 = 400.0;
const BAND_BOTTOM: f32 = 100.0;

/// Generate all level-scoped entities for `level` (1-based).
///
/// Emits one full-width ground platform, `5 + 2*level` floating platforms,
/// `10 + 3*level` coins perched on platforms (ground included), and
/// `min(2 + level, 5)` enemies perched on non-ground platforms only.
pub fn generate(
    level: u32,
    canvas_w: f32,
    canvas_h: f32,
    rng: &mut impl Rng,
) -> (Vec<Platform>, Vec<Coin>, Vec<Enemy>) {
    let mut platforms = Vec::new();

    // Ground spans the full canvas width
    platforms.push(Platform::new(
        0.0,
        canvas_h - GROUND_HEIGHT,
        canvas_w,
        GROUND_HEIGHT,
    ));

    let platform_count = 5 + 2 * level as usize;
    for _ in 0..platform_count {
        let width = rng.random_range(MIN_WIDTH..MIN_WIDTH + WIDTH_SPREAD);
        let x = rng.random_range(0.0..canvas_w - width);
        let y = rng.random_range(canvas_h - BAND_TOP..canvas_h - BAND_BOTTOM);
        platforms.push(Platform::new(x, y, width, PLATFORM_HEIGHT));
    }

    // Coins sit just above a uniformly chosen platform, ground included
    let coin_count = 10 + 3 * level as usize;
    let mut coins = Vec::with_capacity(coin_count);
    for _ in 0..coin_count {
        let platform = &platforms[rng.random_range(0..platforms.len())];
        let x = platform.bounds.pos.x + rng.random_range(0.0..platform.bounds.size.x - COIN_SIZE);
        let y = platform.bounds.pos.y - 20.0;
        coins.push(Coin::new(x, y));
    }

    // Enemies only patrol floating platforms, never the ground tier
    let enemy_count = (2 + level).min(5) as usize;
    let mut enemies = Vec::with_capacity(enemy_count);
    for _ in 0..enemy_count {
        let platform = &platforms[rng.random_range(1..platforms.len())];
        let x = platform.bounds.pos.x + rng.random_range(0.0..platform.bounds.size.x - ENEMY_SIZE);
        let y = platform.bounds.pos.y - ENEMY_SIZE;
        enemies.push(Enemy::new(x, y, level));
    }

    (platforms, coins, enemies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const W: f32 = 800.0;
    const H: f32 = 500.0;

    #[test]
    fn test_level_one_counts() {
        let mut rng = Pcg32::seed_from_u64(1);
        let (platforms, coins, enemies) = generate(1, W, H, &mut rng);
        assert_eq!(platforms.len(), 1 + 7);
        assert_eq!(coins.len(), 13);
        assert_eq!(enemies.len(), 3);
    }

    #[test]
    fn test_level_three_counts() {
        let mut rng = Pcg32::seed_from_u64(2);
        let (platforms, coins, enemies) = generate(3, W, H, &mut rng);
        assert_eq!(platforms.len(), 1 + 11);
        assert_eq!(coins.len(), 19);
        assert_eq!(enemies.len(), 5);
    }

    #[test]
    fn test_ground_platform_shape() {
        let mut rng = Pcg32::seed_from_u64(3);
        let (platforms, _, _) = generate(1, W, H, &mut rng);
        let ground = &platforms[0].bounds;
        assert_eq!(ground.pos.x, 0.0);
        assert_eq!(ground.size.x, W);
        assert_eq!(ground.pos.y, H - GROUND_HEIGHT);
    }

    #[test]
    fn test_enemies_never_on_ground() {
        // Ground-perched enemies would sit at H - GROUND_HEIGHT - ENEMY_SIZE;
        // floating platforms all top out well above that.
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let (_, _, enemies) = generate(2, W, H, &mut rng);
            for enemy in &enemies {
                assert!(enemy.bounds.pos.y < H - BAND_BOTTOM);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_generator_shape(level in 1u32..12, seed in 0u64..1000) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let (platforms, coins, enemies) = generate(level, W, H, &mut rng);

            prop_assert_eq!(platforms.len(), 1 + 5 + 2 * level as usize);
            prop_assert_eq!(coins.len(), 10 + 3 * level as usize);
            prop_assert_eq!(enemies.len(), (2 + level).min(5) as usize);

            // Every platform is fully on-screen with positive extent
            for p in &platforms {
                prop_assert!(p.bounds.size.x > 0.0 && p.bounds.size.y > 0.0);
                prop_assert!(p.bounds.pos.x >= 0.0);
                prop_assert!(p.bounds.right() <= W);
            }
            // Every coin sits within its platform band horizontally
            for c in &coins {
                prop_assert!(c.bounds.pos.x >= 0.0);
                prop_assert!(c.bounds.right() <= W);
            }
        }
    }
}
