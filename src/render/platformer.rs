//! Canvas drawing for the platformer

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::platformer::{GamePhase, GameState};

use super::{draw_game_over, fill_box};

/// Draw one frame of the platformer
pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let w = state.canvas.x as f64;
    let h = state.canvas.y as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    if state.phase == GamePhase::GameOver {
        draw_game_over(ctx, w, h, state.score);
        return;
    }

    // Background
    ctx.set_fill_style_str("#4a2cb9");
    ctx.fill_rect(0.0, 0.0, w, h);

    // Platforms; the ground strip matches the background so only its
    // outline reads
    for (idx, platform) in state.platforms.iter().enumerate() {
        let color = if idx == 0 { "#4a2cb9" } else { "#88d3ce" };
        fill_box(ctx, &platform.bounds, color);
        ctx.set_stroke_style_str("#4a2cb9");
        ctx.set_line_width(2.0);
        ctx.stroke_rect(
            platform.bounds.pos.x as f64,
            platform.bounds.pos.y as f64,
            platform.bounds.size.x as f64,
            platform.bounds.size.y as f64,
        );
    }

    for coin in &state.coins {
        let cx = (coin.bounds.pos.x + coin.bounds.size.x / 2.0) as f64;
        let cy = (coin.bounds.pos.y + coin.bounds.size.y / 2.0) as f64;
        let r = (coin.bounds.size.x / 2.0) as f64;

        ctx.set_fill_style_str("#ffbd2e");
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
        ctx.fill();

        ctx.set_stroke_style_str("#ff9a76");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, r - 2.0, 0.0, PI * 2.0);
        ctx.stroke();

        // Shine
        ctx.set_fill_style_str("#fff");
        ctx.begin_path();
        let _ = ctx.arc(cx + 2.0, cy - 2.0, 2.0, 0.0, PI * 2.0);
        ctx.fill();
    }

    for enemy in &state.enemies {
        fill_box(ctx, &enemy.bounds, "#ff5f56");

        let x = enemy.bounds.pos.x as f64;
        let y = enemy.bounds.pos.y as f64;
        let ew = enemy.bounds.size.x as f64;
        let eh = enemy.bounds.size.y as f64;

        ctx.set_fill_style_str("#000");
        ctx.fill_rect(x + 5.0, y + 8.0, 5.0, 5.0);
        ctx.fill_rect(x + ew - 10.0, y + 8.0, 5.0, 5.0);
        ctx.fill_rect(x + 8.0, y + 20.0, ew - 16.0, 3.0);
    }

    // Player with eyes and a smile
    fill_box(ctx, &state.player.bounds, "#6e45e2");
    let px = state.player.bounds.pos.x as f64;
    let py = state.player.bounds.pos.y as f64;
    let pw = state.player.bounds.size.x as f64;

    ctx.set_fill_style_str("#4a2cb9");
    ctx.fill_rect(px + 5.0, py + 10.0, 8.0, 8.0);
    ctx.fill_rect(px + pw - 13.0, py + 10.0, 8.0, 8.0);

    ctx.set_stroke_style_str("#4a2cb9");
    ctx.begin_path();
    let _ = ctx.arc(px + pw / 2.0, py + 25.0, 5.0, 0.0, PI);
    ctx.stroke();
}
