//! Canvas drawing for the invaders game

use web_sys::CanvasRenderingContext2d;

use crate::invaders::{GamePhase, GameState};

use super::{draw_game_over, fill_box};

/// Per-row invader colors, top row first
fn row_color(row: u32) -> &'static str {
    match row {
        0 => "#ff9a76",
        1 => "#ffbd2e",
        _ => "#27ca3f",
    }
}

/// Draw one frame of the invaders game
pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let w = state.canvas.x as f64;
    let h = state.canvas.y as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    if state.phase == GamePhase::GameOver {
        draw_game_over(ctx, w, h, state.score);
        return;
    }

    // Ship body plus skid and cockpit details
    fill_box(ctx, &state.ship.bounds, "#6e45e2");
    let sx = state.ship.bounds.pos.x as f64;
    let sy = state.ship.bounds.pos.y as f64;
    let sw = state.ship.bounds.size.x as f64;
    let sh = state.ship.bounds.size.y as f64;
    ctx.set_fill_style_str("#4a2cb9");
    ctx.fill_rect(sx, sy + sh, sw, 5.0);
    ctx.fill_rect(sx + 10.0, sy - 10.0, 30.0, 10.0);

    for bullet in &state.bullets {
        fill_box(ctx, &bullet.bounds, "#88d3ce");
    }

    for invader in &state.invaders {
        fill_box(ctx, &invader.bounds, row_color(invader.row));

        let x = invader.bounds.pos.x as f64;
        let y = invader.bounds.pos.y as f64;
        let iw = invader.bounds.size.x as f64;
        let ih = invader.bounds.size.y as f64;

        ctx.set_fill_style_str("#000");
        ctx.fill_rect(x + 10.0, y + 10.0, 8.0, 8.0);
        ctx.fill_rect(x + iw - 18.0, y + 10.0, 8.0, 8.0);
        ctx.fill_rect(x + 15.0, y + ih - 10.0, iw - 30.0, 5.0);
    }

    ctx.set_fill_style_str("#fff");
    ctx.set_font("20px Montserrat");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(&format!("Score: {}", state.score), 20.0, 30.0);
}
