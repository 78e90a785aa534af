//! Canvas drawing for the landing-page hero banner

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::hero::HeroState;

use super::fill_box;

/// Draw one frame of the banner
pub fn draw(ctx: &CanvasRenderingContext2d, state: &HeroState) {
    let w = state.canvas.x as f64;
    let h = state.canvas.y as f64;

    ctx.set_fill_style_str("#0f0f0f");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#ffffff");
    for star in &state.stars {
        ctx.begin_path();
        let _ = ctx.arc(
            star.pos.x as f64,
            star.pos.y as f64,
            star.size as f64,
            0.0,
            PI * 2.0,
        );
        ctx.fill();
    }

    fill_box(ctx, &state.emitter, "#6e45e2");

    for drifter in &state.drifters {
        fill_box(ctx, &drifter.bounds, "#ff9a76");
    }

    ctx.set_fill_style_str("#88d3ce");
    for bullet in &state.bullets {
        ctx.begin_path();
        let _ = ctx.arc(bullet.pos.x as f64, bullet.pos.y as f64, 3.0, 0.0, PI * 2.0);
        ctx.fill();
    }
}
