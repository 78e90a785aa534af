//! Canvas-2D rendering
//!
//! Drawing reads simulation state and never mutates it. One file per page:
//! the platformer, the invaders game, and the landing-page hero banner.

pub mod hero;
pub mod invaders;
pub mod platformer;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geom::Aabb;

/// Fetch the 2D context of a canvas element
pub fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Fill an entity's bounding box
pub(crate) fn fill_box(ctx: &CanvasRenderingContext2d, bounds: &Aabb, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(
        bounds.pos.x as f64,
        bounds.pos.y as f64,
        bounds.size.x as f64,
        bounds.size.y as f64,
    );
}

/// Dim the whole canvas and print the game-over text block
pub(crate) fn draw_game_over(ctx: &CanvasRenderingContext2d, w: f64, h: f64, score: u64) {
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#fff");
    ctx.set_text_align("center");

    ctx.set_font("40px Montserrat");
    let _ = ctx.fill_text("GAME OVER", w / 2.0, h / 2.0 - 40.0);

    ctx.set_font("24px Montserrat");
    let _ = ctx.fill_text(&format!("Final Score: {}", score), w / 2.0, h / 2.0);

    ctx.set_font("20px Montserrat");
    let _ = ctx.fill_text("Press Restart to play again", w / 2.0, h / 2.0 + 40.0);
}
