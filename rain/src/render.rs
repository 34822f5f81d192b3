//! Rendering: draws one animation frame to the 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the glyph draw list produced by [`crate::engine::RainCore::tick`]
//! and produces pixels — it does not mutate any animation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::tick`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{FADE_FILL, FONT_SIZE_PX, GLYPH_COLOR, GLYPH_FONT};
use crate::engine::Glyph;

/// Draw the frame: the translucent fade layer, then this tick's glyphs.
///
/// `width` and `height` are the current canvas dimensions in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    glyphs: &[Glyph],
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    // Layer 1: translucent fade instead of a hard clear, so earlier frames
    // linger as trails.
    ctx.set_fill_style_str(FADE_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);

    // Layer 2: this tick's glyphs.
    ctx.set_fill_style_str(GLYPH_COLOR);
    ctx.set_font(GLYPH_FONT);

    let mut buf = [0_u8; 4];
    for glyph in glyphs {
        let x = glyph.column as f64 * FONT_SIZE_PX;
        let y = f64::from(glyph.row) * FONT_SIZE_PX;
        ctx.fill_text(glyph.ch.encode_utf8(&mut buf), x, y)?;
    }

    Ok(())
}
