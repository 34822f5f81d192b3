use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{FONT_SIZE_PX, GLYPHS, RESET_CHANCE_THRESHOLD};
use crate::render;
use crate::rng::{MathRandom, RandomSource};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// One glyph to draw this tick. Pixel position is
/// `(column * FONT_SIZE_PX, row * FONT_SIZE_PX)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub column: usize,
    pub row: u32,
}

/// Core animation state — all logic that doesn't depend on the canvas
/// element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct RainCore {
    charset: Vec<char>,
    /// Per-column drop row counters.
    pub drops: Vec<u32>,
    pub width: f64,
    pub height: f64,
    /// When set, a resize recomputes the column vector to match the new
    /// width. Off by default: the page keeps its original columns across
    /// resizes, so a wider viewport stays partially unpainted until reload.
    pub reflow_columns_on_resize: bool,
}

impl RainCore {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            charset: GLYPHS.chars().collect(),
            drops: vec![1; column_count(width)],
            width,
            height,
            reflow_columns_on_resize: false,
        }
    }

    /// Advance every column by one step and return the glyphs to draw.
    ///
    /// Per column: one uniform draw picks the glyph; a second draw is taken
    /// only for drops already past the bottom edge, and resets the column
    /// when it exceeds [`RESET_CHANCE_THRESHOLD`]. The counter increments
    /// afterwards regardless, so a just-reset column re-enters at row 1.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> Vec<Glyph> {
        let mut frame = Vec::with_capacity(self.drops.len());
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let pick = (rng.next_f64() * self.charset.len() as f64) as usize;
            let ch = self.charset[pick.min(self.charset.len() - 1)];
            frame.push(Glyph { ch, column, row: *drop });

            if f64::from(*drop) * FONT_SIZE_PX > self.height
                && rng.next_f64() > RESET_CHANCE_THRESHOLD
            {
                *drop = 0;
            }
            *drop += 1;
        }
        frame
    }

    /// Update the viewport dimensions.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        if self.reflow_columns_on_resize {
            self.drops = vec![1; column_count(width)];
        }
    }

    /// Number of drop columns currently tracked.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.drops.len()
    }
}

/// Columns that fit the given width at the fixed glyph size.
fn column_count(width: f64) -> usize {
    (width / FONT_SIZE_PX).floor().max(0.0) as usize
}

/// The full animation engine. Wraps [`RainCore`] and owns the browser
/// canvas element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    rng: MathRandom,
    pub core: RainCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element, sized to
    /// `width` x `height` CSS pixels.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the 2D context is unavailable — the page cannot
    /// render its background without one, so this is a startup failure
    /// rather than a recoverable condition.
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        Ok(Self {
            canvas,
            ctx,
            rng: MathRandom,
            core: RainCore::new(width, height),
        })
    }

    /// Resize the canvas backing store and the core viewport together.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.core.set_viewport(width, height);
    }

    /// Advance one animation step and draw it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        let frame = self.core.tick(&mut self.rng);
        render::draw(&self.ctx, &frame, self.core.width, self.core.height)
    }
}
