//! Shared constants for the rain crate.

// ── Glyphs ──────────────────────────────────────────────────────

/// Fixed character set: katakana, digits, and uppercase Latin letters.
pub const GLYPHS: &str = "アカサタナハマヤラワガザダバパイキシチニヒミリヰギジヂビピウクスツヌフムユルグズヅブプエケセテネヘメレヱゲゼデベペオコソトノホモヨロヲゴゾドボポヴッン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Glyph cell size in CSS pixels; also the column width and row height.
pub const FONT_SIZE_PX: f64 = 14.0;

/// Canvas font shorthand matching [`FONT_SIZE_PX`].
pub const GLYPH_FONT: &str = "14px monospace";

// ── Timing ──────────────────────────────────────────────────────

/// Milliseconds between animation ticks.
pub const TICK_MS: u32 = 35;

// ── Painting ────────────────────────────────────────────────────

/// Translucent black painted over the whole frame each tick. The low alpha
/// fades earlier frames gradually instead of clearing them, which is what
/// produces the glyph trails.
pub const FADE_FILL: &str = "rgba(0, 0, 0, 0.04)";

/// Glyph fill color.
pub const GLYPH_COLOR: &str = "#00ff00";

/// A drop past the bottom edge resets only when a uniform draw exceeds
/// this threshold (~2.5% chance per tick), staggering column restarts.
pub const RESET_CHANCE_THRESHOLD: f64 = 0.975;
