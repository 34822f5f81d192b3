//! Digital-rain canvas engine for the waitlist page background.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the falling-glyph animation drawn on the page's background `<canvas>`:
//! advancing one drop counter per column each tick, staggering column
//! restarts with a random draw, and painting the translucent fade that
//! leaves glyph trails behind each drop. The host UI layer is responsible
//! only for sizing the canvas, driving [`engine::Engine::tick`] on a timer,
//! and forwarding window resizes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-owning [`engine::Engine`] and testable [`engine::RainCore`] |
//! | [`render`] | Frame painting (the only module touching the 2D context) |
//! | [`rng`] | Injectable [`rng::RandomSource`] and the `Math.random()` impl |
//! | [`consts`] | Shared constants (glyph set, cell size, tick period, colors) |

pub mod consts;
pub mod engine;
pub mod render;
pub mod rng;
