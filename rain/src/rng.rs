//! Random number sources for glyph selection and column resets.
//!
//! The engine takes its randomness through the [`RandomSource`] trait so
//! tests can substitute a fixed sequence and assert exact glyph choices
//! and reset timing.

/// A source of uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
