//! Small browser helpers.

pub mod viewport;
