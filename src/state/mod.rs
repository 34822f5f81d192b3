//! Shared client-side state modules.
//!
//! The page holds exactly one piece of state worth naming: the waitlist
//! form. The background animation keeps its own transient state inside the
//! `rain` crate and never shares it with components.

pub mod waitlist;
