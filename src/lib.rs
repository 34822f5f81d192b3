//! # recipe-waitlist
//!
//! Leptos + WASM single-page marketing site for the Recipe Sharing
//! waitlist. One page: a hero header, an email-capture waitlist form with
//! a local thank-you toggle, a static features grid, and the animated
//! "digital rain" background.
//!
//! The background animation itself lives in the `rain` crate; this crate
//! drives it through the [`components::rain_host::RainHost`] bridge
//! component and owns everything the user reads or types into.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
