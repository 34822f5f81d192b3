//! Pages. There is exactly one: the marketing/waitlist page.

pub mod home;
