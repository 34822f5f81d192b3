//! Page components.

pub mod features;
pub mod rain_host;
pub mod waitlist_form;
