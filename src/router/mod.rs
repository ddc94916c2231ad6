//! Inbound HTTP adapters.

pub mod status;
pub mod users;
