//! Network layer: wire types and the authentication endpoint client.

pub mod api;
pub mod types;
