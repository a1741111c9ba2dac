//! Cross-page helpers: navigation seam and the unauthenticated redirect guard.

pub mod auth;
pub mod navigate;
