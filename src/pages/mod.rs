//! Page-level controllers.

pub mod login;
pub mod login_flow;
