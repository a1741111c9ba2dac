//! Client-side state for the login flow.
//!
//! DESIGN
//! ======
//! `login` is local to one login page (form fields and the loading flag);
//! `session` is shared across views and owns the access token once issued.

pub mod login;
pub mod session;
