//! # mentor-login
//!
//! Login flow for the mentorship dashboard: collect credentials, exchange
//! them for an access token at `POST /api/login`, hand the token to a shared
//! session store, and navigate to the authenticated landing page.
//!
//! The crate is split the same way the UI is: `net` talks to the
//! authentication endpoint, `state` holds form and session state, `pages`
//! drives the login page, and `util` carries the redirect guard and
//! navigation seam. The `mentor-login` binary is a headless driver for the
//! same page.

pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
