//! SecuroPass: password generator and encrypted credential vault.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod store;
pub mod types;
