// SecuroPass shared type definitions
// Each submodule defines types used across the crate.

pub mod credential;
pub mod errors;
pub mod settings;
