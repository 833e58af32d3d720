//! CLI command implementations.

pub mod health;
pub mod render;
pub mod subscribe;
