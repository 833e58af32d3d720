//! FreshBasket Core - Shared types library.
//!
//! This crate provides common types used across all FreshBasket components:
//! - `site` - The content service (JSON API plus static page)
//! - `renderer` - The page renderer with its offline fallback
//! - `cli` - Command-line tools for prerendering and smoke checks
//!
//! # Architecture
//!
//! The core crate contains only types and the hardcoded homepage copy - no
//! I/O, no HTTP. Both the service and the renderer's fallback read the same
//! [`content::site_content`] value, so the two can never drift apart.
//!
//! # Modules
//!
//! - [`types`] - Content document, subscriber email, API bodies
//! - [`content`] - The homepage content document itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod content;
pub mod types;

pub use content::site_content;
pub use types::*;
