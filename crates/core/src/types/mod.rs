//! Core types for FreshBasket.
//!
//! This module provides the homepage content document, the subscriber email
//! type, and the JSON bodies of the site API.

pub mod api;
pub mod document;
pub mod email;

pub use api::{HealthResponse, MessageResponse, SubscribeRequest};
pub use document::*;
pub use email::{Email, EmailError};
