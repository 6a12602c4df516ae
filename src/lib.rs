//! Arcana - a Golden Dawn tarot reading service
//!
//! Arcana serves a static Golden Dawn deck and produces readings:
//! - Uniform random draws without replacement, with optional reversals
//! - Template interpretations behind a pluggable strategy interface
//! - One JSON document per reading on the local filesystem
//! - Simple HTTP API

pub mod api;
pub mod catalog;
pub mod config;
pub mod draw;
pub mod error;
pub mod interpret;
pub mod reading;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
