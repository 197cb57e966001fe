//! Shared errors, labels, and configuration for Pagekit.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Pagination input settings and the page placeholder token
//! - Link labels and digit glyph tables
//! - The library-wide error type
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{PageError, PageResult};
