//! Core pagination logic for Pagekit.
//!
//! This crate contains pure page arithmetic with ZERO markup dependencies.
//! Given a total item count, a page size, and a current page it answers every
//! navigation question a list view needs.
//!
//! # Modules
//!
//! - `paginator` - Boundaries, item ranges, URLs, and the numeric page window

pub mod paginator;

pub use paginator::{NumericPage, PageCalculator, PageSummary, UrlTemplate};
