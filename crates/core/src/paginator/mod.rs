//! Pagination arithmetic.
//!
//! This module derives every navigation fact from three numbers:
//! - Page boundaries and item ranges
//! - Page URLs from a placeholder template
//! - The sliding window of numeric page links
//! - A structured summary for API responses

pub mod calculator;
pub mod summary;
pub mod template;
pub mod window;

#[cfg(test)]
mod props;

pub use calculator::{DEFAULT_WINDOW_WIDTH, FIRST_PAGE, PageCalculator};
pub use summary::PageSummary;
pub use template::UrlTemplate;
pub use window::{NumericPage, window_range};
