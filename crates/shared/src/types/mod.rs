//! Plain data types shared across crates.

pub mod labels;
pub mod pagination;

pub use labels::{LabelOverrides, Labels};
pub use pagination::{DEFAULT_URL_TEMPLATE, PAGE_PLACEHOLDER, PaginationConfig};
