//! Pagination input settings.

use serde::{Deserialize, Serialize};

/// Placeholder token replaced by a page number in URL templates and labels.
pub const PAGE_PLACEHOLDER: &str = "{{PAGE}}";

/// URL template used when none is configured.
pub const DEFAULT_URL_TEMPLATE: &str = "?page={{PAGE}}";

/// Raw pagination settings as supplied by a caller or a config file.
///
/// Values are taken as-is here; clamping happens when they are applied to a
/// calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Total number of items being paged.
    #[serde(default)]
    pub total_items: i64,
    /// Items shown per page.
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    /// Requested page (1-indexed).
    #[serde(default = "default_current_page")]
    pub current_page: i64,
    /// Number of page links on each side of the current page.
    #[serde(default = "default_window_width")]
    pub window_width: i64,
    /// Whether first/last links are shown outside the numeric window.
    #[serde(default)]
    pub show_boundary_links: bool,
    /// URL template containing the page placeholder.
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

fn default_per_page() -> i64 {
    20
}

fn default_current_page() -> i64 {
    1
}

fn default_window_width() -> i64 {
    2
}

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            per_page: default_per_page(),
            current_page: default_current_page(),
            window_width: default_window_width(),
            show_boundary_links: false,
            url_template: default_url_template(),
        }
    }
}
