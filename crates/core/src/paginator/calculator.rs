//! Page calculator: boundaries, item ranges, and page URLs.

use pagekit_shared::PageResult;
use pagekit_shared::types::PaginationConfig;
use tracing::debug;

use super::template::UrlTemplate;
use super::window::{NumericPage, window_range};

/// Number of the first page.
pub const FIRST_PAGE: i64 = 1;

/// Page links shown on each side of the current page by default.
pub const DEFAULT_WINDOW_WIDTH: i64 = 2;

/// Derives every pagination fact from a total, a page size, and a page.
///
/// Numeric input is clamped, never rejected: a page size or current page
/// below 1 becomes 1, a negative total or window width becomes 0. The current
/// page has no upper bound; a page past the end is treated as being on the
/// last page.
///
/// All derived values are computed on access from the stored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCalculator {
    total_items: i64,
    per_page: i64,
    current_page: i64,
    window_width: i64,
    show_boundary_links: bool,
    url_template: UrlTemplate,
}

fn clamp_min(field: &'static str, value: i64, min: i64) -> i64 {
    if value < min {
        debug!(field, value, min, "Clamped pagination input");
        min
    } else {
        value
    }
}

impl PageCalculator {
    /// Creates a calculator with the default window width and URL template.
    #[must_use]
    pub fn new(total_items: i64, per_page: i64, current_page: i64) -> Self {
        let mut calculator = Self {
            total_items: 0,
            per_page: 1,
            current_page: FIRST_PAGE,
            window_width: DEFAULT_WINDOW_WIDTH,
            show_boundary_links: false,
            url_template: UrlTemplate::default(),
        };
        calculator
            .set_total_items(total_items)
            .set_per_page(per_page)
            .set_current_page(current_page);
        calculator
    }

    /// Creates a calculator from configuration settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL template is invalid.
    pub fn from_config(config: &PaginationConfig) -> PageResult<Self> {
        let mut calculator = Self::new(config.total_items, config.per_page, config.current_page);
        calculator
            .set_window_width(config.window_width)
            .set_show_boundary_links(config.show_boundary_links)
            .set_url_template(&config.url_template)?;
        Ok(calculator)
    }

    /// Sets the total number of items; negative values become 0.
    pub fn set_total_items(&mut self, total_items: i64) -> &mut Self {
        self.total_items = clamp_min("total_items", total_items, 0);
        self
    }

    /// Sets the number of items per page; values below 1 become 1.
    pub fn set_per_page(&mut self, per_page: i64) -> &mut Self {
        self.per_page = clamp_min("per_page", per_page, 1);
        self
    }

    /// Sets the current page; values below 1 become 1.
    pub fn set_current_page(&mut self, current_page: i64) -> &mut Self {
        self.current_page = clamp_min("current_page", current_page, FIRST_PAGE);
        self
    }

    /// Sets the number of page links on each side of the current page.
    pub fn set_window_width(&mut self, window_width: i64) -> &mut Self {
        self.window_width = clamp_min("window_width", window_width, 0);
        self
    }

    /// Shows or hides the first/last links outside the numeric window.
    pub fn set_show_boundary_links(&mut self, show: bool) -> &mut Self {
        self.show_boundary_links = show;
        self
    }

    /// Sets the page URL template.
    ///
    /// # Errors
    ///
    /// Returns an error if `template` does not contain exactly one page
    /// placeholder. The previous template is kept in that case.
    pub fn set_url_template(&mut self, template: &str) -> PageResult<&mut Self> {
        self.url_template = UrlTemplate::parse(template)?;
        Ok(self)
    }

    /// Returns the total number of items.
    #[must_use]
    pub const fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Returns the current page number.
    #[must_use]
    pub const fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Returns the number of page links on each side of the current page.
    #[must_use]
    pub const fn window_width(&self) -> i64 {
        self.window_width
    }

    /// Returns whether first/last links are shown.
    #[must_use]
    pub const fn show_boundary_links(&self) -> bool {
        self.show_boundary_links
    }

    /// Returns the page URL template.
    #[must_use]
    pub const fn url_template(&self) -> &UrlTemplate {
        &self.url_template
    }

    /// Returns the first page number, always 1.
    #[must_use]
    pub const fn first_page(&self) -> i64 {
        FIRST_PAGE
    }

    /// Returns the last page number, 0 when there are no items.
    #[must_use]
    pub const fn last_page(&self) -> i64 {
        let full = self.total_items / self.per_page;
        if self.total_items % self.per_page == 0 {
            full
        } else {
            full + 1
        }
    }

    /// Returns the zero-based index of the first item on the current page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        (self.current_page - 1).saturating_mul(self.per_page)
    }

    /// Returns true if there is more than one page's worth of items.
    #[must_use]
    pub const fn has_pages(&self) -> bool {
        self.total_items > self.per_page
    }

    /// Returns true if a page precedes the current one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.current_page > FIRST_PAGE
    }

    /// Returns true if a page follows the current one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.last_page()
    }

    /// Returns true if the current page is the first page.
    #[must_use]
    pub const fn on_first_page(&self) -> bool {
        self.current_page == FIRST_PAGE
    }

    /// Returns true if the current page is the last page or past it.
    #[must_use]
    pub const fn on_last_page(&self) -> bool {
        self.current_page >= self.last_page()
    }

    /// Returns the 1-based index of the first item on the current page.
    ///
    /// 0 when there are no items.
    #[must_use]
    pub const fn first_item(&self) -> i64 {
        if self.total_items > 0 {
            self.offset().saturating_add(1)
        } else {
            0
        }
    }

    /// Returns the 1-based index of the last item slot on the current page.
    ///
    /// This is `first_item() + per_page() - 1` and is not capped at
    /// `total_items()`: on a partially filled last page it points past the
    /// final item. Take `min(last_item(), total_items())` for the true index.
    /// 0 when there are no items.
    #[must_use]
    pub const fn last_item(&self) -> i64 {
        if self.total_items > 0 {
            self.first_item().saturating_add(self.per_page - 1)
        } else {
            0
        }
    }

    /// Returns the URL of `page`; pages below 1 become 1.
    #[must_use]
    pub fn url(&self, page: i64) -> String {
        self.url_template.url(page)
    }

    /// Returns the URL of the first page.
    #[must_use]
    pub fn first_page_url(&self) -> String {
        self.url(FIRST_PAGE)
    }

    /// Returns the URL of the last page.
    #[must_use]
    pub fn last_page_url(&self) -> String {
        self.url(self.last_page())
    }

    /// Returns the URL of the next page, if there is one.
    #[must_use]
    pub fn next_page_url(&self) -> Option<String> {
        self.has_next_page().then(|| self.url(self.current_page.saturating_add(1)))
    }

    /// Returns the URL of the previous page, if there is one.
    #[must_use]
    pub fn previous_page_url(&self) -> Option<String> {
        self.has_previous_page().then(|| self.url(self.current_page - 1))
    }

    /// Returns the page numbers shown around the current page.
    #[must_use]
    pub fn numeric_pages(&self) -> Vec<NumericPage> {
        window_range(self.current_page, self.window_width, self.last_page())
            .map(|number| NumericPage {
                number,
                url: self.url(number),
                is_current: number == self.current_page,
            })
            .collect()
    }

    /// Returns true if a first-page link belongs before the numeric window.
    #[must_use]
    pub fn shows_first_link(&self) -> bool {
        self.show_boundary_links
            && self.current_page.saturating_sub(self.window_width) > FIRST_PAGE
    }

    /// Returns true if a last-page link belongs after the numeric window.
    #[must_use]
    pub fn shows_last_link(&self) -> bool {
        self.show_boundary_links
            && self.current_page < self.last_page().saturating_sub(self.window_width)
    }
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod tests;
