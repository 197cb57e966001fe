//! Structured pagination summary for API responses.

use pagekit_shared::{PageError, PageResult};
use serde::Serialize;

use super::calculator::PageCalculator;

/// Plain snapshot of the navigation facts of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Current page number.
    pub current_page: i64,
    /// 1-based index of the first item on the page.
    pub from: i64,
    /// 1-based index of the last item slot on the page.
    pub to: i64,
    /// Items per page.
    pub per_page: i64,
    /// URL of the first page.
    pub first_page_url: String,
    /// URL of the last page.
    pub last_page_url: String,
    /// URL of the next page; `null` on the last page.
    pub next_page_url: Option<String>,
    /// URL of the previous page; `null` on the first page.
    pub prev_page_url: Option<String>,
}

impl From<&PageCalculator> for PageSummary {
    fn from(calculator: &PageCalculator) -> Self {
        Self {
            current_page: calculator.current_page(),
            from: calculator.first_item(),
            to: calculator.last_item(),
            per_page: calculator.per_page(),
            first_page_url: calculator.first_page_url(),
            last_page_url: calculator.last_page_url(),
            next_page_url: calculator.next_page_url(),
            prev_page_url: calculator.previous_page_url(),
        }
    }
}

impl PageCalculator {
    /// Returns the structured summary of the current page.
    #[must_use]
    pub fn to_summary(&self) -> PageSummary {
        PageSummary::from(self)
    }

    /// Returns the structured summary as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> PageResult<String> {
        serde_json::to_string(&self.to_summary())
            .map_err(|e| PageError::Serialization(e.to_string()))
    }
}
