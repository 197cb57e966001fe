//! HTML pagination fragment.

use maud::{Markup, html};
use pagekit_core::PageCalculator;
use pagekit_shared::types::Labels;
use tracing::trace;

/// CSS class of the `<ul>` wrapper by default.
pub const DEFAULT_LIST_CLASS: &str = "pagination";

/// Renders pagination as an unordered list of links.
///
/// Element order is: optional first link, previous, the numeric window, next,
/// optional last link. Previous and next are rendered as disabled
/// placeholders when they have no target. Displayed numbers use the label
/// set's digit glyphs; URLs never do.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<'a> {
    labels: &'a Labels,
    list_class: String,
}

impl<'a> HtmlRenderer<'a> {
    /// Creates a renderer using `labels`.
    #[must_use]
    pub fn new(labels: &'a Labels) -> Self {
        Self {
            labels,
            list_class: DEFAULT_LIST_CLASS.to_string(),
        }
    }

    /// Replaces the CSS class of the `<ul>` wrapper.
    #[must_use]
    pub fn with_list_class(mut self, class: impl Into<String>) -> Self {
        self.list_class = class.into();
        self
    }

    /// Builds the pagination markup.
    #[must_use]
    pub fn markup(&self, calculator: &PageCalculator) -> Markup {
        let labels = self.labels;
        trace!(
            current_page = calculator.current_page(),
            last_page = calculator.last_page(),
            "Rendering pagination"
        );

        html! {
            ul class=(self.list_class) {
                @if calculator.shows_first_link() {
                    li.page-item {
                        a.page-link href=(calculator.first_page_url()) { (labels.first) }
                    }
                }

                @if let Some(url) = calculator.previous_page_url() {
                    li.page-item {
                        a.page-link href=(url) rel="prev" { (labels.previous) }
                    }
                } @else {
                    li.page-item.disabled aria-disabled="true" {
                        span.page-link aria-hidden="true" { (labels.previous) }
                    }
                }

                @for page in calculator.numeric_pages() {
                    @let number = labels.localize_digits(page.number);
                    @if page.is_current {
                        li.page-item.active aria-current="page" {
                            span.page-link { (number) }
                        }
                    } @else {
                        li.page-item {
                            a.page-link href=(page.url) aria-label=(labels.goto(page.number)) {
                                (number)
                            }
                        }
                    }
                }

                @if let Some(url) = calculator.next_page_url() {
                    li.page-item {
                        a.page-link href=(url) rel="next" { (labels.next) }
                    }
                } @else {
                    li.page-item.disabled aria-disabled="true" {
                        span.page-link aria-hidden="true" { (labels.next) }
                    }
                }

                @if calculator.shows_last_link() {
                    li.page-item {
                        a.page-link href=(calculator.last_page_url()) { (labels.last) }
                    }
                }
            }
        }
    }

    /// Renders the pagination markup to a string.
    #[must_use]
    pub fn render(&self, calculator: &PageCalculator) -> String {
        self.markup(calculator).into_string()
    }

    /// Renders the item range sentence from the `range` label.
    ///
    /// The "to" index is [`PageCalculator::last_item`] as-is, so on a partially
    /// filled last page it can exceed the total.
    #[must_use]
    pub fn render_range(&self, calculator: &PageCalculator) -> String {
        self.labels.range(
            calculator.first_item(),
            calculator.last_item(),
            calculator.total_items(),
        )
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
