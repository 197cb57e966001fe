//! Numeric page window selection.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::trace;

use super::calculator::FIRST_PAGE;

/// One page link inside the numeric window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericPage {
    /// Page number.
    pub number: i64,
    /// URL of the page.
    pub url: String,
    /// Whether this is the current page.
    pub is_current: bool,
}

/// Selects the page numbers shown around `current_page`.
///
/// The window holds up to `2 * width + 1` pages, centered on the current
/// page when there is room and pushed flush against the first or last page
/// otherwise. The range never leaves `[1, last_page]` and is empty when
/// `last_page` is 0. A current page past the end yields the trailing window.
#[must_use]
pub fn window_range(current_page: i64, width: i64, last_page: i64) -> RangeInclusive<i64> {
    let span = width.saturating_mul(2);
    let left_edge = current_page.saturating_sub(width);

    let mut start = left_edge.max(FIRST_PAGE);
    let mut end = if left_edge > FIRST_PAGE {
        current_page.saturating_add(width)
    } else {
        span.saturating_add(FIRST_PAGE)
    };

    start = start.min(last_page.saturating_sub(span));
    end = end.min(last_page);

    // Pulling left near the end undershoots page 1 when fewer pages exist
    // than the window holds.
    start = start.max(FIRST_PAGE);

    trace!(current_page, width, last_page, start, end, "Computed page window");
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pages(range: RangeInclusive<i64>) -> Vec<i64> {
        range.collect()
    }

    #[rstest]
    #[case::first_page(1, 2, 52, vec![1, 2, 3, 4, 5])]
    #[case::near_start(3, 2, 52, vec![1, 2, 3, 4, 5])]
    #[case::centered(4, 2, 52, vec![2, 3, 4, 5, 6])]
    #[case::middle(26, 2, 52, vec![24, 25, 26, 27, 28])]
    #[case::near_end(51, 2, 52, vec![48, 49, 50, 51, 52])]
    #[case::last_page(52, 2, 52, vec![48, 49, 50, 51, 52])]
    #[case::short_range(2, 2, 4, vec![1, 2, 3, 4])]
    #[case::exact_fit(5, 2, 5, vec![1, 2, 3, 4, 5])]
    #[case::single_page(1, 2, 1, vec![1])]
    #[case::no_pages(1, 2, 0, vec![])]
    #[case::zero_width(7, 0, 10, vec![7])]
    #[case::zero_width_first(1, 0, 10, vec![1])]
    #[case::wide_window(10, 3, 20, vec![7, 8, 9, 10, 11, 12, 13])]
    fn test_window_range(
        #[case] current: i64,
        #[case] width: i64,
        #[case] last: i64,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(pages(window_range(current, width, last)), expected);
    }

    #[test]
    fn test_past_the_end_yields_trailing_window() {
        assert_eq!(pages(window_range(100, 2, 52)), vec![48, 49, 50, 51, 52]);
        assert_eq!(pages(window_range(9, 2, 3)), vec![1, 2, 3]);
    }

    #[test]
    fn test_past_the_end_of_nothing_is_empty() {
        assert!(window_range(5, 2, 0).is_empty());
    }

    #[test]
    fn test_huge_inputs_do_not_overflow() {
        let range = window_range(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(*range.start(), 1);
        assert_eq!(*range.end(), i64::MAX);
    }
}
