//! Property-based tests for page arithmetic and windowing.

use proptest::prelude::*;

use super::calculator::PageCalculator;
use super::template::UrlTemplate;

/// Strategy for a calculator whose current page lies within `[1, last_page]`.
fn in_range_calculator() -> impl Strategy<Value = PageCalculator> {
    (1i64..100_000, 1i64..500, 0i64..6).prop_flat_map(|(total, per_page, width)| {
        let last_page = total / per_page + i64::from(total % per_page != 0);
        (1..=last_page).prop_map(move |current| {
            let mut calculator = PageCalculator::new(total, per_page, current);
            calculator.set_window_width(width);
            calculator
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Last page is the ceiling of total over page size.
    #[test]
    fn prop_last_page_is_ceiling(total in 0i64..10_000_000, per_page in 1i64..10_000) {
        let calculator = PageCalculator::new(total, per_page, 1);
        let expected = (total + per_page - 1) / per_page;
        prop_assert_eq!(calculator.last_page(), expected);
    }

    /// Page size and current page are at least 1 whatever the input.
    #[test]
    fn prop_inputs_clamped(total in any::<i64>(), per_page in any::<i64>(), current in any::<i64>()) {
        let calculator = PageCalculator::new(total, per_page, current);
        prop_assert!(calculator.per_page() >= 1);
        prop_assert!(calculator.current_page() >= 1);
        prop_assert!(calculator.total_items() >= 0);
        prop_assert!(calculator.last_page() >= 0);
    }

    /// The window is contiguous, inside `[1, last_page]`, and holds the current page.
    #[test]
    fn prop_window_contains_current(calculator in in_range_calculator()) {
        let pages = calculator.numeric_pages();
        let numbers: Vec<i64> = pages.iter().map(|page| page.number).collect();

        prop_assert!(!numbers.is_empty());
        prop_assert!(numbers[0] >= 1);
        prop_assert!(numbers[numbers.len() - 1] <= calculator.last_page());
        prop_assert!(numbers.windows(2).all(|pair| pair[1] == pair[0] + 1));
        prop_assert!(numbers.contains(&calculator.current_page()));
        prop_assert_eq!(pages.iter().filter(|page| page.is_current).count(), 1);
    }

    /// The window holds `2 * width + 1` pages whenever that many pages exist.
    #[test]
    fn prop_window_width_is_stable(calculator in in_range_calculator()) {
        let full = 2 * calculator.window_width() + 1;
        let expected = full.min(calculator.last_page());
        prop_assert_eq!(i64::try_from(calculator.numeric_pages().len()).unwrap(), expected);
    }

    /// Any current page, even far past the end, yields a window inside the valid range.
    #[test]
    fn prop_window_never_leaves_range(
        total in 0i64..100_000,
        per_page in 1i64..500,
        current in 1i64..1_000_000,
        width in 0i64..10,
    ) {
        let mut calculator = PageCalculator::new(total, per_page, current);
        calculator.set_window_width(width);
        for page in calculator.numeric_pages() {
            prop_assert!(page.number >= 1);
            prop_assert!(page.number <= calculator.last_page());
        }
    }

    /// Being on the first or last page rules out the matching direction.
    #[test]
    fn prop_edge_flags_agree(calculator in in_range_calculator()) {
        if calculator.on_first_page() {
            prop_assert!(!calculator.has_previous_page());
            prop_assert!(calculator.previous_page_url().is_none());
        }
        if calculator.on_last_page() {
            prop_assert!(!calculator.has_next_page());
            prop_assert!(calculator.next_page_url().is_none());
        }
    }

    /// Item indexes are both zero exactly when there are no items.
    #[test]
    fn prop_item_range_zero_iff_empty(
        total in 0i64..100_000,
        per_page in 1i64..500,
        current in 1i64..1_000,
    ) {
        let calculator = PageCalculator::new(total, per_page, current);
        let both_zero = calculator.first_item() == 0 && calculator.last_item() == 0;
        prop_assert_eq!(both_zero, total == 0);
        if total > 0 {
            prop_assert_eq!(calculator.last_item() - calculator.first_item() + 1, per_page);
        }
    }

    /// Extracting the page back out of a generated URL returns the page.
    #[test]
    fn prop_url_round_trip(
        page in 1i64..i64::MAX,
        prefix in "[a-z/?=&]{0,12}",
        suffix in "[a-z/#&=]{0,12}",
    ) {
        let template = UrlTemplate::parse(&format!("{prefix}{{{{PAGE}}}}{suffix}")).unwrap();
        let url = template.url(page);
        prop_assert_eq!(template.extract_page(&url), Some(page));
    }
}
