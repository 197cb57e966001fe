//! Link labels and digit glyphs for rendered pagination.
//!
//! A `Labels` value is built once (usually at startup from configuration) and
//! handed to the renderer. Overrides are merged key by key, so a config file
//! that only translates `next` keeps every other default.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::pagination::PAGE_PLACEHOLDER;

/// Number of entries in a digit glyph table.
pub const DIGIT_COUNT: usize = 10;

/// Placeholder for the first item index in the range label.
pub const FROM_PLACEHOLDER: &str = "{{FROM}}";

/// Placeholder for the last item index in the range label.
pub const TO_PLACEHOLDER: &str = "{{TO}}";

/// Placeholder for the total item count in the range label.
pub const TOTAL_PLACEHOLDER: &str = "{{TOTAL}}";

/// Complete label set used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labels {
    /// Label of the first-page link.
    pub first: String,
    /// Label of the last-page link.
    pub last: String,
    /// Label of the previous-page link.
    pub previous: String,
    /// Label of the next-page link.
    pub next: String,
    /// Accessible label for numeric links; may contain the page placeholder.
    pub goto: String,
    /// Item range sentence with `{{FROM}}`, `{{TO}}`, and `{{TOTAL}}` slots.
    pub range: String,
    /// Glyphs for the digits `0` through `9`.
    pub numbers: [String; DIGIT_COUNT],
}

/// Partial label set; every provided key replaces the matching default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabelOverrides {
    /// Replacement for [`Labels::first`].
    #[serde(default)]
    pub first: Option<String>,
    /// Replacement for [`Labels::last`].
    #[serde(default)]
    pub last: Option<String>,
    /// Replacement for [`Labels::previous`].
    #[serde(default)]
    pub previous: Option<String>,
    /// Replacement for [`Labels::next`].
    #[serde(default)]
    pub next: Option<String>,
    /// Replacement for [`Labels::goto`].
    #[serde(default)]
    pub goto: Option<String>,
    /// Replacement for [`Labels::range`].
    #[serde(default)]
    pub range: Option<String>,
    /// Replacement digit glyphs; must hold exactly ten entries.
    #[serde(default)]
    pub numbers: Option<Vec<String>>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "First".to_string(),
            last: "Last".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            goto: format!("Goto page {PAGE_PLACEHOLDER}"),
            range: format!(
                "Showing {FROM_PLACEHOLDER} to {TO_PLACEHOLDER} of {TOTAL_PLACEHOLDER} entries"
            ),
            numbers: std::array::from_fn(|digit| digit.to_string()),
        }
    }
}

impl Labels {
    /// Returns a copy with every key present in `overrides` replaced.
    ///
    /// A `numbers` table of the wrong length is ignored.
    #[must_use]
    pub fn merge(mut self, overrides: LabelOverrides) -> Self {
        if let Some(first) = overrides.first {
            self.first = first;
        }
        if let Some(last) = overrides.last {
            self.last = last;
        }
        if let Some(previous) = overrides.previous {
            self.previous = previous;
        }
        if let Some(next) = overrides.next {
            self.next = next;
        }
        if let Some(goto) = overrides.goto {
            self.goto = goto;
        }
        if let Some(range) = overrides.range {
            self.range = range;
        }
        if let Some(numbers) = overrides.numbers {
            match <[String; DIGIT_COUNT]>::try_from(numbers) {
                Ok(numbers) => self.numbers = numbers,
                Err(rejected) => warn!(
                    len = rejected.len(),
                    "Ignoring digit glyph table without exactly ten entries"
                ),
            }
        }
        self
    }

    /// Renders `number` with the configured digit glyphs.
    ///
    /// Characters other than ASCII digits (a leading `-`) pass through.
    #[must_use]
    pub fn localize_digits(&self, number: i64) -> String {
        let mut out = String::new();
        for ch in number.to_string().chars() {
            match ch.to_digit(10) {
                Some(digit) => out.push_str(&self.numbers[digit as usize]),
                None => out.push(ch),
            }
        }
        out
    }

    /// Returns the `goto` label for `page` with localized digits.
    #[must_use]
    pub fn goto(&self, page: i64) -> String {
        self.goto.replace(PAGE_PLACEHOLDER, &self.localize_digits(page))
    }

    /// Returns the `range` label with localized item indexes filled in.
    #[must_use]
    pub fn range(&self, from: i64, to: i64, total: i64) -> String {
        self.range
            .replace(FROM_PLACEHOLDER, &self.localize_digits(from))
            .replace(TO_PLACEHOLDER, &self.localize_digits(to))
            .replace(TOTAL_PLACEHOLDER, &self.localize_digits(total))
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
