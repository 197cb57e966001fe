//! Page URL templates.

use std::fmt;
use std::str::FromStr;

use pagekit_shared::types::{DEFAULT_URL_TEMPLATE, PAGE_PLACEHOLDER};
use pagekit_shared::{PageError, PageResult};
use tracing::warn;

/// A URL containing exactly one page placeholder.
///
/// The template is split around the placeholder once, at parse time, so
/// building a URL is a plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    /// Parses a template, requiring exactly one `{{PAGE}}` token.
    pub fn parse(template: &str) -> PageResult<Self> {
        let count = template.matches(PAGE_PLACEHOLDER).count();
        if count == 0 {
            warn!(template, "Rejected URL template without page placeholder");
            return Err(PageError::MissingPlaceholder {
                template: template.to_string(),
            });
        }

        match template.split_once(PAGE_PLACEHOLDER) {
            Some((prefix, suffix)) if count == 1 => Ok(Self {
                raw: template.to_string(),
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => {
                warn!(template, count, "Rejected URL template with repeated page placeholder");
                Err(PageError::RepeatedPlaceholder {
                    template: template.to_string(),
                    count,
                })
            }
        }
    }

    /// Returns the template as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Builds the URL for `page`; pages below 1 become 1.
    #[must_use]
    pub fn url(&self, page: i64) -> String {
        format!("{}{}{}", self.prefix, page.max(1), self.suffix)
    }

    /// Recovers the page number from a URL built by this template.
    ///
    /// Returns `None` when the URL does not match the template or the
    /// substituted segment is not a page number.
    #[must_use]
    pub fn extract_page(&self, url: &str) -> Option<i64> {
        url.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?
            .parse::<i64>()
            .ok()
            .filter(|page| *page >= 1)
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self {
            raw: DEFAULT_URL_TEMPLATE.to_string(),
            prefix: DEFAULT_URL_TEMPLATE
                .trim_end_matches(PAGE_PLACEHOLDER)
                .to_string(),
            suffix: String::new(),
        }
    }
}

impl FromStr for UrlTemplate {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
