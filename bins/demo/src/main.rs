//! Pagekit command-line renderer
//!
//! Loads pagination settings and labels from configuration, then prints the
//! HTML navigation fragment, the item range line, and the JSON summary.
//!
//! An optional first argument overrides the configured current page. An
//! argument that is not a number selects the first page.

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagekit_core::PageCalculator;
use pagekit_core::paginator::FIRST_PAGE;
use pagekit_render::HtmlRenderer;
use pagekit_shared::AppConfig;

/// Parses the page argument, falling back to the first page.
fn page_argument(arg: &str) -> i64 {
    arg.trim().parse().unwrap_or_else(|_| {
        debug!(arg, "Unparseable page argument, using first page");
        FIRST_PAGE
    })
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let mut config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(arg) = std::env::args().nth(1) {
        config.pagination.current_page = page_argument(&arg);
    }

    let calculator = PageCalculator::from_config(&config.pagination)?;
    info!(
        total_items = calculator.total_items(),
        per_page = calculator.per_page(),
        current_page = calculator.current_page(),
        last_page = calculator.last_page(),
        "Pagination configured"
    );

    let labels = config.labels();
    let renderer = HtmlRenderer::new(&labels);

    println!("{}", renderer.render(&calculator));
    println!("{}", renderer.render_range(&calculator));
    println!("{}", calculator.to_json()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_argument_numeric() {
        assert_eq!(page_argument("7"), 7);
        assert_eq!(page_argument(" 12 "), 12);
    }

    #[test]
    fn test_page_argument_unparseable_falls_back_to_first_page() {
        assert_eq!(page_argument("abc"), FIRST_PAGE);
        assert_eq!(page_argument(""), FIRST_PAGE);
        assert_eq!(page_argument("3.5"), FIRST_PAGE);
    }

    #[test]
    fn test_page_argument_out_of_range_is_clamped_by_calculator() {
        let calculator = PageCalculator::new(100, 10, page_argument("-4"));
        assert_eq!(calculator.current_page(), FIRST_PAGE);
    }
}
