//! Markup rendering for Pagekit.
//!
//! Turns a [`PageCalculator`](pagekit_core::PageCalculator) into a navigable
//! link list. Labels are passed in explicitly; nothing here reads global
//! state.

pub mod html;

pub use html::{DEFAULT_LIST_CLASS, HtmlRenderer};
