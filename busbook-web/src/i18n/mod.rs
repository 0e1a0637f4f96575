//! Page copy for the booking screens.
//!
//! A single English catalog is embedded at compile time; keys are dotted paths
//! into `i18n/en.json`.
mod bundle;
mod render;

pub use bundle::{CATALOG_LANG, catalog};
pub use render::{t, tr};

/// Format a fare for display, e.g. `₹450`.
#[must_use]
pub fn fmt_price(amount: u32) -> String {
    busbook_core::format_price(amount)
}
