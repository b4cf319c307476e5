//! Structured data extraction for fixed-layout product pages.

pub mod config;
pub mod error;
pub mod extractors;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{CurrencyTable, ExtractorConfig};
pub use error::{ExtractError, Result};
pub use extractors::Extractor;
pub use parsers::DomNode;
pub use results::PageData;

use scraper::Html;

/// Extract page data from a parsed document with the default configuration
pub fn parse_page(document: &Html) -> Result<PageData> {
    Extractor::new().extract(&document.root_element())
}

/// Parse an HTML string and extract its page data with the default configuration
pub fn parse_page_str(html: &str) -> Result<PageData> {
    Extractor::new().parse_html(html)
}
