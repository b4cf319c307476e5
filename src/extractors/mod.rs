pub mod description;
pub mod identity;
pub mod images;
pub mod meta;
pub mod pricing;
pub mod properties;
pub mod reviews;
pub mod suggested;

#[cfg(test)]
mod tests;

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::parsers::{DomNode, html};
use crate::results::{PageData, Product};
use std::path::Path;
use url::Url;

/// Selector of the single product container
pub const PRODUCT_SELECTOR: &str = ".product";

/// Builder and entry point for extracting `PageData` from a product page
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(
        self,
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let config = ExtractorConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(
        self,
        json: &str,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let config = ExtractorConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Resolve image sources against this URL
    pub fn with_base_url(mut self, base_url: &str) -> std::result::Result<Self, url::ParseError> {
        self.config.base_url = Some(Url::parse(base_url)?);
        Ok(self)
    }

    /// Add or override a currency glyph
    pub fn with_currency(mut self, glyph: char, code: &str) -> Self {
        self.config.currencies.insert(glyph, code);
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse an HTML string and extract its page data
    pub fn parse_html(&self, html: &str) -> Result<PageData> {
        let document = html::parse_document(html);
        self.extract(&document.root_element())
    }

    /// Extract page data from the document's root element.
    ///
    /// Any structural or format error aborts the whole extraction.
    pub fn extract<N: DomNode>(&self, root: &N) -> Result<PageData> {
        let head = root.require("head")?;
        let meta = meta::extract(&head, root)?;

        let container = root.require_single(PRODUCT_SELECTOR)?;
        let product = self.extract_product(&container)?;

        let base_url = self.config.base_url.as_ref();
        let suggested = suggested::extract(root, &self.config)?;
        let reviews = reviews::extract(root, base_url)?;

        ::log::debug!(
            "Extracted product '{}' with {} suggestions and {} reviews",
            product.id,
            suggested.len(),
            reviews.len()
        );

        Ok(PageData {
            meta,
            product,
            suggested,
            reviews,
        })
    }

    fn extract_product<N: DomNode>(&self, container: &N) -> Result<Product> {
        let identity = identity::extract(container)?;
        let about = container.require(".about")?;
        let pricing = pricing::extract(&about, &self.config.currencies)?;

        Ok(Product {
            id: identity.id,
            name: identity.name,
            is_liked: identity.is_liked,
            tags: identity.tags,
            pricing,
            properties: properties::extract(container),
            description: description::extract(container)?,
            images: images::extract(container, self.config.base_url.as_ref())?,
        })
    }
}
