use crate::error::Result;
use crate::parsers::DomNode;
use crate::results::ProductImage;
use crate::utils::resolve_url;
use url::Url;

/// Collects the gallery thumbnails in document order
pub fn extract<N: DomNode>(container: &N, base_url: Option<&Url>) -> Result<Vec<ProductImage>> {
    let thumbnails = container.select_all(".preview nav button img");
    ::log::debug!("Found {} gallery images", thumbnails.len());

    thumbnails
        .iter()
        .map(|image| {
            Ok(ProductImage {
                preview: resolve_url(image.require_attribute("src")?, base_url),
                full: image.require_attribute("data-src")?.to_string(),
                alt: image.attribute("alt").unwrap_or_default().to_string(),
            })
        })
        .collect()
}
