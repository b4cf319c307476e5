use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::parsers::DomNode;
use crate::parsers::text::parse_price;
use crate::results::SuggestedProduct;
use crate::utils::resolve_url;

/// Extracts the cards of the suggested items block
pub fn extract<N: DomNode>(root: &N, config: &ExtractorConfig) -> Result<Vec<SuggestedProduct>> {
    let items = root.select_all(".suggested .items article");
    ::log::debug!("Found {} suggested products", items.len());

    items.iter().map(|item| extract_item(item, config)).collect()
}

fn extract_item<N: DomNode>(item: &N, config: &ExtractorConfig) -> Result<SuggestedProduct> {
    let name = item.require_text("h3")?;
    let description = item.require_text("p")?;
    let image = resolve_url(
        item.require("img")?.require_attribute("src")?,
        config.base_url.as_ref(),
    );

    let raw_price = item.require_text("b")?;
    let price = parse_price(&raw_price, "suggested price")?;
    let currency = config.currencies.resolve(&raw_price);

    Ok(SuggestedProduct {
        name,
        description,
        image,
        price,
        currency,
    })
}
