use crate::config::CurrencyTable;
use crate::error::{ExtractError, Result};
use crate::parsers::DomNode;
use crate::parsers::text::{format_discount_percent, parse_price};
use crate::results::Pricing;

/// Extracts current and old price from the `.price` block.
///
/// The block's own text starts with the current price; the nested `span`
/// holds the old one.
pub fn extract<N: DomNode>(about: &N, currencies: &CurrencyTable) -> Result<Pricing> {
    let container = about.require(".price")?;
    let raw_price = container.trimmed_text();
    let price = parse_price(&raw_price, "price")?;

    let raw_old_price = container.require_text("span")?;
    let old_price = parse_price(&raw_old_price, "oldPrice")?;

    build(price, old_price, currencies.resolve(&raw_price))
}

/// Derives the discount fields from the two prices.
///
/// A discount that does not fit in an `i64` is a format error.
pub fn build(price: i64, old_price: i64, currency: Option<String>) -> Result<Pricing> {
    let discount = old_price.checked_sub(price).ok_or_else(|| {
        ExtractError::invalid_integer("discount", &format!("{} - {}", old_price, price))
    })?;
    Ok(Pricing {
        price,
        old_price,
        discount,
        discount_percent: format_discount_percent(discount, old_price),
        currency,
    })
}
