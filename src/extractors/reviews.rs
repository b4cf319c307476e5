use crate::error::Result;
use crate::parsers::DomNode;
use crate::parsers::text::reformat_date;
use crate::results::{Author, Review};
use crate::utils::resolve_url;
use url::Url;

/// The review body sits in the article's second child element
const BODY_CHILD_INDEX: usize = 1;

/// Extracts every review article
pub fn extract<N: DomNode>(root: &N, base_url: Option<&Url>) -> Result<Vec<Review>> {
    let items = root.select_all(".reviews .items article");
    ::log::debug!("Found {} reviews", items.len());

    items.iter().map(|item| extract_item(item, base_url)).collect()
}

fn extract_item<N: DomNode>(item: &N, base_url: Option<&Url>) -> Result<Review> {
    let rating = item.select_all(".rating .filled").len();
    let title = item.require_text(".title")?;
    let description = item.require_child(BODY_CHILD_INDEX)?.require_text("p")?;

    let author_data = item.require(".author")?;
    let author = Author {
        avatar: resolve_url(
            author_data.require("img")?.require_attribute("src")?,
            base_url,
        ),
        name: author_data.require_text("span")?,
    };
    let date = reformat_date(&author_data.require_text("i")?)?;

    Ok(Review {
        rating,
        author,
        title,
        description,
        date,
    })
}
