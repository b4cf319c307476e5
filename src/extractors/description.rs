use crate::error::Result;
use crate::parsers::DomNode;

const CONTENT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p";

/// Builds the sanitized description fragment.
///
/// Only headings and paragraphs are kept, joined in document order. Their
/// own attributes are removed while the markup inside them is kept as is.
/// Elements nested in another kept element are emitted as part of their
/// parent, also without attributes.
pub fn extract<N: DomNode>(container: &N) -> Result<String> {
    let region = container.require(".description")?;
    let matched = region.select_all(CONTENT_SELECTOR);

    let top_level: Vec<&N> = matched
        .iter()
        .filter(|node| !matched.iter().any(|other| node.is_descendant_of(other)))
        .collect();
    ::log::debug!(
        "Description keeps {} of {} matched elements",
        top_level.len(),
        matched.len()
    );

    Ok(top_level
        .iter()
        .map(|node| node.sanitized_html(&matched))
        .collect())
}
