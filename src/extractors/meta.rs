use crate::error::Result;
use crate::parsers::DomNode;
use crate::parsers::text::{head_segment, split_keywords};
use crate::results::{OpenGraph, PageMeta};

/// Extracts title, meta tags and language.
///
/// # Arguments
///
/// * `head` - The document's `<head>` element
/// * `root` - The `<html>` element carrying the `lang` attribute
pub fn extract<N: DomNode>(head: &N, root: &N) -> Result<PageMeta> {
    let title = head_segment(&head.require_text("title")?);

    let mut description = None;
    let mut keywords = None;
    let mut opengraph = OpenGraph::default();

    for tag in head.select_all("meta") {
        let content = tag.attribute("content");
        match (tag.attribute("name"), tag.attribute("property")) {
            (Some("description"), _) => description = content.map(str::to_string),
            (Some("keywords"), _) => keywords = content.map(split_keywords),
            (_, Some("og:title")) => opengraph.title = content.map(head_segment),
            (_, Some("og:image")) => opengraph.image = content.map(str::to_string),
            (_, Some("og:type")) => opengraph.kind = content.map(str::to_string),
            (name, property) => {
                ::log::debug!("Ignoring meta tag name={:?} property={:?}", name, property);
            }
        }
    }

    let language = root.require_attribute("lang")?.to_string();

    Ok(PageMeta {
        title,
        description,
        keywords,
        language,
        opengraph,
    })
}
