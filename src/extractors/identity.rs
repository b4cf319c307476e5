use crate::error::Result;
use crate::parsers::DomNode;
use crate::results::{ProductTags, TagGroup};

/// Identifying fields of the product container
pub struct Identity {
    pub id: String,
    pub name: String,
    pub is_liked: bool,
    pub tags: ProductTags,
}

pub fn extract<N: DomNode>(container: &N) -> Result<Identity> {
    let id = container.require_attribute("data-id")?.to_string();
    let about = container.require(".about")?;
    let name = about.require_text(".title")?;
    let is_liked = container.require(".preview .like")?.has_class("active");
    let tags = extract_tags(&about);

    Ok(Identity {
        id,
        name,
        is_liked,
        tags,
    })
}

/// Groups the tags under `.about` by their class marker
pub fn extract_tags<N: DomNode>(about: &N) -> ProductTags {
    let mut tags = ProductTags::default();
    for tag in about.select_all(".tags span") {
        let name = tag.trimmed_text();
        let marker = tag.attribute("class").unwrap_or_default();
        match TagGroup::from_marker(marker) {
            Some(group) => tags.push(group, name),
            None => ::log::debug!("Dropping tag '{}' with marker '{}'", name, marker),
        }
    }
    tags
}
