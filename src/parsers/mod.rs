pub mod html;
pub mod text;


use crate::error::{ExtractError, Result};

/// Query capability the extractors need from a document tree.
///
/// Lookups never fail on their own: a missing element is `None` or an
/// empty list, and the caller decides whether that is fatal.
pub trait DomNode: Sized {
    /// First descendant matching the selector
    fn select_one(&self, selector: &str) -> Option<Self>;

    /// All descendants matching the selector, in document order
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// Raw attribute value
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Concatenated text of all descendant text nodes
    fn text_content(&self) -> String;

    /// Direct element children, in document order
    fn element_children(&self) -> Vec<Self>;

    /// Lowercase tag name
    fn tag_name(&self) -> &str;

    /// Whether `self` sits somewhere below `other`
    fn is_descendant_of(&self, other: &Self) -> bool;

    /// Markup of this element and its subtree, with the attributes of the
    /// elements in `stripped` removed
    fn sanitized_html(&self, stripped: &[Self]) -> String;

    /// Whether the class list contains `class`
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Trimmed text content
    fn trimmed_text(&self) -> String {
        self.text_content().trim().to_string()
    }

    /// First descendant matching the selector, or a structural error
    fn require(&self, selector: &str) -> Result<Self> {
        self.select_one(selector)
            .ok_or_else(|| ExtractError::missing_element(selector))
    }

    /// The only descendant matching the selector
    fn require_single(&self, selector: &str) -> Result<Self> {
        let mut found = self.select_all(selector);
        match found.len() {
            0 => Err(ExtractError::missing_element(selector)),
            1 => Ok(found.remove(0)),
            n => Err(ExtractError::AmbiguousElement {
                selector: selector.to_string(),
                found: n,
            }),
        }
    }

    /// Trimmed text of the first descendant matching the selector
    fn require_text(&self, selector: &str) -> Result<String> {
        self.require(selector).map(|node| node.trimmed_text())
    }

    /// Attribute value, or a structural error naming this element
    fn require_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name)
            .ok_or_else(|| ExtractError::missing_attribute(self.tag_name(), name))
    }

    /// Direct element child at a fixed position
    fn require_child(&self, index: usize) -> Result<Self> {
        let mut children = self.element_children();
        if index < children.len() {
            Ok(children.swap_remove(index))
        } else {
            Err(ExtractError::MissingChild {
                parent: self.tag_name().to_string(),
                index,
            })
        }
    }
}
