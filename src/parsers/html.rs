use crate::parsers::DomNode;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parses a full HTML document
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            ::log::warn!("Invalid selector '{}': {}", selector, e);
            None
        }
    }
}

impl<'a> DomNode for ElementRef<'a> {
    fn select_one(&self, selector: &str) -> Option<Self> {
        let selector = compile(selector)?;
        self.select(&selector).next()
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        match compile(selector) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn is_descendant_of(&self, other: &Self) -> bool {
        self.ancestors().any(|ancestor| ancestor.id() == other.id())
    }

    fn sanitized_html(&self, stripped: &[Self]) -> String {
        let mut out = String::new();
        write_sanitized(*self, stripped, &mut out);
        out
    }
}

/// Serializes an element and its subtree.
///
/// Elements listed in `stripped` are written without attributes; every
/// other element keeps its attributes.
fn write_sanitized(element: ElementRef<'_>, stripped: &[ElementRef<'_>], out: &mut String) {
    let name = element.value().name();
    out.push('<');
    out.push_str(name);
    if !stripped.iter().any(|s| s.id() == element.id()) {
        for (attr, value) in element.value().attrs() {
            out.push(' ');
            out.push_str(attr);
            out.push_str("=\"");
            push_nbsp_escaped(&html_escape::encode_double_quoted_attribute(value), out);
            out.push('"');
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_nbsp_escaped(&html_escape::encode_text(&**text), out),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_sanitized(child, stripped, out);
                }
            }
            // Comments and processing instructions are not part of the fragment
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Appends already escaped markup, writing U+00A0 as `&nbsp;`
fn push_nbsp_escaped(escaped: &str, out: &mut String) {
    for c in escaped.chars() {
        match c {
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}
