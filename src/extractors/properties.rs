use crate::parsers::DomNode;
use crate::results::Properties;

/// Pairs alternating label/value spans into an ordered property list.
///
/// A trailing label without a value is ignored.
pub fn extract<N: DomNode>(container: &N) -> Properties {
    let spans = container.select_all(".properties li span");
    let mut properties = Properties::new();
    for pair in spans.chunks_exact(2) {
        properties.insert(pair[0].trimmed_text(), pair[1].trimmed_text());
    }
    if spans.len() % 2 == 1 {
        ::log::debug!("Ignoring unpaired property label");
    }
    properties
}
