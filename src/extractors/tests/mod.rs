
/// Saved product page used across the extractor tests
pub const FIXTURE: &str = include_str!("fixtures/product.html");

/// The fixture with one fragment replaced
pub fn fixture_with(from: &str, to: &str) -> String {
    assert!(FIXTURE.contains(from), "fixture does not contain {:?}", from);
    FIXTURE.replacen(from, to, 1)
}
