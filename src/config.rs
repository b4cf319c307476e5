use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Lookup table from a leading price glyph to a currency code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable(BTreeMap<String, String>);

impl CurrencyTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace the code for a glyph
    pub fn with(mut self, glyph: char, code: &str) -> Self {
        self.insert(glyph, code);
        self
    }

    /// Add or replace the code for a glyph in place
    pub fn insert(&mut self, glyph: char, code: &str) {
        self.0.insert(glyph.to_string(), code.to_string());
    }

    /// Resolve a glyph to its currency code
    pub fn lookup(&self, glyph: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.0.get(&*glyph.encode_utf8(&mut buf)).map(String::as_str)
    }

    /// Resolve the currency of a raw price text from its first character
    pub fn resolve(&self, raw_price: &str) -> Option<String> {
        let glyph = raw_price.trim().chars().next()?;
        let code = self.lookup(glyph).map(str::to_string);
        if code.is_none() {
            ::log::warn!("Unknown currency glyph '{}' in '{}'", glyph, raw_price);
        }
        code
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::empty()
            .with('$', "USD")
            .with('€', "EUR")
            .with('₽', "RUB")
    }
}

/// Configuration for the page extractor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Glyph to currency code mapping
    #[serde(default)]
    pub currencies: CurrencyTable,

    /// Base URL used to resolve relative image sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<Url>,
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}
