//! Error types for page extraction.
//!
//! Structural errors mean the document does not have the expected shape.
//! Format errors mean a value was present but could not be interpreted.

use thiserror::Error;

/// Result alias used throughout the extractors
pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Required element '{selector}' not found")]
    MissingElement { selector: String },

    #[error("Expected exactly one '{selector}' element, found {found}")]
    AmbiguousElement { selector: String, found: usize },

    #[error("Required attribute '{attribute}' missing on '{element}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("Expected child element #{index} inside '{parent}'")]
    MissingChild { parent: String, index: usize },

    #[error("Malformed date '{text}': expected DD/MM/YYYY")]
    MalformedDate { text: String },

    #[error("Cannot parse '{text}' as an integer for {field}")]
    InvalidInteger { field: String, text: String },
}

impl ExtractError {
    pub fn missing_element(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub fn invalid_integer(field: &str, text: &str) -> Self {
        Self::InvalidInteger {
            field: field.to_string(),
            text: text.to_string(),
        }
    }

    /// True when the document did not have the expected shape
    pub fn is_structural(&self) -> bool {
        !self.is_format()
    }

    /// True when a present value could not be parsed
    pub fn is_format(&self) -> bool {
        matches!(self, Self::InvalidInteger { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        assert!(ExtractError::missing_element("head").is_structural());
        assert!(ExtractError::MalformedDate { text: "x".into() }.is_structural());
        assert!(ExtractError::invalid_integer("price", "$x").is_format());
        assert!(!ExtractError::invalid_integer("price", "$x").is_structural());
    }

    #[test]
    fn test_error_messages() {
        let err = ExtractError::AmbiguousElement {
            selector: ".product".into(),
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected exactly one '.product' element, found 2"
        );
        assert_eq!(
            ExtractError::missing_attribute("img", "data-src").to_string(),
            "Required attribute 'data-src' missing on 'img'"
        );
    }
}
