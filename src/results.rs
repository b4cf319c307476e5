use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Everything extracted from a product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub meta: PageMeta,
    pub product: Product,
    pub suggested: Vec<SuggestedProduct>,
    pub reviews: Vec<Review>,
}

/// Head metadata of the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Title text before the first em-dash
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    /// Value of the root `lang` attribute
    pub language: String,
    pub opengraph: OpenGraph,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// The main product on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub is_liked: bool,
    pub tags: ProductTags,
    #[serde(flatten)]
    pub pricing: Pricing,
    pub properties: Properties,
    /// Sanitized markup of the description headings and paragraphs
    pub description: String,
    pub images: Vec<ProductImage>,
}

/// Tags grouped by their marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTags {
    pub category: Vec<String>,
    pub discount: Vec<String>,
    pub label: Vec<String>,
}

/// The closed set of tag groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagGroup {
    Category,
    Discount,
    Label,
}

impl TagGroup {
    /// Classify a tag by its class marker; unknown markers have no group
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "green" => Some(TagGroup::Category),
            "red" => Some(TagGroup::Discount),
            "blue" => Some(TagGroup::Label),
            _ => None,
        }
    }
}

impl ProductTags {
    /// Append a tag to the list for its group
    pub fn push(&mut self, group: TagGroup, name: String) {
        match group {
            TagGroup::Category => self.category.push(name),
            TagGroup::Discount => self.discount.push(name),
            TagGroup::Label => self.label.push(name),
        }
    }
}

/// Current and previous price of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub price: i64,
    pub old_price: i64,
    /// Always `old_price - price`
    pub discount: i64,
    pub discount_percent: String,
    pub currency: Option<String>,
}

/// Ordered property list serialized as a map.
///
/// Keys keep the position of their first insertion; inserting an existing
/// key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, String)>);

impl Properties {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a property, overwriting the value of an existing key
    pub fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct PropertiesVisitor;

impl<'de> Visitor<'de> for PropertiesVisitor {
    type Value = Properties;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of property names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut properties = Properties::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            properties.insert(key, value);
        }
        Ok(properties)
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// One gallery image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub preview: String,
    pub full: String,
    pub alt: String,
}

/// A product from the suggestions block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: i64,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Number of filled rating indicators
    pub rating: usize,
    pub author: Author,
    pub title: String,
    pub description: String,
    /// Date in `DD.MM.YYYY` form
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub avatar: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_keep_first_position_on_overwrite() {
        let mut props = Properties::new();
        props.insert("Color".into(), "red".into());
        props.insert("Size".into(), "L".into());
        props.insert("Color".into(), "blue".into());

        assert_eq!(props.len(), 2);
        assert_eq!(props.get("Color"), Some("blue"));
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"Color":"blue","Size":"L"}"#);

        let back: Properties = serde_json::from_str(&json).unwrap();
        assert_eq!(back, props);
    }

    #[test]
    fn test_tag_classifier_is_closed() {
        assert_eq!(TagGroup::from_marker("green"), Some(TagGroup::Category));
        assert_eq!(TagGroup::from_marker("red"), Some(TagGroup::Discount));
        assert_eq!(TagGroup::from_marker("blue"), Some(TagGroup::Label));
        assert_eq!(TagGroup::from_marker("yellow"), None);
        assert_eq!(TagGroup::from_marker("green big"), None);
        assert_eq!(TagGroup::from_marker(""), None);
    }

    #[test]
    fn test_pricing_flattens_into_product_json() {
        let product = Product {
            id: "7".into(),
            name: "Lamp".into(),
            is_liked: true,
            tags: ProductTags::default(),
            pricing: Pricing {
                price: 42,
                old_price: 60,
                discount: 18,
                discount_percent: "30.00%".into(),
                currency: Some("USD".into()),
            },
            properties: Properties::new(),
            description: String::new(),
            images: Vec::new(),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["isLiked"], true);
        assert_eq!(value["oldPrice"], 60);
        assert_eq!(value["discountPercent"], "30.00%");
        assert_eq!(value["currency"], "USD");
        assert!(value.get("pricing").is_none());
    }
}
