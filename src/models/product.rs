use super::Price;
use serde::Deserialize;

/// One entry of the `/products` payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub product_name: String,
    pub description: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl Product {

    pub fn new(
        product_name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            description: description.into(),
            price: price.into(),
            category: category.into(),
            product_id: None,
            available: None,
        }
    }

    /// Products without an `available` flag count as available.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }

    /// Parses a JSON array of products.
    pub fn parse_list(json: &str) -> anyhow::Result<Vec<Self>> {
        serde_json::from_str(json).map_err(anyhow::Error::from)
    }
}
