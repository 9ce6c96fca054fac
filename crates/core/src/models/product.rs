//! Admin-managed products.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Image shown until a real product photo is uploaded.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn default_image_url() -> String {
    PLACEHOLDER_IMAGE.to_owned()
}

/// A product as stored under `admin_products`.
///
/// Prices are persisted as JSON numbers. Colors and sizes are sets so that
/// toggling a choice is order-independent and the stored JSON is
/// deterministic; both default to empty when absent from stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Pre-discount price, shown struck through when present.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_image_url")]
    pub image_url: String,
    #[serde(default)]
    pub colors: BTreeSet<String>,
    #[serde(default)]
    pub sizes: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Formatted selling price (e.g. `€89.99`).
    #[must_use]
    pub fn display_price(&self) -> String {
        Price::eur(self.price).display()
    }

    /// Formatted original price, if the product is discounted.
    #[must_use]
    pub fn display_original_price(&self) -> Option<String> {
        self.original_price.map(|p| Price::eur(p).display())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": "prod_1",
            "name": "Sapatos de Corrida",
            "description": "Sapatos leves",
            "price": 89.99,
            "category": "calçados",
            "image_url": "/placeholder.svg",
            "created_at": "2025-01-01T00:00:00.000Z"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "prod_1");
        assert_eq!(product.price, Decimal::new(8999, 2));
        assert!(product.colors.is_empty());
        assert!(product.original_price.is_none());
        assert_eq!(product.display_price(), "€89.99");
    }

    #[test]
    fn test_price_serializes_as_number() {
        let json = r#"{"id":"prod_2","name":"Luvas","price":49.5,"original_price":59.9,
            "colors":["Vermelho","Preto"],"created_at":"2025-01-01T00:00:00Z"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(49.5));
        assert_eq!(value["original_price"], serde_json::json!(59.9));
        assert_eq!(value["image_url"], "/placeholder.svg");
        // Sets serialize sorted
        assert_eq!(value["colors"], serde_json::json!(["Preto", "Vermelho"]));
        assert_eq!(product.display_original_price().as_deref(), Some("€59.90"));
    }
}
