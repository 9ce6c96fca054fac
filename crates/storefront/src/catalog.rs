//! Read-only storefront catalog.
//!
//! The catalog ships with the crate as JSON and is only ever read here. It is
//! a separate data source from the admin product collection; the two do not
//! share identifiers.

use pugil_core::CatalogProductId;
use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// A catalog entry, with prices already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: CatalogProductId,
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub image: String,
    pub category: String,
    pub color: String,
    pub size: String,
}

/// The storefront's product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    /// Load the catalog bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of catalog products.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let products = serde_json::from_str(json)?;
        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    #[must_use]
    pub fn find(&self, id: CatalogProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in `category`, compared case-insensitively.
    pub fn by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CatalogProduct> + 'a {
        self.products
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }
}

/// Display data for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub href: String,
    pub name: String,
    pub category_label: String,
    pub image: String,
    pub price: String,
    /// Pre-discount price, rendered struck through.
    pub original_price: Option<String>,
    pub details: String,
}

impl From<&CatalogProduct> for ProductCard {
    fn from(product: &CatalogProduct) -> Self {
        Self {
            href: format!("/product/{}", product.id),
            name: product.name.clone(),
            category_label: product.category.to_uppercase(),
            image: product.image.clone(),
            price: product.price.clone(),
            original_price: product.original_price.clone(),
            details: format!("Color: {} • Size: {}", product.color, product.size),
        }
    }
}
