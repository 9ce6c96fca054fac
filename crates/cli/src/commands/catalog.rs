//! `pugil catalog` commands.

use pugil_storefront::{Catalog, CatalogProduct, ProductCard};
use tracing::info;

use super::CommandError;

/// List catalog products, optionally narrowed to one category.
pub fn list(category: Option<&str>) -> Result<(), CommandError> {
    let catalog = Catalog::bundled()?;

    let products: Vec<&CatalogProduct> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.products().iter().collect(),
    };

    if products.is_empty() {
        info!(
            "No products. Categories: {}",
            catalog.categories().join(", ")
        );
        return Ok(());
    }

    for product in products {
        let card = ProductCard::from(product);
        let price = card.original_price.as_ref().map_or_else(
            || card.price.clone(),
            |original| format!("{} (was {original})", card.price),
        );
        info!(
            "[{}] {} | {} | {} | {} | {}",
            product.id, card.name, card.category_label, price, card.details, card.href
        );
    }
    Ok(())
}
