//! Shopping cart state.
//!
//! Lines are identified by the `(product id, size, color)` triple: the same
//! product in two sizes is two lines, and adding an existing triple again
//! bumps its quantity instead of duplicating it. A line never holds a
//! quantity of zero; setting it to zero or below removes the line.

use pugil_core::storage::{self, CART_KEY, LocalStorage, StorageError};
use pugil_core::{CatalogProductId, CurrencyCode, Price, PriceError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CatalogProduct;

/// A cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CatalogProductId,
    pub name: String,
    /// Formatted unit price, as shown on the product page.
    pub price: String,
    pub image: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// Build a line for `quantity` units of a catalog product.
    #[must_use]
    pub fn from_catalog(
        product: &CatalogProduct,
        size: impl Into<String>,
        color: Option<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
            size: size.into(),
            color,
            quantity,
        }
    }

    /// Whether this line has the given identity triple.
    #[must_use]
    pub fn is_line(&self, id: CatalogProductId, size: &str, color: Option<&str>) -> bool {
        self.id == id && self.size == size && self.color.as_deref() == color
    }

    /// Unit price parsed from the display string.
    ///
    /// # Errors
    ///
    /// Returns an error if the display price cannot be parsed.
    pub fn unit_price(&self) -> Result<Decimal, PriceError> {
        Price::parse_display(&self.price)
    }
}

/// In-memory cart, rendered by the storefront after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency: CurrencyCode,
}

impl CartStore {
    /// An empty cart priced in euros.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cart saved under the `cart` key.
    ///
    /// A missing or unreadable entry yields an empty cart; lines with a zero
    /// quantity are dropped.
    #[must_use]
    pub fn restore<S: LocalStorage + ?Sized>(storage: &S) -> Self {
        let items = match storage::read_json::<Vec<CartItem>, _>(storage, CART_KEY) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable cart");
                Vec::new()
            }
        };

        Self {
            items: items.into_iter().filter(|item| item.quantity > 0).collect(),
            currency: CurrencyCode::default(),
        }
    }

    /// Save the cart under the `cart` key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn persist<S: LocalStorage + ?Sized>(&self, storage: &mut S) -> Result<(), StorageError> {
        storage::write_json(storage, CART_KEY, &self.items)
    }

    /// Add a line, or grow the existing line with the same identity.
    ///
    /// Adding zero units is a no-op.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            debug!(product_id = %item.id, "Ignoring add of zero units");
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.is_line(item.id, &item.size, item.color.as_deref()))
        {
            line.quantity = line.quantity.saturating_add(item.quantity);
            debug!(product_id = %item.id, quantity = line.quantity, "Increased cart line");
        } else {
            debug!(product_id = %item.id, quantity = item.quantity, "Added cart line");
            self.items.push(item);
        }
    }

    /// Set the quantity of a line. Zero or below removes the line; an
    /// unknown line is left alone.
    pub fn update_quantity(
        &mut self,
        id: CatalogProductId,
        size: &str,
        quantity: i64,
        color: Option<&str>,
    ) {
        if quantity <= 0 {
            self.remove_item(id, size, color);
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.is_line(id, size, color))
        {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a line. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, id: CatalogProductId, size: &str, color: Option<&str>) {
        self.items.retain(|line| !line.is_line(id, size, color));
    }

    /// Sum of `unit price × quantity` across all lines.
    ///
    /// Lines whose price cannot be parsed, or whose subtotal does not fit in
    /// a `Decimal`, contribute nothing. A sum that would overflow stops at the
    /// last representable running total.
    #[must_use]
    pub fn cart_total_amount(&self) -> Decimal {
        self.items.iter().fold(Decimal::ZERO, |total, line| {
            let subtotal = match line.unit_price() {
                Ok(price) => price.checked_mul(Decimal::from(line.quantity)),
                Err(e) => {
                    warn!(product_id = %line.id, error = %e, "Unpriced cart line");
                    return total;
                }
            };
            let Some(subtotal) = subtotal else {
                warn!(
                    product_id = %line.id,
                    quantity = line.quantity,
                    "Cart line subtotal overflows"
                );
                return total;
            };
            total.checked_add(subtotal).unwrap_or_else(|| {
                warn!(product_id = %line.id, "Cart total overflows");
                total
            })
        })
    }

    /// Formatted cart total (e.g. `€30.00`).
    #[must_use]
    pub fn cart_total(&self) -> String {
        Price::new(self.cart_total_amount(), self.currency).display()
    }

    /// Total units across all lines, for the cart badge.
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pugil_core::storage::MemoryStorage;

    use super::*;

    fn line(id: i32, size: &str, color: Option<&str>, quantity: u32, price: &str) -> CartItem {
        CartItem {
            id: CatalogProductId::new(id),
            name: format!("Product {id}"),
            price: price.to_owned(),
            image: "/images/products/test.jpg".to_owned(),
            size: size.to_owned(),
            color: color.map(str::to_owned),
            quantity,
        }
    }

    #[test]
    fn test_adding_same_line_updates_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 2, "€10.00"));
        assert_eq!(cart.cart_item_count(), 2);

        cart.add_item(line(1, "M", None, 1, "€10.00"));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.cart_item_count(), 3);
        assert_eq!(cart.cart_total(), "€30.00");
    }

    #[test]
    fn test_size_and_color_distinguish_lines() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 1, "€10.00"));
        cart.add_item(line(1, "L", None, 1, "€10.00"));
        cart.add_item(line(1, "M", Some("Preto"), 1, "€10.00"));
        assert_eq!(cart.items().len(), 3);

        cart.remove_item(CatalogProductId::new(1), "M", Some("Preto"));
        assert_eq!(cart.items().len(), 2);
        assert!(
            cart.items()
                .iter()
                .all(|item| item.color.is_none())
        );
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut cart = CartStore::new();
        cart.add_item(line(2, "12oz", Some("Vermelho"), 1, "€49.99"));

        cart.update_quantity(CatalogProductId::new(2), "12oz", 0, Some("Vermelho"));
        assert!(cart.is_empty());
        assert_eq!(cart.cart_item_count(), 0);
        assert_eq!(cart.cart_total(), "€0.00");
    }

    #[test]
    fn test_update_negative_and_unknown_lines() {
        let mut cart = CartStore::new();
        cart.add_item(line(3, "M", None, 4, "€5.00"));

        // Unknown line: nothing happens
        cart.update_quantity(CatalogProductId::new(9), "M", 7, None);
        assert_eq!(cart.cart_item_count(), 4);

        cart.update_quantity(CatalogProductId::new(3), "M", 6, None);
        assert_eq!(cart.cart_item_count(), 6);

        cart.update_quantity(CatalogProductId::new(3), "M", -1, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 1, "€10.00"));
        cart.remove_item(CatalogProductId::new(1), "S", None);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_add_zero_units_is_ignored() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 0, "€10.00"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_count_matches_quantities_across_sequence() {
        let mut cart = CartStore::new();
        let id = CatalogProductId::new;

        cart.add_item(line(1, "M", None, 2, "€10.00"));
        cart.add_item(line(2, "L", Some("Azul"), 3, "€7.50"));
        cart.update_quantity(id(1), "M", 5, None);
        cart.add_item(line(3, "S", None, 1, "€1.00"));
        cart.remove_item(id(3), "S", None);
        cart.update_quantity(id(2), "L", 1, Some("Azul"));

        let expected: u32 = cart.items().iter().map(|item| item.quantity).sum();
        assert_eq!(cart.cart_item_count(), expected);
        assert_eq!(expected, 6);
        assert_eq!(cart.cart_total(), "€57.50");
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 2, "€10.00"));
        cart.add_item(line(2, "M", None, 1, "sob consulta"));
        assert_eq!(cart.cart_total(), "€20.00");
        assert_eq!(cart.cart_item_count(), 3);
    }

    #[test]
    fn test_overflowing_line_counts_as_zero() {
        let mut storage = MemoryStorage::new();
        let huge = line(1, "M", None, 2, "€79228162514264337593543950335");
        let small = line(2, "M", None, 1, "€10.00");
        storage
            .set_item(CART_KEY, &serde_json::to_string(&vec![huge, small]).unwrap())
            .unwrap();

        let cart = CartStore::restore(&storage);
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.cart_total(), "€10.00");
    }

    #[test]
    fn test_overflowing_sum_keeps_running_total() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 1, "€79228162514264337593543950335"));
        cart.add_item(line(2, "M", None, 1, "€79228162514264337593543950335"));
        assert_eq!(
            cart.cart_total_amount(),
            Decimal::from_str_exact("79228162514264337593543950335").unwrap()
        );
    }

    #[test]
    fn test_max_quantity_total_does_not_panic() {
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", None, 1, "€89.99"));
        cart.update_quantity(CatalogProductId::new(1), "M", i64::MAX, None);
        assert_eq!(cart.cart_item_count(), u32::MAX);
        assert_eq!(
            cart.cart_total_amount(),
            Decimal::new(8999, 2) * Decimal::from(u32::MAX)
        );
    }

    #[test]
    fn test_persist_and_restore() {
        let mut storage = MemoryStorage::new();
        let mut cart = CartStore::new();
        cart.add_item(line(1, "M", Some("Preto"), 2, "€10.00"));
        cart.persist(&mut storage).unwrap();

        let restored = CartStore::restore(&storage);
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_restore_discards_corrupt_cart() {
        let mut storage = MemoryStorage::new();
        storage.set_item(CART_KEY, "[{\"id\":").unwrap();
        assert!(CartStore::restore(&storage).is_empty());
    }
}
