//! `pugil cart` commands.
//!
//! The cart is restored from the data directory before each command and
//! saved again afterwards.

use chrono::Utc;
use pugil_core::storage::{CART_KEY, FileStorage, LocalStorage};
use pugil_core::{CatalogProductId, PersonalInfo, UserId};
use pugil_storefront::{
    CartItem, CartStore, Catalog, CheckoutDetails, ShippingOption, begin_checkout, place_order,
};
use tracing::{info, warn};

use super::{CommandError, open_storage};
use crate::config::CliConfig;

/// Buyer details collected at checkout.
pub struct CheckoutArgs {
    pub payment_method: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

fn with_cart(
    config: &CliConfig,
    f: impl FnOnce(&mut CartStore) -> Result<(), CommandError>,
) -> Result<(), CommandError> {
    let mut storage = open_storage(config)?;
    let mut cart = CartStore::restore(&storage);
    f(&mut cart)?;
    cart.persist(&mut storage)?;
    show_cart(&cart);
    Ok(())
}

fn show_cart(cart: &CartStore) {
    if cart.is_empty() {
        info!("Cart is empty");
        return;
    }
    for item in cart.items() {
        let color = item.color.as_deref().unwrap_or("-");
        info!(
            "[{}] {} | size {} | color {} | {} x {}",
            item.id, item.name, item.size, color, item.quantity, item.price
        );
    }
    info!("Items: {} | Total: {}", cart.cart_item_count(), cart.cart_total());
}

pub fn show(config: &CliConfig) -> Result<(), CommandError> {
    let storage = open_storage(config)?;
    show_cart(&CartStore::restore(&storage));
    Ok(())
}

/// Add units of a catalog product. Size and color default to the
/// product's own.
pub fn add(
    config: &CliConfig,
    id: CatalogProductId,
    size: Option<String>,
    color: Option<String>,
    quantity: u32,
) -> Result<(), CommandError> {
    let catalog = Catalog::bundled()?;
    let product = catalog.find(id).ok_or(CommandError::UnknownProduct(id))?;
    let size = size.unwrap_or_else(|| product.size.clone());
    let color = color.or_else(|| Some(product.color.clone()));
    let item = CartItem::from_catalog(product, size, color, quantity);

    with_cart(config, |cart| {
        cart.add_item(item);
        Ok(())
    })
}

pub fn set(
    config: &CliConfig,
    id: CatalogProductId,
    size: &str,
    color: Option<&str>,
    quantity: i64,
) -> Result<(), CommandError> {
    with_cart(config, |cart| {
        cart.update_quantity(id, size, quantity, color);
        Ok(())
    })
}

pub fn remove(
    config: &CliConfig,
    id: CatalogProductId,
    size: &str,
    color: Option<&str>,
) -> Result<(), CommandError> {
    with_cart(config, |cart| {
        cart.remove_item(id, size, color);
        Ok(())
    })
}

pub fn clear(config: &CliConfig) -> Result<(), CommandError> {
    with_cart(config, |cart| {
        cart.clear();
        Ok(())
    })
}

/// Save the cart after an order has been committed.
///
/// The order is already in `admin_orders`, so a failure here must not fail
/// the command. If the emptied cart cannot be written the saved entry is
/// removed instead, so the same lines are not ordered twice.
fn save_emptied_cart<S: LocalStorage + ?Sized>(storage: &mut S, cart: &CartStore) {
    let Err(e) = cart.persist(storage) else {
        return;
    };
    warn!(error = %e, "Failed to save emptied cart, removing it");
    if let Err(e) = storage.remove_item(CART_KEY) {
        warn!(error = %e, "Saved cart still holds the ordered items");
    }
}

/// Place an order for the cart and empty it.
pub fn checkout(config: &CliConfig, args: CheckoutArgs) -> Result<(), CommandError> {
    let mut storage: FileStorage = open_storage(config)?;
    let mut cart = CartStore::restore(&storage);

    let route = begin_checkout(&config.identity, &cart)?;
    tracing::debug!(route, "Checkout allowed");

    let personal_info = match (args.first_name, args.last_name) {
        (None, None) => None,
        (first_name, last_name) => Some(PersonalInfo {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            phone: args.phone.unwrap_or_default(),
        }),
    };
    let details = CheckoutDetails {
        user_id: config.identity.username.as_deref().map(UserId::new),
        personal_info,
        payment_method: args.payment_method,
        shipping: ShippingOption::standard(),
    };

    let order = place_order(&mut storage, &mut cart, details, Utc::now())?;
    save_emptied_cart(&mut storage, &cart);

    info!(
        "Order {} placed | {} | {} ({})",
        order.id,
        order.display_total(),
        order.shipping_method,
        order.shipping_days
    );
    if let Some(code) = &order.delivery_code {
        info!("Delivery code: {}", code.reveal());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pugil_core::storage::{MemoryStorage, StorageError};

    use super::*;

    /// Storage that refuses to write the cart.
    struct ReadOnlyCart(MemoryStorage);

    impl LocalStorage for ReadOnlyCart {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == CART_KEY {
                return Err(StorageError::Io {
                    key: key.to_owned(),
                    source: std::io::Error::other("read-only"),
                });
            }
            self.0.set_item(key, value)
        }

        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            self.0.remove_item(key)
        }
    }

    #[test]
    fn test_unwritable_cart_is_removed_after_order() {
        let mut saved = MemoryStorage::new();
        let line = r#"{"id":1,"name":"Luvas","price":"€89.99","image":"","size":"12oz","quantity":2}"#;
        saved.set_item(CART_KEY, &format!("[{line}]")).unwrap();
        let mut storage = ReadOnlyCart(saved);
        assert_eq!(CartStore::restore(&storage).items().len(), 1);

        save_emptied_cart(&mut storage, &CartStore::new());

        assert!(storage.0.get_item(CART_KEY).unwrap().is_none());
        assert!(CartStore::restore(&storage).is_empty());
    }

    #[test]
    fn test_emptied_cart_is_saved() {
        let mut storage = MemoryStorage::new();
        save_emptied_cart(&mut storage, &CartStore::new());
        assert_eq!(storage.get_item(CART_KEY).unwrap().as_deref(), Some("[]"));
    }
}
