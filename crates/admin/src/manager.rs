//! The admin panel's view of local data.
//!
//! [`AdminDataManager`] owns the storage backend plus in-memory copies of the
//! `admin_products` and `admin_orders` collections. Every mutation writes the
//! whole collection first and only then updates memory, so a failed write
//! leaves both sides as they were.
//!
//! Product operations live in [`crate::products`], order operations in
//! [`crate::orders`].

use pugil_core::storage::{
    self, ADMIN_ORDERS_KEY, ADMIN_PRODUCTS_KEY, LATEST_ORDER_KEY, LocalStorage, StorageError,
};
use pugil_core::{Notice, Order, Product};
use tracing::{error, info, instrument};

use crate::error::Result;
use crate::notices;
use crate::seed::{seed_orders, seed_products};

/// Products and orders for the admin panel, backed by local storage.
#[derive(Debug)]
pub struct AdminDataManager<S> {
    storage: S,
    pub(crate) products: Vec<Product>,
    pub(crate) orders: Vec<Order>,
}

impl<S: LocalStorage> AdminDataManager<S> {
    /// Load both collections from `storage`.
    ///
    /// Absent collections are seeded and persisted. If either collection
    /// cannot be read, both fall back to the seeds without touching storage,
    /// and the returned notice tells the admin so.
    #[instrument(skip_all)]
    pub fn load(storage: S) -> (Self, Option<Notice>) {
        let mut manager = Self {
            storage,
            products: Vec::new(),
            orders: Vec::new(),
        };
        let notice = manager.reload();
        (manager, notice)
    }

    fn reload(&mut self) -> Option<Notice> {
        match self.read_or_seed() {
            Ok((products, orders)) => {
                info!(
                    products = products.len(),
                    orders = orders.len(),
                    "Admin data loaded"
                );
                self.products = products;
                self.orders = orders;
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to load admin data, using defaults");
                self.products = seed_products();
                self.orders = seed_orders();
                Some(notices::load_fallback())
            }
        }
    }

    fn read_or_seed(&mut self) -> std::result::Result<(Vec<Product>, Vec<Order>), StorageError> {
        let stored_products: Option<Vec<Product>> =
            storage::read_json(&self.storage, ADMIN_PRODUCTS_KEY)?;
        let stored_orders: Option<Vec<Order>> =
            storage::read_json(&self.storage, ADMIN_ORDERS_KEY)?;

        let products = if let Some(products) = stored_products {
            products
        } else {
            let products = seed_products();
            storage::write_json(&mut self.storage, ADMIN_PRODUCTS_KEY, &products)?;
            info!("Seeded admin products");
            products
        };

        let orders = if let Some(orders) = stored_orders {
            orders
        } else {
            let orders = seed_orders();
            storage::write_json(&mut self.storage, ADMIN_ORDERS_KEY, &orders)?;
            info!("Seeded admin orders");
            orders
        };

        Ok((products, orders))
    }

    /// Clear `admin_products`, `admin_orders` and `latestOrder`, then load
    /// the seeds again.
    ///
    /// Returns the notice to show: a confirmation, or the load fallback
    /// warning if re-seeding could not be persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if a key cannot be removed.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Notice> {
        for key in [ADMIN_PRODUCTS_KEY, ADMIN_ORDERS_KEY, LATEST_ORDER_KEY] {
            self.storage.remove_item(key)?;
        }
        info!("Admin data cleared");

        Ok(self.reload().unwrap_or_else(notices::data_reset))
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub(crate) fn save_products(&mut self, products: Vec<Product>) -> Result<()> {
        storage::write_json(&mut self.storage, ADMIN_PRODUCTS_KEY, &products)?;
        self.products = products;
        Ok(())
    }

    pub(crate) fn save_orders(&mut self, orders: Vec<Order>) -> Result<()> {
        storage::write_json(&mut self.storage, ADMIN_ORDERS_KEY, &orders)?;
        self.orders = orders;
        Ok(())
    }
}
