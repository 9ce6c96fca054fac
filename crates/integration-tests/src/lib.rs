//! Integration tests for PUGIL.
//!
//! Cross-crate flows over a real file-backed store: a shopper checks out in
//! the storefront, and the admin panel picks the order up from the same data
//! directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pugil-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use pugil_core::storage::{FileStorage, StorageError};
use pugil_core::{CatalogProductId, Email, Identity};
use pugil_storefront::{CartItem, CartStore, Catalog};
use tempfile::TempDir;

/// A throwaway data directory.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Open a storage handle on the data directory. Handles opened on the
    /// same context see each other's writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be opened.
    pub fn storage(&self) -> Result<FileStorage, StorageError> {
        FileStorage::open(self.dir.path())
    }
}

/// A signed-in shopper.
#[must_use]
pub fn shopper() -> Identity {
    Identity::signed_in(
        Some("Ana Silva".to_owned()),
        Some("ana".to_owned()),
        Email::parse("ana@example.com").ok(),
    )
}

/// A signed-in admin.
#[must_use]
pub fn admin() -> Identity {
    Identity::signed_in(None, Some("admin".to_owned()), None)
}

/// A cart holding `quantity` units of catalog product `id`, in the
/// product's own size and color.
#[must_use]
pub fn cart_with(catalog: &Catalog, id: i32, quantity: u32) -> CartStore {
    let mut cart = CartStore::new();
    if let Some(product) = catalog.find(CatalogProductId::new(id)) {
        cart.add_item(CartItem::from_catalog(
            product,
            product.size.clone(),
            Some(product.color.clone()),
            quantity,
        ));
    }
    cart
}
