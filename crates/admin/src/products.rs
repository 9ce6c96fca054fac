//! Product form and product operations.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use pugil_core::storage::LocalStorage;
use pugil_core::{PLACEHOLDER_IMAGE, Product, ProductId};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::error::{AdminError, Result};
use crate::manager::AdminDataManager;

const REQUIRED_FIELDS_MESSAGE: &str = "Nome e preço são obrigatórios.";

/// Product fields as entered in the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    /// `None` until the admin enters a price.
    pub price: Option<Decimal>,
    pub category: String,
    pub image_url: String,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub original_price: Option<Decimal>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: None,
            category: String::new(),
            image_url: PLACEHOLDER_IMAGE.to_owned(),
            colors: BTreeSet::new(),
            sizes: BTreeSet::new(),
            original_price: None,
        }
    }
}

/// Add `value` if absent, remove it if present. Returns whether it is now
/// selected.
fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_owned());
        true
    }
}

impl ProductForm {
    /// A form pre-filled for editing `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: Some(product.price),
            category: product.category.clone(),
            image_url: product.image_url.clone(),
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
            original_price: product.original_price,
        }
    }

    pub fn toggle_color(&mut self, color: &str) -> bool {
        toggle(&mut self.colors, color)
    }

    pub fn toggle_size(&mut self, size: &str) -> bool {
        toggle(&mut self.sizes, size)
    }

    /// Check the required fields and return the price.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] if the name is blank or the price
    /// is missing or zero.
    pub fn validate(&self) -> Result<Decimal> {
        match self.price {
            Some(price) if !price.is_zero() && !self.name.trim().is_empty() => Ok(price),
            _ => Err(AdminError::Validation(REQUIRED_FIELDS_MESSAGE.to_owned())),
        }
    }

    fn into_product(self, id: ProductId, price: Decimal, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price,
            original_price: self.original_price,
            category: self.category,
            image_url: self.image_url,
            colors: self.colors,
            sizes: self.sizes,
            created_at,
        }
    }
}

impl<S: LocalStorage> AdminDataManager<S> {
    #[must_use]
    pub fn find_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Add a product created now.
    ///
    /// # Errors
    ///
    /// See [`Self::add_product_at`].
    pub fn add_product(&mut self, form: ProductForm) -> Result<Product> {
        self.add_product_at(form, Utc::now())
    }

    /// Add a product with creation time `now`.
    ///
    /// The id is `prod_<unix millis>`, bumped until it is unused.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or missing price, and a
    /// storage error if the collection cannot be saved. Either way nothing
    /// changes.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub fn add_product_at(&mut self, form: ProductForm, now: DateTime<Utc>) -> Result<Product> {
        let price = form.validate()?;

        let mut millis = now.timestamp_millis();
        let id = loop {
            let candidate = ProductId::new(format!("prod_{millis}"));
            if self.find_product(&candidate).is_none() {
                break candidate;
            }
            millis = millis.saturating_add(1);
        };

        let product = form.into_product(id, price, now);
        let mut products = self.products.clone();
        products.push(product.clone());
        self.save_products(products)?;

        info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    /// Replace the fields of product `id` with the form's. The id and
    /// creation time are kept.
    ///
    /// # Errors
    ///
    /// Returns a validation error, [`AdminError::ProductNotFound`], or a
    /// storage error. Nothing changes on error.
    #[instrument(skip(self, form))]
    pub fn edit_product(&mut self, id: &ProductId, form: ProductForm) -> Result<Product> {
        let price = form.validate()?;

        let mut products = self.products.clone();
        let slot = products
            .iter_mut()
            .find(|product| &product.id == id)
            .ok_or_else(|| AdminError::ProductNotFound(id.clone()))?;

        let updated = form.into_product(slot.id.clone(), price, slot.created_at);
        slot.clone_from(&updated);
        self.save_products(products)?;

        info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    /// Remove product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ProductNotFound`] or a storage error.
    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product> {
        let position = self
            .products
            .iter()
            .position(|product| &product.id == id)
            .ok_or_else(|| AdminError::ProductNotFound(id.clone()))?;

        let mut products = self.products.clone();
        let removed = products.remove(position);
        self.save_products(products)?;

        info!(product_id = %id, "Product deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pugil_core::storage::{self, ADMIN_PRODUCTS_KEY, MemoryStorage};
    use pugil_core::{Order, OrderId, OrderStatus};
    use serde_json::Value;

    use super::*;
    use crate::seed::{seed_orders, seed_products, seed_timestamp};

    fn manager() -> AdminDataManager<MemoryStorage> {
        AdminDataManager::load(MemoryStorage::new()).0
    }

    fn stored_products(manager: &AdminDataManager<MemoryStorage>) -> Vec<Value> {
        let raw = manager
            .storage()
            .get_item(ADMIN_PRODUCTS_KEY)
            .unwrap()
            .unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn gloves_form() -> ProductForm {
        ProductForm {
            name: "Luvas de Treino".to_owned(),
            description: "Luvas de couro".to_owned(),
            price: Some(Decimal::new(4999, 2)),
            category: "Luvas".to_owned(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_default_form_uses_placeholder() {
        let form = ProductForm::default();
        assert_eq!(form.image_url, PLACEHOLDER_IMAGE);
        assert!(form.price.is_none());
    }

    #[test]
    fn test_toggle_is_set_membership() {
        let mut form = ProductForm::default();
        assert!(form.toggle_color("Preto"));
        assert!(form.toggle_color("Azul"));
        assert!(!form.toggle_color("Preto"));
        assert_eq!(form.colors.iter().collect::<Vec<_>>(), vec!["Azul"]);

        assert!(form.toggle_size("M"));
        assert!(!form.toggle_size("M"));
        assert!(form.sizes.is_empty());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut form = gloves_form();
        form.name = "   ".to_owned();
        assert!(matches!(form.validate(), Err(AdminError::Validation(_))));

        let mut form = gloves_form();
        form.price = None;
        assert!(form.validate().is_err());

        let mut form = gloves_form();
        form.price = Some(Decimal::ZERO);
        assert!(form.validate().is_err());

        assert_eq!(gloves_form().validate().unwrap(), Decimal::new(4999, 2));
    }

    #[test]
    fn test_add_product_assigns_time_based_id() {
        let mut manager = manager();
        let now = seed_timestamp();

        let first = manager.add_product_at(gloves_form(), now).unwrap();
        let second = manager.add_product_at(gloves_form(), now).unwrap();

        assert_eq!(first.id.as_str(), format!("prod_{}", now.timestamp_millis()));
        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, now);
        assert_eq!(manager.products().len(), 4);
        assert_eq!(stored_products(&manager).len(), 4);
    }

    #[test]
    fn test_invalid_add_never_touches_storage() {
        let mut manager = manager();
        let before = manager.storage().clone();

        for form in [
            ProductForm {
                name: String::new(),
                ..gloves_form()
            },
            ProductForm {
                price: None,
                ..gloves_form()
            },
        ] {
            let err = manager.add_product(form).unwrap_err();
            assert!(err.notice().is_destructive());
        }

        assert_eq!(manager.storage(), &before);
        assert_eq!(manager.products(), seed_products().as_slice());
    }

    #[test]
    fn test_edit_changes_only_target_record() {
        let mut manager = manager();
        manager.add_product(gloves_form()).unwrap();
        let before = stored_products(&manager);

        let target = ProductId::new("prod_2");
        let mut form = ProductForm::from_product(manager.find_product(&target).unwrap());
        form.price = Some(Decimal::new(2499, 2));
        form.toggle_size("M");
        let edited = manager.edit_product(&target, form).unwrap();

        assert_eq!(edited.id, target);
        assert_eq!(edited.created_at, seed_timestamp());

        let after = stored_products(&manager);
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            if new["id"] == "prod_2" {
                assert_eq!(new["price"], 24.99);
                assert_eq!(new["sizes"], serde_json::json!(["M"]));
            } else {
                assert_eq!(old.to_string(), new.to_string());
            }
        }
    }

    #[test]
    fn test_edit_unknown_or_invalid() {
        let mut manager = manager();
        let err = manager
            .edit_product(&ProductId::new("prod_404"), gloves_form())
            .unwrap_err();
        assert!(matches!(err, AdminError::ProductNotFound(_)));

        let err = manager
            .edit_product(
                &ProductId::new("prod_1"),
                ProductForm {
                    price: None,
                    ..gloves_form()
                },
            )
            .unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));
        assert_eq!(manager.products(), seed_products().as_slice());
    }

    #[test]
    fn test_delete_product() {
        let mut manager = manager();
        let removed = manager.delete_product(&ProductId::new("prod_1")).unwrap();
        assert_eq!(removed.name, "Sapatos de Corrida");
        assert_eq!(manager.products().len(), 1);
        assert_eq!(stored_products(&manager).len(), 1);

        let err = manager
            .delete_product(&ProductId::new("prod_1"))
            .unwrap_err();
        assert!(matches!(err, AdminError::ProductNotFound(_)));
    }

    #[test]
    fn test_product_changes_leave_orders_alone() {
        let mut manager = manager();
        manager.add_product(gloves_form()).unwrap();
        manager.delete_product(&ProductId::new("prod_2")).unwrap();

        let orders: Vec<Order> =
            storage::read_json(manager.storage(), pugil_core::storage::ADMIN_ORDERS_KEY)
                .unwrap()
                .unwrap();
        assert_eq!(orders, seed_orders());
        assert_eq!(orders[0].id, OrderId::new("ord_1"));
        assert_eq!(orders[0].status, OrderStatus::Completed);
    }
}
