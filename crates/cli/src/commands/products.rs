//! `pugil admin products` commands.

use std::collections::BTreeSet;

use pugil_admin::{AdminError, AvailableOptions, ProductForm, notices};
use pugil_core::ProductId;
use rust_decimal::Decimal;
use tracing::info;

use super::{CommandError, admin_manager};
use crate::config::CliConfig;

/// Product fields given on the command line. Unset fields keep the form's
/// current value.
#[derive(Debug, Default)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    /// Colors to toggle on or off.
    pub colors: Vec<String>,
    /// Sizes to toggle on or off.
    pub sizes: Vec<String>,
}

impl ProductFields {
    fn apply(self, form: &mut ProductForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if self.price.is_some() {
            form.price = self.price;
        }
        if self.original_price.is_some() {
            form.original_price = self.original_price;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        for color in &self.colors {
            form.toggle_color(color);
        }
        for size in &self.sizes {
            form.toggle_size(size);
        }
    }
}

fn join(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "-".to_owned()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

pub fn list(config: &CliConfig) -> Result<(), CommandError> {
    let manager = admin_manager(config)?;
    let options = AvailableOptions::bundled()?;

    for product in manager.products() {
        let colors = product
            .colors
            .iter()
            .map(|name| format!("{name} ({})", options.color_value(name)))
            .collect::<Vec<_>>();
        let price = product.display_original_price().map_or_else(
            || product.display_price(),
            |original| format!("{} (was {original})", product.display_price()),
        );
        info!(
            "[{}] {} | {} | {} | colors: {} | sizes: {}",
            product.id,
            product.name,
            product.category,
            price,
            if colors.is_empty() { "-".to_owned() } else { colors.join(", ") },
            join(&product.sizes)
        );
    }
    Ok(())
}

pub fn add(config: &CliConfig, fields: ProductFields) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    let mut form = ProductForm::default();
    fields.apply(&mut form);

    let product = manager.add_product(form)?;
    info!("{}", notices::product_added());
    info!("Created {}", product.id);
    Ok(())
}

pub fn edit(config: &CliConfig, id: &ProductId, fields: ProductFields) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    let mut form = manager
        .find_product(id)
        .map(ProductForm::from_product)
        .ok_or_else(|| AdminError::ProductNotFound(id.clone()))?;
    fields.apply(&mut form);

    manager.edit_product(id, form)?;
    info!("{}", notices::product_updated());
    Ok(())
}

pub fn delete(config: &CliConfig, id: &ProductId) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    manager.delete_product(id)?;
    info!("{}", notices::product_deleted());
    Ok(())
}
