//! `pugil admin orders` commands.

use pugil_admin::notices;
use pugil_core::{OrderId, OrderStatus};
use tracing::info;

use super::{CommandError, admin_manager};
use crate::config::CliConfig;

pub fn list(config: &CliConfig) -> Result<(), CommandError> {
    let manager = admin_manager(config)?;

    if manager.orders().is_empty() {
        info!("No orders");
    }
    for order in manager.orders() {
        info!(
            "[{}] {} | {} | {} | {} | {} | {} ({})",
            order.short_id(),
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.customer_name(),
            order.display_total(),
            order.status.label(),
            order.payment_method,
            order.shipping_method,
            order.shipping_days
        );
    }
    Ok(())
}

pub fn status(config: &CliConfig, id: &OrderId, status: OrderStatus) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    manager.update_order_status(id, status)?;
    info!("{}", notices::status_updated(status));
    Ok(())
}

pub fn verify(config: &CliConfig, id: &OrderId, code: &str) -> Result<(), CommandError> {
    let mut manager = admin_manager(config)?;
    manager.verify_delivery_code(id, code)?;
    info!("{}", notices::order_verified());
    Ok(())
}
