//! Order status changes and delivery verification.

use pugil_core::storage::LocalStorage;
use pugil_core::{Order, OrderId, OrderStatus};
use tracing::{info, instrument, warn};

use crate::error::{AdminError, Result};
use crate::manager::AdminDataManager;

impl<S: LocalStorage> AdminDataManager<S> {
    #[must_use]
    pub fn find_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Overwrite the status of order `id`.
    ///
    /// Any status may follow any other. Moving an order out of a terminal
    /// status is allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::OrderNotFound`] or a storage error.
    #[instrument(skip(self))]
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<Order> {
        let mut orders = self.orders.clone();
        let order = orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| AdminError::OrderNotFound(id.clone()))?;

        let previous = order.status;
        if previous.is_terminal() && previous != status {
            warn!(order_id = %id, from = %previous, to = %status, "Reopening finished order");
        }
        order.status = status;
        let updated = order.clone();
        self.save_orders(orders)?;

        info!(order_id = %id, from = %previous, to = %status, "Order status updated");
        Ok(updated)
    }

    /// Complete order `id` if `input` matches its delivery code.
    ///
    /// Both codes are compared after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidDeliveryCode`] if the order is unknown,
    /// has no code, or the code does not match; the order is left as it
    /// was and the caller may retry.
    #[instrument(skip(self, input))]
    pub fn verify_delivery_code(&mut self, id: &OrderId, input: &str) -> Result<Order> {
        let matches = self
            .find_order(id)
            .and_then(|order| order.delivery_code.as_ref())
            .is_some_and(|code| code.matches(input));

        if !matches {
            warn!(order_id = %id, "Delivery code rejected");
            return Err(AdminError::InvalidDeliveryCode);
        }

        let order = self.update_order_status(id, OrderStatus::Completed)?;
        info!(order_id = %id, "Delivery verified");
        Ok(order)
    }
}
