//! Checkout hand-off.
//!
//! Payment happens on an external checkout route. This module decides
//! whether the shopper may go there, and records the resulting order where
//! the admin panel will find it: appended to `admin_orders` and stored as
//! `latestOrder` for the confirmation screen.

use chrono::{DateTime, Utc};
use pugil_core::storage::{self, ADMIN_ORDERS_KEY, LATEST_ORDER_KEY, LocalStorage, StorageError};
use pugil_core::{DeliveryCode, Identity, Order, OrderId, OrderStatus, PersonalInfo, UserId};
use rand::Rng;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::cart::CartStore;
use crate::error::{CheckoutError, Result};

/// Route the navigator is sent to once checkout may begin.
pub const CHECKOUT_ROUTE: &str = "/checkout";

/// Number of digits in a delivery code.
pub const DELIVERY_CODE_DIGITS: usize = 6;

/// How the order travels to the buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingOption {
    pub method: String,
    /// Expected delivery window, free text.
    pub days: String,
}

impl ShippingOption {
    /// Standard mainland delivery.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            method: "Entrega Padrão".to_owned(),
            days: "3-5 dias úteis".to_owned(),
        }
    }
}

/// Everything checkout collects besides the cart.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub user_id: Option<UserId>,
    pub personal_info: Option<PersonalInfo>,
    pub payment_method: String,
    pub shipping: ShippingOption,
}

/// Decide whether the shopper can proceed to the checkout route.
///
/// # Errors
///
/// Returns [`CheckoutError::NotSignedIn`] for anonymous shoppers and
/// [`CheckoutError::EmptyCart`] when there is nothing to buy.
pub fn begin_checkout(identity: &Identity, cart: &CartStore) -> Result<&'static str> {
    if !identity.signed_in {
        return Err(CheckoutError::NotSignedIn);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(CHECKOUT_ROUTE)
}

/// Generate a zero-padded numeric delivery code.
pub fn generate_delivery_code<R: Rng + ?Sized>(rng: &mut R) -> DeliveryCode {
    let code: String = (0..DELIVERY_CODE_DIGITS)
        .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
        .collect();
    DeliveryCode::new(code)
}

/// Record a pending order for the cart's contents and empty the cart.
///
/// The order gets a fresh UUID and delivery code, is appended to
/// `admin_orders` and stored as `latestOrder`. The cart is cleared in memory
/// only; persisting it is up to the caller.
///
/// Both writes land or neither does: if `latestOrder` cannot be written,
/// `admin_orders` is restored to what it held before the call.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, and a storage
/// error if `admin_orders` is unreadable or a write fails. On any error the
/// cart is kept.
#[instrument(skip_all, fields(items = cart.items().len()))]
pub fn place_order<S: LocalStorage + ?Sized>(
    storage: &mut S,
    cart: &mut CartStore,
    details: CheckoutDetails,
    now: DateTime<Utc>,
) -> Result<Order> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let previous: Option<Vec<Order>> = storage::read_json(&*storage, ADMIN_ORDERS_KEY)?;
    let mut orders = previous.clone().unwrap_or_default();

    let order = Order {
        id: OrderId::new(Uuid::new_v4().to_string()),
        status: OrderStatus::Pending,
        total_amount: cart.cart_total_amount(),
        created_at: now,
        payment_method: details.payment_method,
        shipping_method: details.shipping.method,
        shipping_days: details.shipping.days,
        user_id: details.user_id,
        delivery_code: Some(generate_delivery_code(&mut rand::rng())),
        personal_info: details.personal_info,
    };

    orders.push(order.clone());
    storage::write_json(storage, ADMIN_ORDERS_KEY, &orders)?;
    if let Err(e) = storage::write_json(storage, LATEST_ORDER_KEY, &order) {
        error!(
            order_id = %order.id,
            error = %e,
            "Failed to store latest order, rolling back"
        );
        restore_orders(storage, previous.as_deref());
        return Err(e.into());
    }
    cart.clear();

    info!(order_id = %order.id, total = %order.total_amount, "Order placed");
    Ok(order)
}

/// Put `admin_orders` back the way it was before a failed placement.
fn restore_orders<S: LocalStorage + ?Sized>(storage: &mut S, previous: Option<&[Order]>) {
    let restored = match previous {
        Some(orders) => storage::write_json(storage, ADMIN_ORDERS_KEY, orders),
        None => storage.remove_item(ADMIN_ORDERS_KEY),
    };
    if let Err(e) = restored {
        error!(error = %e, "Failed to roll back admin_orders");
    }
}

/// The most recently placed order, if any.
///
/// # Errors
///
/// Returns an error if the stored snapshot cannot be read or decoded.
pub fn latest_order<S: LocalStorage + ?Sized>(
    storage: &S,
) -> std::result::Result<Option<Order>, StorageError> {
    storage::read_json(storage, LATEST_ORDER_KEY)
}
