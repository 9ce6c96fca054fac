//! PUGIL Storefront library.
//!
//! Shopper-side state: the read-only [`catalog`], the [`cart`] and the
//! [`checkout`] hand-off. Rendering and routing belong to whatever front end
//! drives these types.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;

pub use cart::{CartItem, CartStore};
pub use catalog::{Catalog, CatalogProduct, ProductCard};
pub use checkout::{CheckoutDetails, ShippingOption, begin_checkout, latest_order, place_order};
pub use error::CheckoutError;
