//! Persisted records.
//!
//! These are the shapes written to local storage. Field names follow the
//! stored JSON exactly, so existing browser data deserializes unchanged.

pub mod order;
pub mod product;

pub use order::{DeliveryCode, Order, PersonalInfo};
pub use product::{PLACEHOLDER_IMAGE, Product};
